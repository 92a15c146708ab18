#![no_std]

mod error;
pub mod events;
mod storage;

#[cfg(test)]
mod test;

pub use error::Error;
use events::{DepositEvent, RaiseCapitalEvent, WithdrawEvent};
use storage::DataKey;

use custody_common::{access, ledger};
use soroban_sdk::{contract, contractclient, contractimpl, log, Address, BytesN, Env, Symbol};

/// Setup entry point of the Sportsplex custodian the Oracle provisions.
#[contractclient(name = "SportsplexSetupClient")]
pub trait SportsplexSetup {
    fn initialize(env: Env, owner: Address, token: Address);
}

#[contract]
pub struct Oracle;

#[contractimpl]
impl Oracle {
    // ============================================
    // INITIALIZATION & ROLES
    // ============================================

    /// Record `owner` as owner and admin when the Oracle is deployed.
    pub fn __constructor(env: Env, owner: Address) {
        access::init(&env, &owner);
        storage::bump_instance(&env);
    }

    /// Attach the SPX token and set up the Sportsplex custodian under the
    /// same owner. Owner only.
    ///
    /// The token must have been deployed with this Oracle as holder, and the
    /// Sportsplex bound to this Oracle.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `NotInitialized`: No owner recorded
    pub fn initialize(env: Env, token: Address, sportsplex: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        let owner = access::owner(&env).ok_or(Error::NotInitialized)?;
        owner.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Token, &token);
        env.storage().instance().set(&DataKey::Sportsplex, &sportsplex);
        storage::bump_instance(&env);

        SportsplexSetupClient::new(&env, &sportsplex).initialize(&owner, &token);

        log!(&env, "oracle initialized", owner, token, sportsplex);

        Ok(())
    }

    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not the owner
    pub fn add_admin(env: Env, caller: Address, admin: Address) -> Result<(), Error> {
        storage::bump_instance(&env);
        access::add_admin(&env, &caller, &admin)?;
        Ok(())
    }

    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not the owner
    /// - `CannotRemoveOwner`: `admin` is the owner
    pub fn remove_admin(env: Env, caller: Address, admin: Address) -> Result<(), Error> {
        storage::bump_instance(&env);
        access::remove_admin(&env, &caller, &admin)?;
        Ok(())
    }

    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not the owner
    pub fn transfer_ownership(env: Env, caller: Address, new_owner: Address) -> Result<(), Error> {
        storage::bump_instance(&env);
        access::transfer_ownership(&env, &caller, &new_owner)?;
        Ok(())
    }

    // ============================================
    // CUSTODY OPERATIONS
    // ============================================

    /// Pay `amount` out of the Oracle's holdings to `to`. `from` names the
    /// off-ledger origin of the deposit and is only recorded in the event.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not an admin
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientBalance`: Oracle holds less than `amount`
    pub fn deposit(
        env: Env,
        caller: Address,
        from: Address,
        to: Address,
        amount: i128,
        desc: BytesN<32>,
    ) -> Result<(), Error> {
        let token = Self::load_token(&env)?;
        access::require_admin(&env, &caller)?;

        ledger::move_funds(&env, &token, &env.current_contract_address(), &to, amount)?;

        log!(&env, "deposit", to, amount);

        env.events().publish(
            (Symbol::new(&env, "deposit"), to.clone()),
            DepositEvent {
                from,
                to,
                amount,
                desc,
            },
        );

        Ok(())
    }

    /// Return `amount` of the caller's tokens to the Oracle. Open to any
    /// holder; `to` names the off-ledger destination.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientBalance`: Caller holds less than `amount`
    pub fn withdraw(
        env: Env,
        caller: Address,
        to: Address,
        amount: i128,
        desc: BytesN<32>,
    ) -> Result<(), Error> {
        let token = Self::load_token(&env)?;
        caller.require_auth();

        ledger::move_funds(&env, &token, &caller, &env.current_contract_address(), amount)?;

        log!(&env, "withdraw", caller, amount);

        env.events().publish(
            (Symbol::new(&env, "withdraw"), caller.clone()),
            WithdrawEvent {
                from: caller,
                to,
                amount,
                desc,
            },
        );

        Ok(())
    }

    /// Move `amount` from the Oracle to the Sportsplex custodian
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not an admin
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientBalance`: Oracle holds less than `amount`
    pub fn raise_capital(
        env: Env,
        caller: Address,
        from: Address,
        amount: i128,
        desc: BytesN<32>,
    ) -> Result<(), Error> {
        let token = Self::load_token(&env)?;
        let sportsplex = Self::sportsplex(env.clone())?;
        access::require_admin(&env, &caller)?;

        ledger::move_funds(
            &env,
            &token,
            &env.current_contract_address(),
            &sportsplex,
            amount,
        )?;

        log!(&env, "raise capital", sportsplex, amount);

        env.events().publish(
            (Symbol::new(&env, "raise_capital"), from.clone()),
            RaiseCapitalEvent { from, amount, desc },
        );

        Ok(())
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    pub fn owner(env: Env) -> Result<Address, Error> {
        access::owner(&env).ok_or(Error::NotInitialized)
    }

    pub fn is_admin(env: Env, account: Address) -> bool {
        access::is_admin(&env, &account)
    }

    pub fn token(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Token)
            .ok_or(Error::NotInitialized)
    }

    pub fn sportsplex(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Sportsplex)
            .ok_or(Error::NotInitialized)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn load_token(env: &Env) -> Result<Address, Error> {
        let token = Self::token(env.clone())?;
        storage::bump_instance(env);
        Ok(token)
    }
}
