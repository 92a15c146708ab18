#![no_std]

mod error;
pub mod events;
mod storage;
mod validation;


pub use error::Error;
use events::*;
use storage::DataKey;

use custody_common::{access, ledger, LedgerClient};
use soroban_sdk::{contract, contractimpl, log, Address, BytesN, Env, Symbol, Vec};

#[contract]
pub struct Sportsplex;

#[contractimpl]
impl Sportsplex {
    // ============================================
    // INITIALIZATION & ROLES
    // ============================================

    /// Bind the custodian to the Oracle that provisions it and raises
    /// capital into its SPX balance.
    pub fn __constructor(env: Env, oracle: Address) {
        env.storage().instance().set(&DataKey::Oracle, &oracle);
        storage::bump_instance(&env);
    }

    /// Set the owner and token. Only the bound Oracle may call this.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    /// - `NotInitialized`: No Oracle bound
    pub fn initialize(env: Env, owner: Address, token: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        let oracle = Self::oracle(env.clone())?;
        oracle.require_auth();

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::Token, &token);
        access::init(&env, &owner);
        storage::bump_instance(&env);

        log!(&env, "sportsplex initialized", owner, token, oracle);

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
    // CUSTOMER FUNDS
    // ============================================

    /// Credit a customer from the Sportsplex balance
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not an admin
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientBalance`: Sportsplex holds less than `amount`
    pub fn add_funds(
        env: Env,
        caller: Address,
        customer: Address,
        amount: i128,
        desc: BytesN<32>,
    ) -> Result<(), Error> {
        let token = Self::load_token(&env)?;
        access::require_admin(&env, &caller)?;

        ledger::move_funds(&env, &token, &env.current_contract_address(), &customer, amount)?;

        log!(&env, "add funds", customer, amount);

        env.events().publish(
            (Symbol::new(&env, "add_funds"), customer.clone()),
            AddFundsEvent {
                customer,
                amount,
                desc,
            },
        );

        Ok(())
    }

    /// Customer hands previously added funds back
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientBalance`: Customer holds less than `amount`
    pub fn cancel_add_funds(
        env: Env,
        customer: Address,
        amount: i128,
        desc: BytesN<32>,
    ) -> Result<(), Error> {
        let token = Self::load_token(&env)?;
        customer.require_auth();

        ledger::move_funds(&env, &token, &customer, &env.current_contract_address(), amount)?;

        log!(&env, "cancel add funds", customer, amount);

        env.events().publish(
            (Symbol::new(&env, "cancel_add_funds"), customer.clone()),
            CancelAddFundsEvent {
                customer,
                amount,
                desc,
            },
        );

        Ok(())
    }

    // ============================================
    // CHARGES
    // ============================================

    /// Customer pays a charge to the Sportsplex
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientBalance`: Customer holds less than `amount`
    pub fn pay_charge(
        env: Env,
        customer: Address,
        amount: i128,
        desc: BytesN<32>,
    ) -> Result<(), Error> {
        let token = Self::load_token(&env)?;
        customer.require_auth();

        ledger::move_funds(&env, &token, &customer, &env.current_contract_address(), amount)?;

        log!(&env, "payment", customer, amount);

        env.events().publish(
            (Symbol::new(&env, "payment"), customer.clone()),
            PaymentEvent {
                customer,
                amount,
                desc,
            },
        );

        Ok(())
    }

    /// Refund a charge to the customer
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not an admin
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientBalance`: Sportsplex holds less than `amount`
    pub fn cancel_payment(
        env: Env,
        caller: Address,
        customer: Address,
        amount: i128,
        desc: BytesN<32>,
    ) -> Result<(), Error> {
        let token = Self::load_token(&env)?;
        access::require_admin(&env, &caller)?;

        ledger::move_funds(&env, &token, &env.current_contract_address(), &customer, amount)?;

        log!(&env, "cancel payment", customer, amount);

        env.events().publish(
            (Symbol::new(&env, "cancel_payment"), customer.clone()),
            CancelPaymentEvent {
                customer,
                amount,
                desc,
            },
        );

        Ok(())
    }

    // ============================================
    // REWARDS
    // ============================================

    /// Pay a reward to a customer
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not an admin
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientBalance`: Sportsplex holds less than `amount`
    pub fn reward(
        env: Env,
        caller: Address,
        customer: Address,
        amount: i128,
        desc: BytesN<32>,
    ) -> Result<(), Error> {
        let token = Self::load_token(&env)?;
        access::require_admin(&env, &caller)?;

        ledger::move_funds(&env, &token, &env.current_contract_address(), &customer, amount)?;

        log!(&env, "reward", customer, amount);

        Self::publish_reward(&env, customer, amount, desc);

        Ok(())
    }

    /// Pay `amounts[i]` to `customers[i]` for every i, or nothing at all.
    ///
    /// The whole batch is validated against the Sportsplex balance before the
    /// first transfer. An empty batch succeeds without events.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `Unauthorized`: Caller is not an admin
    /// - `LengthMismatch`: Argument vectors differ in length
    /// - `InvalidAmount`: Some amount <= 0, or the total overflows
    /// - `InsufficientBalance`: Sportsplex holds less than the batch total
    pub fn batch_reward(
        env: Env,
        caller: Address,
        customers: Vec<Address>,
        amounts: Vec<i128>,
        descs: Vec<BytesN<32>>,
    ) -> Result<(), Error> {
        let token = Self::load_token(&env)?;
        access::require_admin(&env, &caller)?;

        let total = validation::batch_total(&customers, &amounts, &descs)?;
        if customers.is_empty() {
            return Ok(());
        }

        let this = env.current_contract_address();
        ledger::check_debit(&env, &token, &this, total)?;

        let ledger = LedgerClient::new(&env, &token);
        for i in 0..customers.len() {
            let customer = customers.get_unchecked(i);
            let amount = amounts.get_unchecked(i);
            ledger.transfer(&this, &customer, &amount);
            Self::publish_reward(&env, customer, amount, descs.get_unchecked(i));
        }

        log!(&env, "batch reward", customers.len(), total);

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

    pub fn oracle(env: Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::Oracle)
            .ok_or(Error::NotInitialized)
    }

    /// SPX currently held by the Sportsplex
    pub fn balance(env: Env) -> Result<i128, Error> {
        let token = Self::token(env.clone())?;
        Ok(LedgerClient::new(&env, &token).balance_of(&env.current_contract_address()))
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn load_token(env: &Env) -> Result<Address, Error> {
        let token = Self::token(env.clone())?;
        storage::bump_instance(env);
        Ok(token)
    }

    fn publish_reward(env: &Env, customer: Address, amount: i128, desc: BytesN<32>) {
        env.events().publish(
            (Symbol::new(env, "reward"), customer.clone()),
            RewardEvent {
                customer,
                amount,
                desc,
            },
        );
    }
}
