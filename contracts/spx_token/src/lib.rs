#![no_std]

mod error;
mod events;
mod storage;

pub use error::Error;
pub use events::{ApproveEvent, MintEvent, TransferEvent};
pub use storage::{DECIMALS, TOKEN_NAME, TOKEN_SYMBOL, TOTAL_SUPPLY};
use storage::DataKey;

use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Symbol};

#[contract]
pub struct SportsplexToken;

#[contractimpl]
impl SportsplexToken {
    /// Mint the whole fixed supply to `holder` when the token is deployed.
    /// Nothing can mint afterwards.
    pub fn __constructor(env: Env, holder: Address) {
        env.storage()
            .instance()
            .set(&DataKey::TotalSupply, &TOTAL_SUPPLY);
        storage::write_balance(&env, &holder, TOTAL_SUPPLY);
        storage::bump_instance(&env);

        log!(&env, "spx minted", holder, TOTAL_SUPPLY);

        env.events().publish(
            (Symbol::new(&env, "mint"), holder.clone()),
            MintEvent {
                to: holder,
                amount: TOTAL_SUPPLY,
            },
        );
    }

    pub fn name(env: Env) -> String {
        String::from_str(&env, TOKEN_NAME)
    }

    pub fn symbol(env: Env) -> String {
        String::from_str(&env, TOKEN_SYMBOL)
    }

    pub fn decimals(_env: Env) -> u32 {
        DECIMALS
    }

    /// Fixed at deployment.
    pub fn total_supply(env: Env) -> i128 {
        env.storage()
            .instance()
            .get(&DataKey::TotalSupply)
            .unwrap_or(0)
    }

    pub fn balance_of(env: Env, account: Address) -> i128 {
        storage::read_balance(&env, &account)
    }

    /// Transfer tokens between accounts
    ///
    /// # Errors
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientBalance`: Not enough balance
    pub fn transfer(env: Env, from: Address, to: Address, amount: i128) -> Result<(), Error> {
        storage::bump_instance(&env);

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        from.require_auth();

        move_balance(&env, &from, &to, amount)?;

        env.events().publish(
            (Symbol::new(&env, "transfer"), from.clone(), to.clone()),
            TransferEvent { from, to, amount },
        );

        Ok(())
    }

    /// Set the amount `spender` may move out of `owner`'s balance
    ///
    /// # Errors
    /// - `InvalidAmount`: Amount < 0
    pub fn approve(env: Env, owner: Address, spender: Address, amount: i128) -> Result<(), Error> {
        storage::bump_instance(&env);

        if amount < 0 {
            return Err(Error::InvalidAmount);
        }

        owner.require_auth();

        storage::write_allowance(&env, &owner, &spender, amount);

        env.events().publish(
            (Symbol::new(&env, "approve"), owner.clone(), spender.clone()),
            ApproveEvent {
                owner,
                spender,
                amount,
            },
        );

        Ok(())
    }

    pub fn allowance(env: Env, owner: Address, spender: Address) -> i128 {
        storage::read_allowance(&env, &owner, &spender)
    }

    /// Move tokens out of `from` using an allowance granted to `spender`
    ///
    /// # Errors
    /// - `InvalidAmount`: Amount <= 0
    /// - `InsufficientAllowance`: Allowance below amount
    /// - `InsufficientBalance`: Not enough balance
    pub fn transfer_from(
        env: Env,
        spender: Address,
        from: Address,
        to: Address,
        amount: i128,
    ) -> Result<(), Error> {
        storage::bump_instance(&env);

        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }

        spender.require_auth();

        let allowance = storage::read_allowance(&env, &from, &spender);
        if allowance < amount {
            return Err(Error::InsufficientAllowance);
        }

        move_balance(&env, &from, &to, amount)?;
        storage::write_allowance(&env, &from, &spender, allowance - amount);

        env.events().publish(
            (Symbol::new(&env, "transfer"), from.clone(), to.clone()),
            TransferEvent { from, to, amount },
        );

        Ok(())
    }
}

/// Debit `from` and credit `to`. Nothing is written unless both sides fit.
fn move_balance(env: &Env, from: &Address, to: &Address, amount: i128) -> Result<(), Error> {
    let from_balance = storage::read_balance(env, from);
    if from_balance < amount {
        return Err(Error::InsufficientBalance);
    }

    if from == to {
        return Ok(());
    }

    let to_balance = storage::read_balance(env, to);
    let new_to_balance = to_balance
        .checked_add(amount)
        .ok_or(Error::InvalidAmount)?;

    storage::write_balance(env, from, from_balance - amount);
    storage::write_balance(env, to, new_to_balance);

    Ok(())
}
