use soroban_sdk::{contractclient, Address, Env};

/// The slice of the SPX token interface the custodians call into.
#[contractclient(name = "LedgerClient")]
pub trait Ledger {
    fn balance_of(env: Env, account: Address) -> i128;
    fn transfer(env: Env, from: Address, to: Address, amount: i128);
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum TransferError {
    InvalidAmount,
    InsufficientBalance,
}

/// Check that `from` can be debited `amount` on `token` without touching state.
pub fn check_debit(
    env: &Env,
    token: &Address,
    from: &Address,
    amount: i128,
) -> Result<(), TransferError> {
    if amount <= 0 {
        return Err(TransferError::InvalidAmount);
    }

    let balance = LedgerClient::new(env, token).balance_of(from);
    if balance < amount {
        return Err(TransferError::InsufficientBalance);
    }

    Ok(())
}

/// Validate the debit, then move `amount` from `from` to `to` on the ledger.
///
/// `from` must either be the calling contract or an account that authorized
/// the enclosing invocation.
pub fn move_funds(
    env: &Env,
    token: &Address,
    from: &Address,
    to: &Address,
    amount: i128,
) -> Result<(), TransferError> {
    check_debit(env, token, from, amount)?;
    LedgerClient::new(env, token).transfer(from, to, &amount);
    Ok(())
}
