use crate::error::Error;
use soroban_sdk::{Address, BytesN, Vec};

/// Check a reward batch element by element and return the total it pays out.
///
/// Lengths must match, every amount must be positive and the running total
/// must fit in an i128. Nothing here touches the ledger, so a rejected batch
/// leaves every balance as it was.
pub fn batch_total(
    customers: &Vec<Address>,
    amounts: &Vec<i128>,
    descs: &Vec<BytesN<32>>,
) -> Result<i128, Error> {
    if customers.len() != amounts.len() || amounts.len() != descs.len() {
        return Err(Error::LengthMismatch);
    }

    let mut total: i128 = 0;
    for amount in amounts.iter() {
        if amount <= 0 {
            return Err(Error::InvalidAmount);
        }
        total = total.checked_add(amount).ok_or(Error::InvalidAmount)?;
    }

    Ok(total)
}
