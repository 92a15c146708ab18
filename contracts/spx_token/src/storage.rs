use soroban_sdk::{contracttype, Address, Env};

pub const TOKEN_NAME: &str = "SportsplexToken";
pub const TOKEN_SYMBOL: &str = "SPX";
pub const DECIMALS: u32 = 8;
/// 10^9 whole tokens at 8 decimals.
pub const TOTAL_SUPPLY: i128 = 100_000_000_000_000_000;

pub(crate) const TTL_THRESHOLD: u32 = 100_000;
pub(crate) const TTL_EXTEND_TO: u32 = 200_000;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    TotalSupply,
    Balance(Address),
    Allowance(Address, Address), // (owner, spender)
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}

pub fn read_balance(env: &Env, account: &Address) -> i128 {
    let key = DataKey::Balance(account.clone());
    let persistent = env.storage().persistent();
    match persistent.get::<DataKey, i128>(&key) {
        Some(amount) => {
            persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
            amount
        }
        None => 0,
    }
}

/// Zero balances are removed instead of stored.
pub fn write_balance(env: &Env, account: &Address, amount: i128) {
    let key = DataKey::Balance(account.clone());
    let persistent = env.storage().persistent();
    if amount == 0 {
        persistent.remove(&key);
    } else {
        persistent.set(&key, &amount);
        persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}

pub fn read_allowance(env: &Env, owner: &Address, spender: &Address) -> i128 {
    env.storage()
        .persistent()
        .get(&DataKey::Allowance(owner.clone(), spender.clone()))
        .unwrap_or(0)
}

pub fn write_allowance(env: &Env, owner: &Address, spender: &Address, amount: i128) {
    let key = DataKey::Allowance(owner.clone(), spender.clone());
    let persistent = env.storage().persistent();
    if amount == 0 {
        persistent.remove(&key);
    } else {
        persistent.set(&key, &amount);
        persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
}
