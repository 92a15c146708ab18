use soroban_sdk::{contracttype, Env};

pub(crate) const TTL_THRESHOLD: u32 = 100_000;
pub(crate) const TTL_EXTEND_TO: u32 = 200_000;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    Token,
    Sportsplex,
}

pub fn bump_instance(env: &Env) {
    env.storage()
        .instance()
        .extend_ttl(TTL_THRESHOLD, TTL_EXTEND_TO);
}
