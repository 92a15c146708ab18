#![cfg(test)]

use super::*;
use custody_common::events::{AddAdminEvent, RemoveAdminEvent, TransferOwnershipEvent};
use soroban_sdk::{
    testutils::{Address as _, Events},
    Address, BytesN, Env, IntoVal, TryFromVal, Val, Vec,
};
use sportsplex::{Sportsplex, SportsplexClient};
use spx_token::{SportsplexToken, SportsplexTokenClient, TOTAL_SUPPLY};

struct TestContext {
    env: Env,
    owner: Address,
    admin: Address,
    anonymous: Address,
    oracle: OracleClient<'static>,
    token: SportsplexTokenClient<'static>,
    sportsplex_id: Address,
    desc: BytesN<32>,
}

fn setup_test() -> TestContext {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let admin = Address::generate(&env);
    let anonymous = Address::generate(&env);

    let oracle_id = env.register(Oracle, (&owner,));
    let token_id = env.register(SportsplexToken, (&oracle_id,));
    let sportsplex_id = env.register(Sportsplex, (&oracle_id,));

    let oracle = OracleClient::new(&env, &oracle_id);
    oracle.initialize(&token_id, &sportsplex_id);
    oracle.add_admin(&owner, &admin);

    let token = SportsplexTokenClient::new(&env, &token_id);
    let desc = BytesN::from_array(&env, &[0x46; 32]);

    TestContext {
        env,
        owner,
        admin,
        anonymous,
        oracle,
        token,
        sportsplex_id,
        desc,
    }
}

/// Topics and data of the most recent event published by `contract`.
fn last_event(env: &Env, contract: &Address) -> (Vec<Val>, Val) {
    let mut last = None;
    for (id, topics, data) in env.events().all().iter() {
        if id == *contract {
            last = Some((topics, data));
        }
    }
    last.expect("no event from contract")
}

fn has_event(env: &Env, contract: &Address, name: &str) -> bool {
    let symbol = Symbol::new(env, name);
    env.events().all().iter().any(|(id, topics, _)| {
        id == *contract
            && topics
                .get(0)
                .and_then(|topic| Symbol::try_from_val(env, &topic).ok())
                .map_or(false, |topic| topic == symbol)
    })
}

#[test]
fn test_initial_distribution() {
    let ctx = setup_test();

    assert_eq!(ctx.token.total_supply(), TOTAL_SUPPLY);
    assert_eq!(ctx.token.decimals(), 8);
    assert_eq!(ctx.token.balance_of(&ctx.oracle.address), TOTAL_SUPPLY);
    assert_eq!(ctx.token.balance_of(&ctx.sportsplex_id), 0);

    assert_eq!(ctx.oracle.token(), ctx.token.address);
    assert_eq!(ctx.oracle.sportsplex(), ctx.sportsplex_id);
    assert_eq!(ctx.oracle.owner(), ctx.owner);
    assert!(ctx.oracle.is_admin(&ctx.owner));
}

#[test]
fn test_initialize_twice() {
    let ctx = setup_test();

    let result = ctx
        .oracle
        .try_initialize(&ctx.token.address, &ctx.anonymous);
    assert_eq!(result, Err(Ok(Error::AlreadyInitialized)));
    assert_eq!(ctx.oracle.sportsplex(), ctx.sportsplex_id);
}

#[test]
fn test_deployment_cannot_be_hijacked() {
    let env = Env::default();

    let owner = Address::generate(&env);
    let intruder = Address::generate(&env);

    let oracle_id = env.register(Oracle, (&owner,));
    let token_id = env.register(SportsplexToken, (&oracle_id,));
    let sportsplex_id = env.register(Sportsplex, (&oracle_id,));

    let oracle = OracleClient::new(&env, &oracle_id);
    let token = SportsplexTokenClient::new(&env, &token_id);
    let sportsplex = SportsplexClient::new(&env, &sportsplex_id);

    // the supply is minted at deployment, before anyone can call in
    assert_eq!(token.balance_of(&oracle_id), TOTAL_SUPPLY);
    assert_eq!(token.balance_of(&intruder), 0);

    // neither the Oracle nor its owner authorized these
    assert!(sportsplex.try_initialize(&intruder, &token_id).is_err());
    assert!(oracle.try_initialize(&token_id, &sportsplex_id).is_err());
    assert_eq!(oracle.try_token(), Err(Ok(Error::NotInitialized)));

    env.mock_all_auths();
    oracle.initialize(&token_id, &sportsplex_id);

    assert_eq!(oracle.owner(), owner);
    assert_eq!(sportsplex.owner(), owner);
    assert_eq!(sportsplex.oracle(), oracle_id);
    assert!(!sportsplex.is_admin(&intruder));
    assert_eq!(token.balance_of(&oracle_id), TOTAL_SUPPLY);
}

#[test]
fn test_uninitialized_oracle() {
    let env = Env::default();
    env.mock_all_auths();

    let owner = Address::generate(&env);
    let oracle_id = env.register(Oracle, (&owner,));
    let oracle = OracleClient::new(&env, &oracle_id);
    let desc = BytesN::from_array(&env, &[0; 32]);

    assert_eq!(oracle.owner(), owner);
    assert!(oracle.is_admin(&owner));
    assert_eq!(oracle.try_token(), Err(Ok(Error::NotInitialized)));
    assert_eq!(oracle.try_sportsplex(), Err(Ok(Error::NotInitialized)));
    assert_eq!(
        oracle.try_deposit(&owner, &owner, &owner, &1, &desc),
        Err(Ok(Error::NotInitialized))
    );
    assert_eq!(
        oracle.try_raise_capital(&owner, &owner, &1, &desc),
        Err(Ok(Error::NotInitialized))
    );
}

#[test]
fn test_transfer_ownership() {
    let ctx = setup_test();
    let eoa0 = Address::generate(&ctx.env);

    assert_eq!(
        ctx.oracle.try_transfer_ownership(&ctx.anonymous, &ctx.anonymous),
        Err(Ok(Error::Unauthorized))
    );

    ctx.oracle.transfer_ownership(&ctx.owner, &eoa0);
    assert_eq!(ctx.oracle.owner(), eoa0);
    assert!(!ctx.oracle.is_admin(&ctx.owner));

    ctx.oracle.transfer_ownership(&eoa0, &ctx.owner);

    let events = ctx.env.events().all();
    let n = events.len();

    let (_, topics, data) = events.get(n - 3).unwrap();
    let expected: Vec<Val> = (Symbol::new(&ctx.env, "remove_admin"), eoa0.clone()).into_val(&ctx.env);
    assert_eq!(topics, expected);
    let event: RemoveAdminEvent = data.into_val(&ctx.env);
    assert_eq!(event.admin, eoa0);

    let (_, _, data) = events.get(n - 2).unwrap();
    let event: AddAdminEvent = data.into_val(&ctx.env);
    assert_eq!(event.admin, ctx.owner);

    let (_, _, data) = events.get(n - 1).unwrap();
    let event: TransferOwnershipEvent = data.into_val(&ctx.env);
    assert_eq!(event.previous_owner, eoa0);
    assert_eq!(event.new_owner, ctx.owner);

    assert_eq!(ctx.oracle.owner(), ctx.owner);
    assert!(ctx.oracle.is_admin(&ctx.owner));
    assert!(!ctx.oracle.is_admin(&eoa0));
}

#[test]
fn test_add_admin() {
    let ctx = setup_test();
    let eoa1 = Address::generate(&ctx.env);
    let eoa2 = Address::generate(&ctx.env);

    assert!(!ctx.oracle.is_admin(&eoa1));
    assert_eq!(
        ctx.oracle.try_add_admin(&ctx.anonymous, &eoa1),
        Err(Ok(Error::Unauthorized))
    );
    ctx.oracle.add_admin(&ctx.owner, &eoa1);
    assert!(ctx.oracle.is_admin(&eoa1));

    ctx.oracle.add_admin(&ctx.owner, &eoa2);
    let (topics, data) = last_event(&ctx.env, &ctx.oracle.address);
    let expected: Vec<Val> = (Symbol::new(&ctx.env, "add_admin"), eoa2.clone()).into_val(&ctx.env);
    assert_eq!(topics, expected);
    let event: AddAdminEvent = data.into_val(&ctx.env);
    assert_eq!(event, AddAdminEvent { admin: eoa2 });
}

#[test]
fn test_remove_admin() {
    let ctx = setup_test();
    let eoa1 = Address::generate(&ctx.env);
    let eoa2 = Address::generate(&ctx.env);

    ctx.oracle.add_admin(&ctx.owner, &eoa1);
    ctx.oracle.add_admin(&ctx.owner, &eoa2);

    assert_eq!(
        ctx.oracle.try_remove_admin(&ctx.anonymous, &eoa1),
        Err(Ok(Error::Unauthorized))
    );
    ctx.oracle.remove_admin(&ctx.owner, &eoa1);
    assert!(!ctx.oracle.is_admin(&eoa1));

    ctx.oracle.remove_admin(&ctx.owner, &eoa2);
    let (_, data) = last_event(&ctx.env, &ctx.oracle.address);
    let event: RemoveAdminEvent = data.into_val(&ctx.env);
    assert_eq!(event, RemoveAdminEvent { admin: eoa2 });

    assert_eq!(
        ctx.oracle.try_remove_admin(&ctx.owner, &ctx.owner),
        Err(Ok(Error::CannotRemoveOwner))
    );
}

#[test]
fn test_deposit() {
    let ctx = setup_test();
    let eoa1 = Address::generate(&ctx.env);
    let eoa2 = Address::generate(&ctx.env);
    let oracle_id = ctx.oracle.address.clone();

    let b0 = ctx.token.balance_of(&eoa2);
    let b1 = ctx.token.balance_of(&oracle_id);
    let m0 = 1000i128;

    assert_eq!(
        ctx.oracle.try_deposit(&ctx.anonymous, &eoa1, &eoa2, &m0, &ctx.desc),
        Err(Ok(Error::Unauthorized))
    );
    assert!(!has_event(&ctx.env, &oracle_id, "deposit"));
    assert_eq!(ctx.token.balance_of(&eoa2), b0);

    ctx.oracle.deposit(&ctx.admin, &eoa1, &eoa2, &m0, &ctx.desc);
    assert_eq!(ctx.token.balance_of(&eoa2), b0 + m0);
    assert_eq!(ctx.token.balance_of(&oracle_id), b1 - m0);

    ctx.oracle.deposit(&ctx.admin, &eoa1, &eoa2, &m0, &ctx.desc);
    let (topics, data) = last_event(&ctx.env, &oracle_id);
    assert_eq!(ctx.token.balance_of(&eoa2), b0 + 2 * m0);
    assert_eq!(ctx.token.balance_of(&oracle_id), b1 - 2 * m0);

    let expected: Vec<Val> = (Symbol::new(&ctx.env, "deposit"), eoa2.clone()).into_val(&ctx.env);
    assert_eq!(topics, expected);
    let event: DepositEvent = data.into_val(&ctx.env);
    assert_eq!(
        event,
        DepositEvent {
            from: eoa1,
            to: eoa2,
            amount: m0,
            desc: ctx.desc.clone(),
        }
    );
}

#[test]
fn test_deposit_rejects_non_positive_amount() {
    let ctx = setup_test();
    let eoa1 = Address::generate(&ctx.env);

    assert_eq!(
        ctx.oracle.try_deposit(&ctx.admin, &eoa1, &eoa1, &0, &ctx.desc),
        Err(Ok(Error::InvalidAmount))
    );
    assert_eq!(
        ctx.oracle.try_deposit(&ctx.admin, &eoa1, &eoa1, &-1, &ctx.desc),
        Err(Ok(Error::InvalidAmount))
    );
    assert_eq!(ctx.token.balance_of(&ctx.oracle.address), TOTAL_SUPPLY);
}

#[test]
fn test_deposit_beyond_supply() {
    let ctx = setup_test();
    let eoa1 = Address::generate(&ctx.env);

    let result = ctx
        .oracle
        .try_deposit(&ctx.admin, &eoa1, &eoa1, &(TOTAL_SUPPLY + 1), &ctx.desc);
    assert_eq!(result, Err(Ok(Error::InsufficientBalance)));
    assert_eq!(ctx.token.balance_of(&ctx.oracle.address), TOTAL_SUPPLY);
    assert_eq!(ctx.token.balance_of(&eoa1), 0);
}

#[test]
fn test_withdraw() {
    let ctx = setup_test();
    let eoa1 = Address::generate(&ctx.env);
    let eoa2 = Address::generate(&ctx.env);
    let oracle_id = ctx.oracle.address.clone();

    ctx.oracle.deposit(&ctx.admin, &eoa1, &eoa2, &2000, &ctx.desc);

    let b0 = ctx.token.balance_of(&eoa2);
    let b1 = ctx.token.balance_of(&oracle_id);
    let m0 = 100i128;

    ctx.oracle.withdraw(&eoa2, &eoa1, &m0, &ctx.desc);
    assert_eq!(ctx.token.balance_of(&eoa2), b0 - m0);
    assert_eq!(ctx.token.balance_of(&oracle_id), b1 + m0);

    ctx.oracle.withdraw(&eoa2, &eoa1, &m0, &ctx.desc);
    let (topics, data) = last_event(&ctx.env, &oracle_id);
    let expected: Vec<Val> = (Symbol::new(&ctx.env, "withdraw"), eoa2.clone()).into_val(&ctx.env);
    assert_eq!(topics, expected);
    let event: WithdrawEvent = data.into_val(&ctx.env);
    assert_eq!(
        event,
        WithdrawEvent {
            from: eoa2,
            to: eoa1,
            amount: m0,
            desc: ctx.desc.clone(),
        }
    );
}

#[test]
fn test_withdraw_insufficient_balance() {
    let ctx = setup_test();
    let eoa1 = Address::generate(&ctx.env);
    let oracle_id = ctx.oracle.address.clone();

    ctx.oracle.deposit(&ctx.admin, &ctx.admin, &eoa1, &50, &ctx.desc);

    let result = ctx.oracle.try_withdraw(&eoa1, &eoa1, &51, &ctx.desc);
    assert_eq!(result, Err(Ok(Error::InsufficientBalance)));
    assert!(!has_event(&ctx.env, &oracle_id, "withdraw"));
    assert_eq!(ctx.token.balance_of(&eoa1), 50);
    assert_eq!(ctx.token.balance_of(&oracle_id), TOTAL_SUPPLY - 50);
}

#[test]
fn test_raise_capital() {
    let ctx = setup_test();
    let eoa3 = Address::generate(&ctx.env);
    let oracle_id = ctx.oracle.address.clone();

    let b0 = ctx.token.balance_of(&ctx.sportsplex_id);
    let b1 = ctx.token.balance_of(&oracle_id);
    let m0 = 10i128.pow(15);

    assert_eq!(
        ctx.oracle.try_raise_capital(&ctx.anonymous, &eoa3, &m0, &ctx.desc),
        Err(Ok(Error::Unauthorized))
    );
    assert!(!has_event(&ctx.env, &oracle_id, "raise_capital"));

    ctx.oracle.raise_capital(&ctx.admin, &eoa3, &m0, &ctx.desc);
    assert_eq!(ctx.token.balance_of(&ctx.sportsplex_id), b0 + m0);
    assert_eq!(ctx.token.balance_of(&oracle_id), b1 - m0);

    ctx.oracle.raise_capital(&ctx.admin, &eoa3, &m0, &ctx.desc);
    let (topics, data) = last_event(&ctx.env, &oracle_id);
    let expected: Vec<Val> =
        (Symbol::new(&ctx.env, "raise_capital"), eoa3.clone()).into_val(&ctx.env);
    assert_eq!(topics, expected);
    let event: RaiseCapitalEvent = data.into_val(&ctx.env);
    assert_eq!(
        event,
        RaiseCapitalEvent {
            from: eoa3,
            amount: m0,
            desc: ctx.desc.clone(),
        }
    );
}

#[test]
fn test_removed_admin_loses_access() {
    let ctx = setup_test();
    let eoa1 = Address::generate(&ctx.env);

    ctx.oracle.remove_admin(&ctx.owner, &ctx.admin);

    let result = ctx
        .oracle
        .try_deposit(&ctx.admin, &ctx.admin, &eoa1, &10, &ctx.desc);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));
    assert_eq!(ctx.token.balance_of(&eoa1), 0);
}
