use soroban_sdk::{contracterror, contracttype, log, Address, Env, Symbol};

use crate::events::{AddAdminEvent, RemoveAdminEvent, TransferOwnershipEvent};

const TTL_THRESHOLD: u32 = 100_000;
const TTL_EXTEND_TO: u32 = 200_000;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum AccessError {
    /// No owner recorded yet
    NotInitialized = 2,
    /// Caller lacks the required role
    Unauthorized = 10,
    /// The owner always keeps admin rights
    CannotRemoveOwner = 11,
}

#[contracttype]
#[derive(Clone)]
pub enum RoleKey {
    Owner,
    Admin(Address),
}

/// Record `owner` as owner and grant it admin rights.
pub fn init(env: &Env, owner: &Address) {
    env.storage().instance().set(&RoleKey::Owner, owner);
    grant(env, owner);
}

pub fn owner(env: &Env) -> Option<Address> {
    env.storage().instance().get(&RoleKey::Owner)
}

pub fn is_admin(env: &Env, account: &Address) -> bool {
    let key = RoleKey::Admin(account.clone());
    let persistent = env.storage().persistent();
    let admin = persistent.get::<RoleKey, bool>(&key).unwrap_or(false);
    if admin {
        persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
    }
    admin
}

/// Authenticate `caller` and check it is the current owner.
///
/// Returns the owner on success.
pub fn require_owner(env: &Env, caller: &Address) -> Result<Address, AccessError> {
    let owner = owner(env).ok_or(AccessError::NotInitialized)?;
    caller.require_auth();

    if owner != *caller {
        return Err(AccessError::Unauthorized);
    }
    Ok(owner)
}

/// Authenticate `caller` and check it holds admin rights.
pub fn require_admin(env: &Env, caller: &Address) -> Result<(), AccessError> {
    if owner(env).is_none() {
        return Err(AccessError::NotInitialized);
    }
    caller.require_auth();

    if !is_admin(env, caller) {
        return Err(AccessError::Unauthorized);
    }
    Ok(())
}

/// Owner only. Granting an existing admin is a no-op on state but still
/// emits the event.
pub fn add_admin(env: &Env, caller: &Address, admin: &Address) -> Result<(), AccessError> {
    require_owner(env, caller)?;

    grant(env, admin);
    publish_add_admin(env, admin);

    Ok(())
}

/// Owner only.
pub fn remove_admin(env: &Env, caller: &Address, admin: &Address) -> Result<(), AccessError> {
    let owner = require_owner(env, caller)?;

    if owner == *admin {
        return Err(AccessError::CannotRemoveOwner);
    }

    revoke(env, admin);
    publish_remove_admin(env, admin);

    Ok(())
}

/// Owner only. Moves admin rights together with ownership and emits
/// `remove_admin`, `add_admin`, `transfer_ownership` in that order.
pub fn transfer_ownership(
    env: &Env,
    caller: &Address,
    new_owner: &Address,
) -> Result<(), AccessError> {
    let previous_owner = require_owner(env, caller)?;

    revoke(env, &previous_owner);
    publish_remove_admin(env, &previous_owner);

    grant(env, new_owner);
    publish_add_admin(env, new_owner);

    env.storage().instance().set(&RoleKey::Owner, new_owner);

    log!(env, "ownership transferred", previous_owner, new_owner.clone());

    env.events().publish(
        (Symbol::new(env, "transfer_ownership"), new_owner.clone()),
        TransferOwnershipEvent {
            previous_owner,
            new_owner: new_owner.clone(),
        },
    );

    Ok(())
}

fn grant(env: &Env, account: &Address) {
    let key = RoleKey::Admin(account.clone());
    let persistent = env.storage().persistent();
    persistent.set(&key, &true);
    persistent.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
}

fn revoke(env: &Env, account: &Address) {
    env.storage()
        .persistent()
        .remove(&RoleKey::Admin(account.clone()));
}

fn publish_add_admin(env: &Env, admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "add_admin"), admin.clone()),
        AddAdminEvent {
            admin: admin.clone(),
        },
    );
}

fn publish_remove_admin(env: &Env, admin: &Address) {
    env.events().publish(
        (Symbol::new(env, "remove_admin"), admin.clone()),
        RemoveAdminEvent {
            admin: admin.clone(),
        },
    );
}
