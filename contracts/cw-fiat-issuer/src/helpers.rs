use cosmwasm_std::{Addr, Deps};

use crate::error::ContractError;
use crate::state::{Ownership, Role, DENYLIST, IS_PAUSED, OWNERSHIP};

/// Loads the ownership record, reporting the pre-genesis "no owner" state as
/// a typed error rather than a raw storage miss.
pub fn get_ownership(deps: Deps) -> Result<Ownership, ContractError> {
    OWNERSHIP
        .may_load(deps.storage)?
        .ok_or_else(|| ContractError::user_not_found("owner"))
}

pub fn check_is_owner(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let ownership = get_ownership(deps)?;
    if ownership.owner() != sender {
        return Err(ContractError::unauthorized("owner", sender));
    }
    Ok(())
}

/// Loads the holder of a singleton role, failing when the role is unset.
pub fn load_role(deps: Deps, role: Role) -> Result<Addr, ContractError> {
    role.store()
        .may_load(deps.storage)?
        .ok_or_else(|| ContractError::user_not_found(role.as_str()))
}

pub fn check_holds_role(deps: Deps, role: Role, sender: &Addr) -> Result<(), ContractError> {
    let holder = load_role(deps, role)?;
    if holder != *sender {
        return Err(ContractError::unauthorized(role.as_str(), sender));
    }
    Ok(())
}

/// Privileged roles are mutually exclusive: an address may hold at most one
/// of owner, pending owner, master minter, pauser or blacklister. Every
/// role assignment funnels through this check.
pub fn assert_not_privileged(deps: Deps, address: &Addr) -> Result<(), ContractError> {
    if let Some(ownership) = OWNERSHIP.may_load(deps.storage)? {
        if ownership.owner() == address {
            return Err(ContractError::already_privileged(address, "owner"));
        }
        if ownership.pending_owner() == Some(address) {
            return Err(ContractError::already_privileged(address, "pending owner"));
        }
    }
    for role in [Role::MasterMinter, Role::Pauser, Role::Blacklister] {
        if role.store().may_load(deps.storage)?.as_ref() == Some(address) {
            return Err(ContractError::already_privileged(address, role.as_str()));
        }
    }
    Ok(())
}

/// Canonical raw bytes for an address under any prefix, either checksum
/// variant and no length ceiling. A failure here aborts the enclosing
/// operation; there is no raw-string fallback.
pub fn canonical_bytes(address: &str) -> Result<Vec<u8>, ContractError> {
    let (_hrp, bytes) = cw_bech32_address::decode_no_limit_to_base256(address)?;
    Ok(bytes)
}

pub fn check_is_not_denied(deps: Deps, address: &str) -> Result<(), ContractError> {
    let key = canonical_bytes(address)?;
    if DENYLIST.has(deps.storage, &key) {
        return Err(ContractError::Denied {
            address: address.to_string(),
        });
    }
    Ok(())
}

pub fn check_is_not_paused(deps: Deps) -> Result<(), ContractError> {
    if IS_PAUSED.load(deps.storage)? {
        return Err(ContractError::Paused {});
    }
    Ok(())
}
