use cosmwasm_std::{
    coins, Addr, BankMsg, Coin, CosmosMsg, Deps, DepsMut, Empty, Env, MessageInfo, Order, Response,
    Uint128,
};
use osmosis_std::types::osmosis::tokenfactory::v1beta1::{MsgBurn, MsgMint};

use crate::error::ContractError;
use crate::helpers::{
    assert_not_privileged, canonical_bytes, check_holds_role, check_is_not_denied,
    check_is_not_paused, check_is_owner, get_ownership,
};
use crate::state::{
    Role, DENOM, DENYLIST, IS_PAUSED, MINTER_ALLOWANCES, MINTER_CONTROLLERS, OWNERSHIP,
};

pub fn update_owner(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    check_is_owner(deps.as_ref(), &info.sender)?;

    // An owner must not also hold an operational role, so the candidate has
    // to be unprivileged before the handoff begins.
    let candidate = deps.api.addr_validate(&address)?;
    assert_not_privileged(deps.as_ref(), &candidate)?;

    let ownership = get_ownership(deps.as_ref())?.propose(&info.sender, candidate)?;
    OWNERSHIP.save(deps.storage, &ownership)?;

    Ok(Response::new()
        .add_attribute("action", "update_owner")
        .add_attribute("pending_owner", address))
}

pub fn accept_owner(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let ownership = get_ownership(deps.as_ref())?.accept(&info.sender)?;
    OWNERSHIP.save(deps.storage, &ownership)?;

    Ok(Response::new()
        .add_attribute("action", "accept_owner")
        .add_attribute("owner", info.sender))
}

pub fn cancel_owner_transfer(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let ownership = get_ownership(deps.as_ref())?.cancel(&info.sender)?;
    OWNERSHIP.save(deps.storage, &ownership)?;

    Ok(Response::new()
        .add_attribute("action", "cancel_owner_transfer")
        .add_attribute("owner", info.sender))
}

/// Hands one of the singleton roles to a new holder, overwriting the
/// previous one. Only the current owner may assign roles.
pub fn update_role(
    deps: DepsMut,
    info: MessageInfo,
    role: Role,
    address: String,
) -> Result<Response, ContractError> {
    check_is_owner(deps.as_ref(), &info.sender)?;

    let holder = deps.api.addr_validate(&address)?;
    assert_not_privileged(deps.as_ref(), &holder)?;

    role.store().save(deps.storage, &holder)?;

    Ok(Response::new()
        .add_attribute("action", format!("update_{}", role.attr()))
        .add_attribute(role.attr(), address))
}

pub fn configure_minter_controller(
    deps: DepsMut,
    info: MessageInfo,
    controller: String,
    minter: String,
) -> Result<Response, ContractError> {
    check_holds_role(deps.as_ref(), Role::MasterMinter, &info.sender)?;

    let controller = deps.api.addr_validate(&controller)?;
    let minter = deps.api.addr_validate(&minter)?;

    // A minter is administered by at most one controller at a time.
    for entry in MINTER_CONTROLLERS.range(deps.storage, None, None, Order::Ascending) {
        let (existing, administered) = entry?;
        if administered == minter && existing != controller {
            return Err(ContractError::MinterAlreadyAssigned {
                minter: minter.to_string(),
                controller: existing.to_string(),
            });
        }
    }

    MINTER_CONTROLLERS.save(deps.storage, &controller, &minter)?;

    Ok(Response::new()
        .add_attribute("action", "configure_minter_controller")
        .add_attribute("controller", controller)
        .add_attribute("minter", minter))
}

pub fn remove_minter_controller(
    deps: DepsMut,
    info: MessageInfo,
    controller: String,
) -> Result<Response, ContractError> {
    let controller = deps.api.addr_validate(&controller)?;

    // The master minter may revoke any controller; a controller may revoke
    // itself.
    if controller != info.sender {
        check_holds_role(deps.as_ref(), Role::MasterMinter, &info.sender)?;
    }

    // Removing an absent mapping is a no-op, not an error.
    MINTER_CONTROLLERS.remove(deps.storage, &controller);

    Ok(Response::new()
        .add_attribute("action", "remove_minter_controller")
        .add_attribute("controller", controller))
}

/// Checks that the sender is the controller administering `minter`.
fn check_controls(deps: Deps, sender: &Addr, minter: &Addr) -> Result<(), ContractError> {
    let administered = MINTER_CONTROLLERS
        .may_load(deps.storage, sender)?
        .ok_or_else(|| ContractError::unauthorized("minter controller", sender))?;
    if administered != *minter {
        return Err(ContractError::unauthorized(
            format!("controller of {minter}"),
            sender,
        ));
    }
    Ok(())
}

pub fn configure_minter(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
    allowance: Uint128,
) -> Result<Response, ContractError> {
    // Minter configuration is disabled while transfers are paused.
    check_is_not_paused(deps.as_ref())?;

    let minter = deps.api.addr_validate(&address)?;
    check_controls(deps.as_ref(), &info.sender, &minter)?;

    MINTER_ALLOWANCES.save(deps.storage, &minter, &allowance)?;

    Ok(Response::new()
        .add_attribute("action", "configure_minter")
        .add_attribute("minter", minter)
        .add_attribute("allowance", allowance))
}

pub fn remove_minter(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    let minter = deps.api.addr_validate(&address)?;
    check_controls(deps.as_ref(), &info.sender, &minter)?;

    if !MINTER_ALLOWANCES.has(deps.storage, &minter) {
        return Err(ContractError::user_not_found("minter"));
    }
    MINTER_ALLOWANCES.remove(deps.storage, &minter);

    Ok(Response::new()
        .add_attribute("action", "remove_minter")
        .add_attribute("minter", minter))
}

pub fn mint(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to_address: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    check_is_not_paused(deps.as_ref())?;

    // Validate that to_address is a valid address
    deps.api.addr_validate(&to_address)?;

    // Don't allow minting of 0 coins
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }

    // Neither the minter nor the recipient may be denylisted.
    check_is_not_denied(deps.as_ref(), info.sender.as_str())?;
    check_is_not_denied(deps.as_ref(), &to_address)?;

    // Decrease the minter's allowance; running out is an error, the minter
    // record itself stays in place.
    let allowance = MINTER_ALLOWANCES
        .may_load(deps.storage, &info.sender)?
        .ok_or_else(|| ContractError::unauthorized("minter", &info.sender))?;
    let updated_allowance = allowance
        .checked_sub(amount)
        .map_err(|_| ContractError::NotEnoughMintAllowance { amount, allowance })?;
    MINTER_ALLOWANCES.save(deps.storage, &info.sender, &updated_allowance)?;

    let denom = DENOM.load(deps.storage)?;

    // Mint to the contract address, then send the newly minted coins from
    // the contract to the designated recipient.
    let mint_tokens_msg: CosmosMsg = MsgMint {
        sender: env.contract.address.to_string(),
        amount: Some(Coin::new(amount.u128(), denom.clone()).into()),
        mint_to_address: env.contract.address.to_string(),
    }
    .into();

    let send_tokens_msg = BankMsg::Send {
        to_address: to_address.clone(),
        amount: coins(amount.u128(), denom),
    };

    Ok(Response::new()
        .add_message(mint_tokens_msg)
        .add_message(send_tokens_msg)
        .add_attribute("action", "mint")
        .add_attribute("to", to_address)
        .add_attribute("amount", amount))
}

pub fn burn(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    amount: Uint128,
) -> Result<Response, ContractError> {
    check_is_not_paused(deps.as_ref())?;

    // Don't allow burning of 0 coins
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }

    check_is_not_denied(deps.as_ref(), info.sender.as_str())?;

    if !MINTER_ALLOWANCES.has(deps.storage, &info.sender) {
        return Err(ContractError::unauthorized("minter", &info.sender));
    }

    let denom = DENOM.load(deps.storage)?;

    // Burns from the minter's own balance.
    let burn_tokens_msg: CosmosMsg = MsgBurn {
        sender: env.contract.address.to_string(),
        amount: Some(Coin::new(amount.u128(), denom).into()),
        burn_from_address: info.sender.to_string(),
    }
    .into();

    Ok(Response::new()
        .add_message(burn_tokens_msg)
        .add_attribute("action", "burn")
        .add_attribute("burner", info.sender)
        .add_attribute("amount", amount))
}

pub fn blacklist(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    check_holds_role(deps.as_ref(), Role::Blacklister, &info.sender)?;

    // Canonicalize before touching state; a malformed address aborts the
    // whole operation.
    let key = canonical_bytes(&address)?;

    // The contract address is bech32 on a real chain; comparing canonical
    // bytes keeps prefix-shifted encodings of it out as well.
    if let Ok(self_key) = canonical_bytes(env.contract.address.as_str()) {
        if key == self_key {
            return Err(ContractError::CannotBlacklistSelf {});
        }
    }

    // Idempotent: re-adding an existing entry is a plain overwrite.
    DENYLIST.save(deps.storage, &key, &Empty {})?;

    Ok(Response::new()
        .add_attribute("action", "blacklist")
        .add_attribute("address", address))
}

pub fn unblacklist(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    check_holds_role(deps.as_ref(), Role::Blacklister, &info.sender)?;

    let key = canonical_bytes(&address)?;

    // Removing a non-member is a no-op, not an error.
    DENYLIST.remove(deps.storage, &key);

    Ok(Response::new()
        .add_attribute("action", "unblacklist")
        .add_attribute("address", address))
}

pub fn pause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    check_holds_role(deps.as_ref(), Role::Pauser, &info.sender)?;

    IS_PAUSED.save(deps.storage, &true)?;

    Ok(Response::new().add_attribute("action", "pause"))
}

pub fn unpause(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    check_holds_role(deps.as_ref(), Role::Pauser, &info.sender)?;

    IS_PAUSED.save(deps.storage, &false)?;

    Ok(Response::new().add_attribute("action", "unpause"))
}
