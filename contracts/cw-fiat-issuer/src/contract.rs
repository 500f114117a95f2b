#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{
    to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::{get_contract_version, set_contract_version, ContractVersion};

use crate::error::ContractError;
use crate::execute;
use crate::hooks;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg, SudoMsg};
use crate::queries;
use crate::state::{Ownership, Role, BECH32_PREFIX, DENOM, IS_PAUSED, OWNERSHIP};

// Version info for migration
pub const CONTRACT_NAME: &str = env!("CARGO_PKG_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    cw_bech32_address::validate_hrp(&msg.bech32_prefix)?;

    // Owner is the sender of the initial InstantiateMsg; the operational
    // roles stay unset until the owner hands them out.
    OWNERSHIP.save(
        deps.storage,
        &Ownership::Owned {
            owner: info.sender.clone(),
        },
    )?;
    DENOM.save(deps.storage, &msg.denom)?;
    BECH32_PREFIX.save(deps.storage, &msg.bech32_prefix)?;
    IS_PAUSED.save(deps.storage, &false)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("denom", msg.denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Ownership
        ExecuteMsg::UpdateOwner { address } => execute::update_owner(deps, info, address),
        ExecuteMsg::AcceptOwner {} => execute::accept_owner(deps, info),
        ExecuteMsg::CancelOwnerTransfer {} => execute::cancel_owner_transfer(deps, info),

        // Singleton roles
        ExecuteMsg::UpdateMasterMinter { address } => {
            execute::update_role(deps, info, Role::MasterMinter, address)
        }
        ExecuteMsg::UpdatePauser { address } => {
            execute::update_role(deps, info, Role::Pauser, address)
        }
        ExecuteMsg::UpdateBlacklister { address } => {
            execute::update_role(deps, info, Role::Blacklister, address)
        }

        // Minter administration
        ExecuteMsg::ConfigureMinterController { controller, minter } => {
            execute::configure_minter_controller(deps, info, controller, minter)
        }
        ExecuteMsg::RemoveMinterController { controller } => {
            execute::remove_minter_controller(deps, info, controller)
        }
        ExecuteMsg::ConfigureMinter { address, allowance } => {
            execute::configure_minter(deps, info, address, allowance)
        }
        ExecuteMsg::RemoveMinter { address } => execute::remove_minter(deps, info, address),
        ExecuteMsg::Mint { to_address, amount } => {
            execute::mint(deps, env, info, to_address, amount)
        }
        ExecuteMsg::Burn { amount } => execute::burn(deps, env, info, amount),

        // Denylist
        ExecuteMsg::Blacklist { address } => execute::blacklist(deps, env, info, address),
        ExecuteMsg::Unblacklist { address } => execute::unblacklist(deps, info, address),

        // Pause
        ExecuteMsg::Pause {} => execute::pause(deps, info),
        ExecuteMsg::Unpause {} => execute::unpause(deps, info),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn sudo(deps: DepsMut, _env: Env, msg: SudoMsg) -> Result<Response, ContractError> {
    match msg {
        SudoMsg::BlockBeforeSend { from, to, amount } => {
            hooks::beforesend_hook(deps, from, to, amount)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Owner {} => to_json_binary(&queries::query_owner(deps)?),
        QueryMsg::MasterMinter {} => to_json_binary(&queries::query_master_minter(deps)?),
        QueryMsg::Pauser {} => to_json_binary(&queries::query_pauser(deps)?),
        QueryMsg::Blacklister {} => to_json_binary(&queries::query_blacklister(deps)?),
        QueryMsg::Denom {} => to_json_binary(&queries::query_denom(deps)?),
        QueryMsg::IsPaused {} => to_json_binary(&queries::query_is_paused(deps)?),
        QueryMsg::IsBlacklisted { address } => {
            to_json_binary(&queries::query_is_blacklisted(deps, address)?)
        }
        QueryMsg::Blacklist { start_after, limit } => {
            to_json_binary(&queries::query_blacklist(deps, start_after, limit)?)
        }
        QueryMsg::MinterController { controller } => {
            to_json_binary(&queries::query_minter_controller(deps, controller)?)
        }
        QueryMsg::MinterControllers { start_after, limit } => {
            to_json_binary(&queries::query_minter_controllers(deps, start_after, limit)?)
        }
        QueryMsg::MintAllowance { address } => {
            to_json_binary(&queries::query_mint_allowance(deps, address)?)
        }
        QueryMsg::MintAllowances { start_after, limit } => {
            to_json_binary(&queries::query_mint_allowances(deps, start_after, limit)?)
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let storage_version: ContractVersion = get_contract_version(deps.storage)?;

    // Only migrate if newer
    if storage_version.version.as_str() < CONTRACT_VERSION {
        // Set contract to version to latest
        set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    }

    Ok(Response::default())
}
