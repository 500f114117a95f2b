use cosmwasm_std::{Addr, Deps, Order, StdError, StdResult, Uint128};
use cw_bech32_address::Variant;
use cw_storage_plus::Bound;

use crate::msg::{
    AllowanceInfo, AllowanceResponse, AllowancesResponse, BlacklistResponse, DenomResponse,
    IsPausedResponse, MinterControllerInfo, MinterControllerResponse, MinterControllersResponse,
    OwnerResponse, RoleResponse, StatusResponse,
};
use crate::state::{
    BECH32_PREFIX, BLACKLISTER, DENOM, DENYLIST, IS_PAUSED, MASTER_MINTER, MINTER_ALLOWANCES,
    MINTER_CONTROLLERS, OWNERSHIP, PAUSER,
};

// Default settings for pagination
const MAX_LIMIT: u32 = 30;
const DEFAULT_LIMIT: u32 = 10;

/// Returns the current owner and any pending transfer candidate. Response:
/// OwnerResponse
pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    let ownership = OWNERSHIP.load(deps.storage)?;
    Ok(OwnerResponse {
        owner: ownership.owner().clone(),
        pending_owner: ownership.pending_owner().cloned(),
    })
}

/// Returns the master minter, if one is set. Response: RoleResponse
pub fn query_master_minter(deps: Deps) -> StdResult<RoleResponse> {
    Ok(RoleResponse {
        address: MASTER_MINTER.may_load(deps.storage)?,
    })
}

/// Returns the pauser, if one is set. Response: RoleResponse
pub fn query_pauser(deps: Deps) -> StdResult<RoleResponse> {
    Ok(RoleResponse {
        address: PAUSER.may_load(deps.storage)?,
    })
}

/// Returns the blacklister, if one is set. Response: RoleResponse
pub fn query_blacklister(deps: Deps) -> StdResult<RoleResponse> {
    Ok(RoleResponse {
        address: BLACKLISTER.may_load(deps.storage)?,
    })
}

/// Returns the token denom that this contract controls. Response:
/// DenomResponse
pub fn query_denom(deps: Deps) -> StdResult<DenomResponse> {
    let denom = DENOM.load(deps.storage)?;
    Ok(DenomResponse { denom })
}

/// Returns if token transfer is disabled. Response: IsPausedResponse
pub fn query_is_paused(deps: Deps) -> StdResult<IsPausedResponse> {
    let is_paused = IS_PAUSED.load(deps.storage)?;
    Ok(IsPausedResponse { is_paused })
}

/// Returns whether the address is on the denylist. Response: StatusResponse
pub fn query_is_blacklisted(deps: Deps, address: String) -> StdResult<StatusResponse> {
    let key = canonical(&address)?;
    Ok(StatusResponse {
        status: DENYLIST.has(deps.storage, &key),
    })
}

/// Enumerates the denylist, entries re-encoded under the chain's native
/// prefix. Response: BlacklistResponse
pub fn query_blacklist(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<BlacklistResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let prefix = BECH32_PREFIX.load(deps.storage)?;

    let key: Vec<u8>;
    let start = match start_after {
        None => None,
        Some(address) => {
            key = canonical(&address)?;
            Some(Bound::exclusive(key.as_slice()))
        }
    };

    let blacklist = DENYLIST
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let raw = item?;
            cw_bech32_address::encode_from_base256(&prefix, &raw, Variant::Bech32)
                .map_err(|err| StdError::generic_err(err.to_string()))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(BlacklistResponse { blacklist })
}

/// Returns the minter administered by `controller`, if any. Response:
/// MinterControllerResponse
pub fn query_minter_controller(
    deps: Deps,
    controller: String,
) -> StdResult<MinterControllerResponse> {
    let controller = deps.api.addr_validate(&controller)?;
    Ok(MinterControllerResponse {
        minter: MINTER_CONTROLLERS.may_load(deps.storage, &controller)?,
    })
}

/// Enumerates over all controller -> minter assignments. Response:
/// MinterControllersResponse
pub fn query_minter_controllers(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<MinterControllersResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let addr: Addr;
    let start = match start_after {
        None => None,
        Some(addr_str) => {
            addr = deps.api.addr_validate(&addr_str)?;
            Some(Bound::exclusive(&addr))
        }
    };

    let controllers = MINTER_CONTROLLERS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (controller, minter) = item?;
            Ok(MinterControllerInfo { controller, minter })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(MinterControllersResponse { controllers })
}

/// Returns the mint allowance of the specified minter. Response:
/// AllowanceResponse
pub fn query_mint_allowance(deps: Deps, address: String) -> StdResult<AllowanceResponse> {
    let allowance = MINTER_ALLOWANCES
        .may_load(deps.storage, &deps.api.addr_validate(&address)?)?
        .unwrap_or_else(Uint128::zero);
    Ok(AllowanceResponse { allowance })
}

/// Enumerates over all mint allowances. Response: AllowancesResponse
pub fn query_mint_allowances(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<AllowancesResponse> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
    let addr: Addr;
    let start = match start_after {
        None => None,
        Some(addr_str) => {
            addr = deps.api.addr_validate(&addr_str)?;
            Some(Bound::exclusive(&addr))
        }
    };

    let allowances = MINTER_ALLOWANCES
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| {
            let (address, allowance) = item?;
            Ok(AllowanceInfo { address, allowance })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(AllowancesResponse { allowances })
}

fn canonical(address: &str) -> StdResult<Vec<u8>> {
    let (_hrp, bytes) = cw_bech32_address::decode_no_limit_to_base256(address)
        .map_err(|err| StdError::generic_err(err.to_string()))?;
    Ok(bytes)
}
