use cosmwasm_std::{Coin, DepsMut, Response};

use crate::error::ContractError;
use crate::helpers::{check_is_not_denied, check_is_not_paused};
use crate::state::DENOM;

/// The before send hook is called before every token transfer on chains that
/// support MsgSetBeforeSendHook.
///
/// It is called by the bank module.
pub fn beforesend_hook(
    deps: DepsMut,
    from: String,
    to: String,
    coin: Coin,
) -> Result<Response, ContractError> {
    // While paused, every transfer of the controlled denom is denied on that
    // basis alone. The denom can differ since setting the beforesend
    // listener doesn't check the contract's denom.
    let denom = DENOM.load(deps.storage)?;
    if coin.denom == denom {
        check_is_not_paused(deps.as_ref())?;
    }

    // Assert that neither 'from' nor 'to' address is denylisted.
    check_is_not_denied(deps.as_ref(), &from)?;
    check_is_not_denied(deps.as_ref(), &to)?;

    Ok(Response::new().add_attribute("action", "before_send"))
}
