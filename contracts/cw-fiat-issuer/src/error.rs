use cosmwasm_std::{Addr, StdError, Uint128};
use cw_bech32_address::AddressError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("malformed address: {0}")]
    MalformedAddress(#[from] AddressError),

    #[error("unauthorized: {sender} does not hold the {role} role")]
    Unauthorized { role: String, sender: String },

    #[error("the {role} role is not set")]
    UserNotFound { role: String },

    #[error("{address} already holds the {role} role")]
    AlreadyPrivileged { address: String, role: String },

    #[error("no ownership transfer is pending")]
    NoPendingTransfer {},

    #[error("minter {minter} is already administered by controller {controller}")]
    MinterAlreadyAssigned { minter: String, controller: String },

    #[error("transfers of the token are paused")]
    Paused {},

    #[error("the address '{address}' is denied transfer abilities")]
    Denied { address: String },

    #[error("cannot blacklist the issuer contract itself")]
    CannotBlacklistSelf {},

    #[error("amount was zero, must be positive")]
    ZeroAmount {},

    #[error("not enough mint allowance: attempted to mint {amount}, but remaining allowance is {allowance}")]
    NotEnoughMintAllowance { amount: Uint128, allowance: Uint128 },
}

impl ContractError {
    pub fn unauthorized(role: impl Into<String>, sender: &Addr) -> ContractError {
        ContractError::Unauthorized {
            role: role.into(),
            sender: sender.to_string(),
        }
    }

    pub fn user_not_found(role: impl Into<String>) -> ContractError {
        ContractError::UserNotFound { role: role.into() }
    }

    pub fn already_privileged(address: &Addr, role: impl Into<String>) -> ContractError {
        ContractError::AlreadyPrivileged {
            address: address.to_string(),
            role: role.into(),
        }
    }
}
