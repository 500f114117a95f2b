use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Empty, Uint128};
use cw_storage_plus::{Item, Map};

use crate::error::ContractError;

/// Ownership of the contract, modeled as an explicit state machine so that
/// accepting without a pending transfer is a typed error rather than a
/// storage miss. The pre-instantiate "no owner" state is the absence of the
/// record.
#[cw_serde]
pub enum Ownership {
    Owned { owner: Addr },
    TransferPending { owner: Addr, pending_owner: Addr },
}

impl Ownership {
    pub fn owner(&self) -> &Addr {
        match self {
            Ownership::Owned { owner } | Ownership::TransferPending { owner, .. } => owner,
        }
    }

    pub fn pending_owner(&self) -> Option<&Addr> {
        match self {
            Ownership::Owned { .. } => None,
            Ownership::TransferPending { pending_owner, .. } => Some(pending_owner),
        }
    }

    /// Begins a transfer to `candidate`. Proposing while another transfer is
    /// in flight replaces the previous candidate.
    pub fn propose(self, sender: &Addr, candidate: Addr) -> Result<Self, ContractError> {
        if self.owner() != sender {
            return Err(ContractError::unauthorized("owner", sender));
        }
        let owner = self.into_owner();
        Ok(Ownership::TransferPending {
            owner,
            pending_owner: candidate,
        })
    }

    /// Completes a pending transfer. Only the designated candidate may
    /// accept; the previous owner keeps no privilege afterwards.
    pub fn accept(self, sender: &Addr) -> Result<Self, ContractError> {
        match self {
            Ownership::Owned { .. } => Err(ContractError::NoPendingTransfer {}),
            Ownership::TransferPending { pending_owner, .. } => {
                if pending_owner != *sender {
                    return Err(ContractError::unauthorized("pending owner", sender));
                }
                Ok(Ownership::Owned {
                    owner: pending_owner,
                })
            }
        }
    }

    /// Retracts a pending transfer, leaving the current owner in place.
    pub fn cancel(self, sender: &Addr) -> Result<Self, ContractError> {
        if self.owner() != sender {
            return Err(ContractError::unauthorized("owner", sender));
        }
        match self {
            Ownership::Owned { .. } => Err(ContractError::NoPendingTransfer {}),
            Ownership::TransferPending { owner, .. } => Ok(Ownership::Owned { owner }),
        }
    }

    fn into_owner(self) -> Addr {
        match self {
            Ownership::Owned { owner } | Ownership::TransferPending { owner, .. } => owner,
        }
    }
}

/// The singleton operational roles the owner hands out.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    MasterMinter,
    Pauser,
    Blacklister,
}

impl Role {
    /// Human form, used in error messages.
    pub const fn as_str(self) -> &'static str {
        match self {
            Role::MasterMinter => "master minter",
            Role::Pauser => "pauser",
            Role::Blacklister => "blacklister",
        }
    }

    /// Attribute form, used in response attributes.
    pub const fn attr(self) -> &'static str {
        match self {
            Role::MasterMinter => "master_minter",
            Role::Pauser => "pauser",
            Role::Blacklister => "blacklister",
        }
    }

    pub const fn store(self) -> Item<'static, Addr> {
        match self {
            Role::MasterMinter => MASTER_MINTER,
            Role::Pauser => PAUSER,
            Role::Blacklister => BLACKLISTER,
        }
    }
}

pub const OWNERSHIP: Item<Ownership> = Item::new("ownership");

/// The Token Factory denom whose transfers this contract controls.
pub const DENOM: Item<String> = Item::new("denom");

/// The chain's native bech32 prefix, used to display canonical denylist
/// entries.
pub const BECH32_PREFIX: Item<String> = Item::new("bech32_prefix");

pub const MASTER_MINTER: Item<Addr> = Item::new("master_minter");
pub const PAUSER: Item<Addr> = Item::new("pauser");
pub const BLACKLISTER: Item<Addr> = Item::new("blacklister");

/// Whether token transfers are paused.
pub const IS_PAUSED: Item<bool> = Item::new("is_paused");

/// Addresses prevented from transferring tokens, keyed by canonical raw
/// address bytes so equivalent encodings under different prefixes collapse
/// to a single entry.
pub const DENYLIST: Map<&[u8], Empty> = Map::new("denylist");

/// Controller -> the one minter it administers.
pub const MINTER_CONTROLLERS: Map<&Addr, Addr> = Map::new("minter_controllers");

/// Minter -> remaining mint allowance. Presence marks a configured minter.
pub const MINTER_ALLOWANCES: Map<&Addr, Uint128> = Map::new("minter_allowances");
