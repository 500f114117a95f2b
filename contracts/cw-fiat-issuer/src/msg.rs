use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Coin, Uint128};

/// The message used to create a new instance of this smart contract.
#[cw_serde]
pub struct InstantiateMsg {
    /// The existing Token Factory denom this contract controls. For transfer
    /// gating to take effect, the denom's admin must point the token's
    /// `BeforeSendHook` at this contract.
    pub denom: String,
    /// The chain's native bech32 prefix, e.g. `noble`. Denylist entries are
    /// displayed under this prefix.
    pub bech32_prefix: String,
}

/// State changing methods available to this smart contract.
#[cw_serde]
pub enum ExecuteMsg {
    /// Propose handing ownership of this contract to `address`. Nothing
    /// moves until the candidate accepts; proposing again while a transfer
    /// is pending replaces the candidate. Owner only.
    UpdateOwner { address: String },

    /// Accept a pending ownership transfer. Only callable by the proposed
    /// candidate; afterwards the previous owner keeps no privilege.
    AcceptOwner {},

    /// Retract a pending ownership transfer. Owner only.
    CancelOwnerTransfer {},

    /// Hand the master minter role to `address`. Owner only.
    UpdateMasterMinter { address: String },

    /// Hand the pauser role to `address`. Owner only.
    UpdatePauser { address: String },

    /// Hand the blacklister role to `address`. Owner only.
    UpdateBlacklister { address: String },

    /// Put `minter` under the administration of `controller`. A minter is
    /// administered by at most one controller at a time. Master minter only.
    ConfigureMinterController { controller: String, minter: String },

    /// Drop a controller and its minter assignment. Callable by the master
    /// minter, or by the controller revoking itself. Removing an unknown
    /// controller succeeds as a no-op.
    RemoveMinterController { controller: String },

    /// Set the mint allowance of the minter this controller administers.
    ConfigureMinter { address: String, allowance: Uint128 },

    /// Remove the minter this controller administers.
    RemoveMinter { address: String },

    /// Mint `amount` of the controlled denom to `to_address`, deducting it
    /// from the caller's mint allowance. Configured minters only.
    Mint { to_address: String, amount: Uint128 },

    /// Burn `amount` of the controlled denom from the caller's own balance.
    /// Configured minters only.
    Burn { amount: Uint128 },

    /// Add an address to the denylist, preventing it from sending or
    /// receiving the controlled denom. The address may be encoded under any
    /// bech32 prefix; entries are stored by canonical raw bytes. Blacklister
    /// only.
    Blacklist { address: String },

    /// Remove an address from the denylist. Removing a non-member succeeds
    /// as a no-op. Blacklister only.
    Unblacklist { address: String },

    /// Halt every transfer of the controlled denom. Pauser only.
    Pause {},

    /// Resume transfers of the controlled denom. Pauser only.
    Unpause {},
}

/// SudoMsg is only exposed for internal Cosmos SDK modules to call. The bank
/// module invokes `BlockBeforeSend` before every send of the controlled
/// denom once the token's `BeforeSendHook` points at this contract.
#[cw_serde]
pub enum SudoMsg {
    BlockBeforeSend {
        from: String,
        to: String,
        amount: Coin,
    },
}

/// Used for smart contract migration.
#[cw_serde]
pub struct MigrateMsg {}

/// Queries supported by this smart contract.
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns the current owner and any pending transfer candidate.
    /// Response: OwnerResponse
    #[returns(OwnerResponse)]
    Owner {},

    /// Returns the master minter, if one is set. Response: RoleResponse
    #[returns(RoleResponse)]
    MasterMinter {},

    /// Returns the pauser, if one is set. Response: RoleResponse
    #[returns(RoleResponse)]
    Pauser {},

    /// Returns the blacklister, if one is set. Response: RoleResponse
    #[returns(RoleResponse)]
    Blacklister {},

    /// Returns the controlled Token Factory denom. Response: DenomResponse
    #[returns(DenomResponse)]
    Denom {},

    /// Returns whether transfers are currently paused. Response:
    /// IsPausedResponse
    #[returns(IsPausedResponse)]
    IsPaused {},

    /// Returns whether the address is on the denylist, under any prefix.
    /// Response: StatusResponse
    #[returns(StatusResponse)]
    IsBlacklisted { address: String },

    /// Enumerates the denylist, entries re-encoded under the native prefix.
    /// Response: BlacklistResponse
    #[returns(BlacklistResponse)]
    Blacklist {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Returns the minter administered by `controller`, if any. Response:
    /// MinterControllerResponse
    #[returns(MinterControllerResponse)]
    MinterController { controller: String },

    /// Enumerates all controller -> minter assignments. Response:
    /// MinterControllersResponse
    #[returns(MinterControllersResponse)]
    MinterControllers {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Returns the mint allowance of the specified minter. Response:
    /// AllowanceResponse
    #[returns(AllowanceResponse)]
    MintAllowance { address: String },

    /// Enumerates over all mint allowances. Response: AllowancesResponse
    #[returns(AllowancesResponse)]
    MintAllowances {
        start_after: Option<String>,
        limit: Option<u32>,
    },
}

/// Returns the current owner of this contract and, while a two-phase
/// handoff is in flight, the candidate who may accept it.
#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
    pub pending_owner: Option<Addr>,
}

/// The holder of a singleton role, absent when the owner has not assigned
/// the role yet.
#[cw_serde]
pub struct RoleResponse {
    pub address: Option<Addr>,
}

/// Returns the denomination this contract controls.
#[cw_serde]
pub struct DenomResponse {
    pub denom: String,
}

/// Returns whether transfers of the controlled denom are disabled.
#[cw_serde]
pub struct IsPausedResponse {
    pub is_paused: bool,
}

/// Whether a particular account is denylisted.
#[cw_serde]
pub struct StatusResponse {
    pub status: bool,
}

/// A page of denylist entries re-encoded under the chain's native prefix.
#[cw_serde]
pub struct BlacklistResponse {
    pub blacklist: Vec<String>,
}

#[cw_serde]
pub struct MinterControllerResponse {
    pub minter: Option<Addr>,
}

/// A controller and the minter it administers. Used in list queries.
#[cw_serde]
pub struct MinterControllerInfo {
    pub controller: Addr,
    pub minter: Addr,
}

#[cw_serde]
pub struct MinterControllersResponse {
    pub controllers: Vec<MinterControllerInfo>,
}

/// A mint allowance for a particular minter, representing the amount of
/// tokens the account is still allowed to mint.
#[cw_serde]
pub struct AllowanceResponse {
    pub allowance: Uint128,
}

/// A minter and its remaining mint allowance. Used in list queries.
#[cw_serde]
pub struct AllowanceInfo {
    pub address: Addr,
    pub allowance: Uint128,
}

#[cw_serde]
pub struct AllowancesResponse {
    pub allowances: Vec<AllowanceInfo>,
}
