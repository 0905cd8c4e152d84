//! # GoiManager messages
//!
//! `goi_manager_std::msg` holds the instantiate, execute, query and sudo messages of the
//! GoiManager contract and the responses to its queries.
//!
//! ## Description
//! All messages are externally tagged with their snake_case variant name, e.g.
//! `{"update_fees": {"add": null, "remove": [1]}}`. Optional fields are sent as `null`.

use std::collections::BTreeMap;

use cosmwasm_schema::QueryResponses;
use cosmwasm_std::Addr;
use cw4::Member;

use crate::{
    group_admin::GroupAdminHooksMsg,
    objects::{AssetTypes, ManagedContract, ManagedStatusUpdate, ManagementFee, PlayerInfo},
};

#[cosmwasm_schema::cw_serde]
pub struct InstantiateMsg {
    pub owner: Addr,
    pub admin: String,
    pub members: Vec<Member>,
    /// Teams to register at start, keyed by owner.
    pub teams: Option<BTreeMap<Addr, Vec<Addr>>>,
    pub teams_for_sale: Option<Vec<Addr>>,
}

/// GoiManager execute messages
#[cosmwasm_schema::cw_serde]
#[cfg_attr(feature = "interface", derive(cw_orch::ExecuteFns))]
pub enum ExecuteMsg {
    /// Hook called by a managed contract when its managed status changed.
    ManagedStatusChangedHook { change: ManagedStatusUpdate },
    /// Put an existing contract under management.
    AddManagedContract {
        contract_address: Addr,
        contract_type: AssetTypes,
    },
    /// Relays a message to the group admin. Authorization is checked by the contract.
    GroupAdminHooks {
        group_admin_hooks_msg: GroupAdminHooksMsg,
    },
    /// Adds the fees in `add` and removes the fees with ids in `remove`.
    UpdateFees {
        add: Option<Vec<ManagementFee>>,
        remove: Option<Vec<i32>>,
    },
    AddPlayersToTeam { players: Vec<PlayerInfo> },
    /// Instantiates a new asset of `asset_type` owned by `user`.
    CreateNewAsset { asset_type: AssetTypes, user: Addr },
}

impl ExecuteMsg {
    /// The tag this message is sent under.
    pub fn variant_name(&self) -> &'static str {
        match self {
            ExecuteMsg::ManagedStatusChangedHook { .. } => "managed_status_changed_hook",
            ExecuteMsg::AddManagedContract { .. } => "add_managed_contract",
            ExecuteMsg::GroupAdminHooks { .. } => "group_admin_hooks",
            ExecuteMsg::UpdateFees { .. } => "update_fees",
            ExecuteMsg::AddPlayersToTeam { .. } => "add_players_to_team",
            ExecuteMsg::CreateNewAsset { .. } => "create_new_asset",
        }
    }
}

/// GoiManager query messages
#[cosmwasm_schema::cw_serde]
#[derive(QueryResponses)]
#[cfg_attr(feature = "interface", derive(cw_orch::QueryFns))]
pub enum QueryMsg {
    /// Returns the active management fees.
    /// Returns [`ManagementInfoResponse`]
    #[returns(ManagementInfoResponse)]
    GetManagementInfo {},
    /// Returns [`ManagedContractInfoResponse`]
    #[returns(ManagedContractInfoResponse)]
    GetManagedContract { contract: Addr },
}

impl QueryMsg {
    /// The tag this message is sent under.
    pub fn variant_name(&self) -> &'static str {
        match self {
            QueryMsg::GetManagementInfo {} => "get_management_info",
            QueryMsg::GetManagedContract { .. } => "get_managed_contract",
        }
    }
}

#[cosmwasm_schema::cw_serde]
pub enum SudoMsg {
    WithdrawFundsToCommunityPool { address: String },
}

#[cosmwasm_schema::cw_serde]
pub struct ManagementInfoResponse {
    /// `None` when no fee is active.
    pub fees: Option<Vec<ManagementFee>>,
}

#[cosmwasm_schema::cw_serde]
pub struct ManagedContractInfoResponse {
    pub contract: Option<ManagedContract>,
}
