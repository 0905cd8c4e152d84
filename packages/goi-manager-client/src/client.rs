use std::ops::Deref;

use cosmwasm_std::{Addr, Coin};
use goi_manager_std::{
    group_admin::GroupAdminHooksMsg,
    msg::ExecuteMsg,
    objects::{AssetTypes, ManagedStatusUpdate, ManagementFee, PlayerInfo},
};

use crate::{
    config::GoiManagerConfig,
    error::{GoiManagerClientError, GoiManagerClientResult},
    fee::ExecuteFee,
    query_client::GoiManagerQueryClient,
    transport::{ExecuteResult, SigningCosmWasmClient},
};

/// Signing access to a deployed GoiManager.
///
/// Every execute method takes the optional transaction parameters last:
/// `fee` (defaults to [`ExecuteFee::Auto`] unless configured otherwise), `memo` and `funds`.
/// The read-only queries are reachable through [`Deref`].
pub struct GoiManagerClient<C> {
    query: GoiManagerQueryClient<C>,
    sender: Addr,
    default_fee: ExecuteFee,
}

/// Allows to call the queries directly on the signing client
impl<C> Deref for GoiManagerClient<C> {
    type Target = GoiManagerQueryClient<C>;

    fn deref(&self) -> &Self::Target {
        &self.query
    }
}

impl<C: SigningCosmWasmClient> GoiManagerClient<C> {
    pub fn new(
        client: C,
        sender: impl Into<String>,
        contract_address: impl Into<String>,
    ) -> Self {
        Self {
            query: GoiManagerQueryClient::new(client, contract_address),
            sender: Addr::unchecked(sender),
            default_fee: ExecuteFee::Auto,
        }
    }

    /// Fails with [`GoiManagerClientError::MissingSender`] when the config has no sender.
    pub fn from_config(client: C, config: &GoiManagerConfig) -> GoiManagerClientResult<Self> {
        let sender = config
            .sender
            .clone()
            .ok_or(GoiManagerClientError::MissingSender {})?;
        Ok(Self {
            query: GoiManagerQueryClient::from_config(client, config),
            sender,
            default_fee: config.default_fee.clone(),
        })
    }

    pub fn sender(&self) -> &Addr {
        &self.sender
    }

    pub fn as_query_client(&self) -> &GoiManagerQueryClient<C> {
        &self.query
    }

    pub async fn managed_status_changed_hook(
        &self,
        change: ManagedStatusUpdate,
        fee: Option<ExecuteFee>,
        memo: Option<&str>,
        funds: Option<&[Coin]>,
    ) -> Result<ExecuteResult, C::Error> {
        let msg = ExecuteMsg::ManagedStatusChangedHook { change };
        self.execute(&msg, fee, memo, funds).await
    }

    pub async fn add_managed_contract(
        &self,
        contract_address: impl Into<String>,
        contract_type: AssetTypes,
        fee: Option<ExecuteFee>,
        memo: Option<&str>,
        funds: Option<&[Coin]>,
    ) -> Result<ExecuteResult, C::Error> {
        let msg = ExecuteMsg::AddManagedContract {
            contract_address: Addr::unchecked(contract_address),
            contract_type,
        };
        self.execute(&msg, fee, memo, funds).await
    }

    /// Relays `group_admin_hooks_msg` to the manager's group admin.
    pub async fn group_admin_hooks(
        &self,
        group_admin_hooks_msg: GroupAdminHooksMsg,
        fee: Option<ExecuteFee>,
        memo: Option<&str>,
        funds: Option<&[Coin]>,
    ) -> Result<ExecuteResult, C::Error> {
        let msg = ExecuteMsg::GroupAdminHooks {
            group_admin_hooks_msg,
        };
        self.execute(&msg, fee, memo, funds).await
    }

    /// `None` leaves that side untouched, it is sent as `null` rather than an empty list.
    pub async fn update_fees(
        &self,
        add: Option<Vec<ManagementFee>>,
        remove: Option<Vec<i32>>,
        fee: Option<ExecuteFee>,
        memo: Option<&str>,
        funds: Option<&[Coin]>,
    ) -> Result<ExecuteResult, C::Error> {
        let msg = ExecuteMsg::UpdateFees { add, remove };
        self.execute(&msg, fee, memo, funds).await
    }

    pub async fn add_players_to_team(
        &self,
        players: Vec<PlayerInfo>,
        fee: Option<ExecuteFee>,
        memo: Option<&str>,
        funds: Option<&[Coin]>,
    ) -> Result<ExecuteResult, C::Error> {
        let msg = ExecuteMsg::AddPlayersToTeam { players };
        self.execute(&msg, fee, memo, funds).await
    }

    pub async fn create_new_asset(
        &self,
        asset_type: AssetTypes,
        user: impl Into<String>,
        fee: Option<ExecuteFee>,
        memo: Option<&str>,
        funds: Option<&[Coin]>,
    ) -> Result<ExecuteResult, C::Error> {
        let msg = ExecuteMsg::CreateNewAsset {
            asset_type,
            user: Addr::unchecked(user),
        };
        self.execute(&msg, fee, memo, funds).await
    }

    async fn execute(
        &self,
        msg: &ExecuteMsg,
        fee: Option<ExecuteFee>,
        memo: Option<&str>,
        funds: Option<&[Coin]>,
    ) -> Result<ExecuteResult, C::Error> {
        let fee = fee.unwrap_or_else(|| self.default_fee.clone());
        log::debug!(
            "executing {} on goi manager {} as {} with fee {}",
            msg.variant_name(),
            self.query.contract_address(),
            self.sender,
            fee
        );
        self.query
            .client()
            .execute(
                &self.sender,
                self.query.contract_address(),
                msg,
                fee,
                memo,
                funds,
            )
            .await
    }
}
