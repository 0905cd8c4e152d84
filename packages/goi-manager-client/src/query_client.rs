use cosmwasm_std::Addr;
use goi_manager_std::msg::{ManagedContractInfoResponse, ManagementInfoResponse, QueryMsg};
use serde::de::DeserializeOwned;

use crate::{config::GoiManagerConfig, transport::CosmWasmClient};

/// Read-only access to a deployed GoiManager.
pub struct GoiManagerQueryClient<C> {
    client: C,
    contract_address: Addr,
}

impl<C: CosmWasmClient> GoiManagerQueryClient<C> {
    /// The address is not validated, the chain does that.
    pub fn new(client: C, contract_address: impl Into<String>) -> Self {
        Self {
            client,
            contract_address: Addr::unchecked(contract_address),
        }
    }

    pub fn from_config(client: C, config: &GoiManagerConfig) -> Self {
        Self {
            client,
            contract_address: config.contract_address.clone(),
        }
    }

    pub fn contract_address(&self) -> &Addr {
        &self.contract_address
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    /// Active management fees of the manager.
    pub async fn get_management_info(&self) -> Result<ManagementInfoResponse, C::Error> {
        self.query(&QueryMsg::GetManagementInfo {}).await
    }

    /// Management record of `contract`, `None` inside the response when it isn't managed.
    pub async fn get_managed_contract(
        &self,
        contract: impl Into<String>,
    ) -> Result<ManagedContractInfoResponse, C::Error> {
        let msg = QueryMsg::GetManagedContract {
            contract: Addr::unchecked(contract),
        };
        self.query(&msg).await
    }

    async fn query<T: DeserializeOwned + Send>(&self, msg: &QueryMsg) -> Result<T, C::Error> {
        log::debug!(
            "querying {} on goi manager {}",
            msg.variant_name(),
            self.contract_address
        );
        self.client
            .query_contract_smart(&self.contract_address, msg)
            .await
    }
}

impl<C: Clone> Clone for GoiManagerQueryClient<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            contract_address: self.contract_address.clone(),
        }
    }
}
