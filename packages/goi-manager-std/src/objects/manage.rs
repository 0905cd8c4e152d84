use std::{fmt, str::FromStr};

use cosmwasm_std::{to_json_binary, Addr, CosmosMsg, Decimal, WasmMsg};
use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::{discriminant_schema, AssetTypes};
use crate::{error::GoiStdResult, msg::ExecuteMsg, GoiStdError};

/// Lifecycle status of a contract under management.
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum ManagedStatus {
    #[default]
    Pending = 0,
    Enabled = 1,
    Disabled = 2,
    Suspended = 3,
}

impl JsonSchema for ManagedStatus {
    fn schema_name() -> String {
        "ManagedStatus".to_string()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        discriminant_schema([
            ManagedStatus::Pending,
            ManagedStatus::Enabled,
            ManagedStatus::Disabled,
            ManagedStatus::Suspended,
        ]
        .map(|status| status as u8))
    }
}

impl fmt::Display for ManagedStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ManagedStatus::Pending => "Pending",
            ManagedStatus::Enabled => "Enabled",
            ManagedStatus::Disabled => "Disabled",
            ManagedStatus::Suspended => "Suspended",
        };
        f.write_str(name)
    }
}

impl FromStr for ManagedStatus {
    type Err = GoiStdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(ManagedStatus::Pending),
            "enabled" => Ok(ManagedStatus::Enabled),
            "disabled" => Ok(ManagedStatus::Disabled),
            "suspended" => Ok(ManagedStatus::Suspended),
            _ => Err(GoiStdError::UnknownManagedStatus(s.to_string())),
        }
    }
}

/// Status change reported by a managed contract to its manager.
#[cosmwasm_schema::cw_serde]
pub struct ManagedStatusUpdate {
    pub managed_contract: String,
    pub manager_contract: String,
    pub managed_status: ManagedStatus,
}

impl ManagedStatusUpdate {
    pub fn new<T: Into<String>>(
        managed_contract: T,
        manager_contract: T,
        managed_status: ManagedStatus,
    ) -> Self {
        Self {
            managed_contract: managed_contract.into(),
            manager_contract: manager_contract.into(),
            managed_status,
        }
    }

    /// Wraps the update in the `managed_status_changed_hook` execute message
    /// addressed to `manager`, ready to be dispatched by the managed contract.
    pub fn into_cosmos_msg(self, manager: impl Into<String>) -> GoiStdResult<CosmosMsg> {
        let msg = ExecuteMsg::ManagedStatusChangedHook { change: self };
        Ok(WasmMsg::Execute {
            contract_addr: manager.into(),
            msg: to_json_binary(&msg)?,
            funds: vec![],
        }
        .into())
    }
}

#[cosmwasm_schema::cw_serde]
pub struct ManagedContract {
    pub managed: ManagedStatus,
    pub contract: Addr,
    pub contract_type: AssetTypes,
}

// Variant names are kept verbatim on the wire.
#[derive(
    serde::Serialize, serde::Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema,
)]
pub enum FeeType {
    Dev,
    ServiceProvider,
}

/// A cut taken on asset sales, paid out to `to_address`.
#[cosmwasm_schema::cw_serde]
pub struct Fee {
    pub fee_type: FeeType,
    pub description: Option<String>,
    pub to_address: Addr,
    pub percent: Decimal,
}

#[cosmwasm_schema::cw_serde]
pub struct ManagementFee {
    pub id: i32,
    pub created_at_block_height: u64,
    pub active: bool,
    pub fees: Fee,
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_json;
    use serde_json::json;
    use speculoos::prelude::*;

    #[test]
    fn managed_status_defaults_to_pending() {
        assert_that!(ManagedStatus::default()).is_equal_to(ManagedStatus::Pending);
        assert_that!(ManagedStatus::Suspended.to_string()).is_equal_to("Suspended".to_string());
        assert_that!("enabled".parse::<ManagedStatus>())
            .is_ok()
            .is_equal_to(ManagedStatus::Enabled);
        assert_that!("retired".parse::<ManagedStatus>()).is_err();
    }

    #[test]
    fn managed_status_schema_is_integer() -> anyhow::Result<()> {
        let schema = serde_json::to_value(schemars::schema_for!(ManagedStatus))?;
        assert_that!(schema["type"]).is_equal_to(json!("integer"));
        assert_that!(schema["enum"]).is_equal_to(json!([0, 1, 2, 3]));
        Ok(())
    }

    #[test]
    fn management_fee_wire_format() -> anyhow::Result<()> {
        let fee = ManagementFee {
            id: 1,
            created_at_block_height: 42,
            active: true,
            fees: Fee {
                fee_type: FeeType::ServiceProvider,
                description: None,
                to_address: Addr::unchecked("treasury"),
                percent: Decimal::percent(5),
            },
        };

        assert_that!(serde_json::to_value(&fee)?).is_equal_to(json!({
            "id": 1,
            "created_at_block_height": 42,
            "active": true,
            "fees": {
                "fee_type": "ServiceProvider",
                "description": null,
                "to_address": "treasury",
                "percent": "0.05"
            }
        }));
        Ok(())
    }

    #[test]
    fn status_update_becomes_hook_message() -> anyhow::Result<()> {
        let update = ManagedStatusUpdate::new("team", "manager", ManagedStatus::Enabled);

        let CosmosMsg::Wasm(WasmMsg::Execute {
            contract_addr,
            msg,
            funds,
        }) = update.clone().into_cosmos_msg("manager")?
        else {
            panic!("expected a wasm execute message");
        };

        assert_that!(contract_addr).is_equal_to("manager".to_string());
        assert_that!(funds).is_empty();
        let sent: ExecuteMsg = from_json(msg)?;
        assert_that!(sent).is_equal_to(ExecuteMsg::ManagedStatusChangedHook { change: update });
        Ok(())
    }
}
