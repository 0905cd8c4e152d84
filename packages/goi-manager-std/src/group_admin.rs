//! # Group admin hooks
//!
//! Messages the GoiManager relays to its group admin. They travel nested inside
//! [`ExecuteMsg::GroupAdminHooks`](crate::msg::ExecuteMsg::GroupAdminHooks).

use cw4::Member;

#[cosmwasm_schema::cw_serde]
pub enum GroupAdminHooksMsg {
    /// Stop notifying `addr` about membership changes.
    RemoveHook { addr: String },
    /// Start notifying `addr` about membership changes.
    AddHook { addr: String },
    /// Replace the group admin, `None` clears it.
    UpdateAdmin { admin_addr: Option<String> },
    UpdateMembers { remove: Vec<String>, add: Vec<Member> },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use speculoos::prelude::*;

    #[test]
    fn update_members_wire_format() -> anyhow::Result<()> {
        let msg = GroupAdminHooksMsg::UpdateMembers {
            remove: vec!["gone".to_string()],
            add: vec![Member {
                addr: "fresh".to_string(),
                weight: 3,
            }],
        };

        assert_that!(serde_json::to_value(&msg)?).is_equal_to(json!({
            "update_members": {
                "remove": ["gone"],
                "add": [{ "addr": "fresh", "weight": 3 }]
            }
        }));
        Ok(())
    }

    #[test]
    fn cleared_admin_is_null() -> anyhow::Result<()> {
        let msg = GroupAdminHooksMsg::UpdateAdmin { admin_addr: None };
        assert_that!(serde_json::to_value(&msg)?)
            .is_equal_to(json!({ "update_admin": { "admin_addr": null } }));
        Ok(())
    }
}
