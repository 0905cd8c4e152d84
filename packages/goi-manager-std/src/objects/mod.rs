//! # Objects
//!
//! Shapes carried inside the GoiManager messages.

mod asset;
mod manage;
mod player;

pub use asset::AssetTypes;
pub use manage::{
    Fee, FeeType, ManagedContract, ManagedStatus, ManagedStatusUpdate, ManagementFee,
};
pub use player::{PlayerInfo, Positions};

use schemars::schema::{InstanceType, Schema, SchemaObject};

/// Schema of an enum sent as its `u8` discriminant.
pub(crate) fn discriminant_schema(values: impl IntoIterator<Item = u8>) -> Schema {
    SchemaObject {
        instance_type: Some(InstanceType::Integer.into()),
        format: Some("uint8".to_string()),
        enum_values: Some(values.into_iter().map(serde_json::Value::from).collect()),
        ..Default::default()
    }
    .into()
}
