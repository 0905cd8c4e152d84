use std::{fmt, str::FromStr};

use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::discriminant_schema;
use crate::GoiStdError;

/// Kind of asset a managed contract represents.
/// Encoded as its discriminant on the wire.
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AssetTypes {
    Team = 0,
    League = 1,
    Display = 2,
    App = 3,
}

impl JsonSchema for AssetTypes {
    fn schema_name() -> String {
        "AssetTypes".to_string()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        discriminant_schema(AssetTypes::ALL.map(AssetTypes::to_u8))
    }
}

impl AssetTypes {
    pub const ALL: [AssetTypes; 4] = [
        AssetTypes::Team,
        AssetTypes::League,
        AssetTypes::Display,
        AssetTypes::App,
    ];

    pub fn to_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for AssetTypes {
    type Error = GoiStdError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AssetTypes::Team),
            1 => Ok(AssetTypes::League),
            2 => Ok(AssetTypes::Display),
            3 => Ok(AssetTypes::App),
            other => Err(GoiStdError::UnknownAssetType(other.to_string())),
        }
    }
}

impl fmt::Display for AssetTypes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AssetTypes::Team => "Team",
            AssetTypes::League => "League",
            AssetTypes::Display => "Display",
            AssetTypes::App => "App",
        };
        f.write_str(name)
    }
}

impl FromStr for AssetTypes {
    type Err = GoiStdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "team" => Ok(AssetTypes::Team),
            "league" => Ok(AssetTypes::League),
            "display" => Ok(AssetTypes::Display),
            "app" => Ok(AssetTypes::App),
            _ => Err(GoiStdError::UnknownAssetType(s.to_string())),
        }
    }
}
