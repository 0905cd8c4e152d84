use std::{fmt, str::FromStr};

use cosmwasm_std::Addr;
use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde_repr::{Deserialize_repr, Serialize_repr};

use super::discriminant_schema;
use crate::GoiStdError;

/// Field positions, encoded by declaration order on the wire.
#[derive(Serialize_repr, Deserialize_repr, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
#[allow(clippy::upper_case_acronyms)]
pub enum Positions {
    // Offense
    RB,
    QB,
    WR1,
    WR2,
    CO,
    GL,
    GR,

    // Defense
    S,
    CB1,
    CB2,
    LB,
    CD,
    TR,
    TL,
}

impl Positions {
    pub const ALL: [Positions; 14] = [
        Positions::RB,
        Positions::QB,
        Positions::WR1,
        Positions::WR2,
        Positions::CO,
        Positions::GL,
        Positions::GR,
        Positions::S,
        Positions::CB1,
        Positions::CB2,
        Positions::LB,
        Positions::CD,
        Positions::TR,
        Positions::TL,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Positions::RB => "rb",
            Positions::QB => "qb",
            Positions::WR1 => "wr1",
            Positions::WR2 => "wr2",
            Positions::CO => "co",
            Positions::GL => "gl",
            Positions::GR => "gr",
            Positions::S => "s",
            Positions::CB1 => "cb1",
            Positions::CB2 => "cb2",
            Positions::LB => "lb",
            Positions::CD => "cd",
            Positions::TR => "tr",
            Positions::TL => "tl",
        }
    }

    pub fn is_offense(&self) -> bool {
        (*self as u8) < (Positions::S as u8)
    }
}

impl JsonSchema for Positions {
    fn schema_name() -> String {
        "Positions".to_string()
    }

    fn json_schema(_gen: &mut SchemaGenerator) -> Schema {
        discriminant_schema(Positions::ALL.map(|position| position as u8))
    }
}

impl fmt::Display for Positions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Positions {
    type Err = GoiStdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.to_lowercase();
        Positions::ALL
            .into_iter()
            .find(|position| position.code() == code)
            .ok_or_else(|| GoiStdError::UnknownPosition(s.to_string()))
    }
}

#[cosmwasm_schema::cw_serde]
pub struct PlayerInfo {
    pub address: Addr,
    pub first_name: String,
    pub last_name: String,
    pub position: Positions,
    pub assigned_team_address: Option<Addr>,
}

impl PlayerInfo {
    /// A player not yet assigned to any team.
    pub fn new(
        address: Addr,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        position: Positions,
    ) -> Self {
        Self {
            address,
            first_name: first_name.into(),
            last_name: last_name.into(),
            position,
            assigned_team_address: None,
        }
    }
}
