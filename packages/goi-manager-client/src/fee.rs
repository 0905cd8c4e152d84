use std::{fmt, str::FromStr};

use cosmwasm_std::Coin;

use crate::error::GoiManagerClientError;

/// Literal that asks the transport to simulate the transaction and pick the fee itself.
pub const AUTO_FEE: &str = "auto";

/// A fully specified transaction fee.
#[cosmwasm_schema::cw_serde]
pub struct StdFee {
    pub amount: Vec<Coin>,
    pub gas: String,
}

impl StdFee {
    pub fn new(amount: Vec<Coin>, gas: u64) -> Self {
        Self {
            amount,
            gas: gas.to_string(),
        }
    }
}

/// How the fee of an execute transaction is determined.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ExecuteFee {
    /// Simulate and let the transport estimate.
    #[default]
    Auto,
    /// Simulate and multiply the estimated gas by this factor.
    GasMultiplier(f64),
    Explicit(StdFee),
}

impl ExecuteFee {
    pub fn is_auto(&self) -> bool {
        matches!(self, ExecuteFee::Auto)
    }
}

impl From<StdFee> for ExecuteFee {
    fn from(fee: StdFee) -> Self {
        ExecuteFee::Explicit(fee)
    }
}

impl From<f64> for ExecuteFee {
    fn from(multiplier: f64) -> Self {
        ExecuteFee::GasMultiplier(multiplier)
    }
}

impl fmt::Display for ExecuteFee {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecuteFee::Auto => f.write_str(AUTO_FEE),
            ExecuteFee::GasMultiplier(multiplier) => write!(f, "{multiplier}"),
            ExecuteFee::Explicit(fee) => {
                let amount = fee
                    .amount
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "{amount} ({} gas)", fee.gas)
            }
        }
    }
}

/// Parses `"auto"` or a positive gas multiplier. Explicit fees have no string form.
impl FromStr for ExecuteFee {
    type Err = GoiManagerClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case(AUTO_FEE) {
            return Ok(ExecuteFee::Auto);
        }
        match s.parse::<f64>() {
            Ok(multiplier) if multiplier.is_finite() && multiplier > 0.0 => {
                Ok(ExecuteFee::GasMultiplier(multiplier))
            }
            _ => Err(GoiManagerClientError::InvalidFee(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::coin;
    use rstest::rstest;
    use speculoos::prelude::*;

    #[test]
    fn auto_by_default() {
        assert_that!(ExecuteFee::default()).is_equal_to(ExecuteFee::Auto);
        assert_that!(ExecuteFee::default().to_string()).is_equal_to(AUTO_FEE.to_string());
    }

    #[rstest]
    #[case("auto", ExecuteFee::Auto)]
    #[case(" AUTO ", ExecuteFee::Auto)]
    #[case("1.3", ExecuteFee::GasMultiplier(1.3))]
    fn parses(#[case] input: &str, #[case] expected: ExecuteFee) {
        assert_that!(input.parse::<ExecuteFee>())
            .is_ok()
            .is_equal_to(expected);
    }

    #[rstest]
    #[case("")]
    #[case("0")]
    #[case("-2")]
    #[case("cheap")]
    fn rejects(#[case] input: &str) {
        let res = input.parse::<ExecuteFee>();
        assert!(matches!(res, Err(GoiManagerClientError::InvalidFee(_))));
    }

    #[test]
    fn displays_explicit_fee() {
        let fee: ExecuteFee = StdFee::new(vec![coin(5000, "ujuno")], 200_000).into();
        assert_that!(fee.to_string()).is_equal_to("5000ujuno (200000 gas)".to_string());
        assert_that!(fee.is_auto()).is_false();
    }
}
