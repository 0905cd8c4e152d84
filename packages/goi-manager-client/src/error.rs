use thiserror::Error;

#[derive(Error, Debug)]
/// Error type for the goi manager client crate.
///
/// The facades never produce these themselves, they return whatever their transport reports.
/// These come from the transports and configuration shipped with this crate.
pub enum GoiManagerClientError {
    #[error("JSON Conversion Error: {0}")]
    SerdeJson(#[from] serde_json::Error),

    #[cfg(feature = "lcd")]
    #[error(transparent)]
    Reqwest(#[from] reqwest::Error),

    #[error("LCD query failed with status {status}: {message}")]
    Lcd { status: u16, message: String },

    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("Environment variable {key} has invalid value {value:?}")]
    InvalidEnv { key: &'static str, value: String },

    #[error("Invalid fee {0:?}, expected \"auto\" or a positive gas multiplier")]
    InvalidFee(String),

    #[error("No sender configured for the signing client")]
    MissingSender {},

    #[cfg(any(test, feature = "test-utils"))]
    #[error("Mock transport rejected the request: {0}")]
    Mock(String),
}

pub type GoiManagerClientResult<T> = Result<T, GoiManagerClientError>;
