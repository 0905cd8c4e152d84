use cosmwasm_std::StdError;
use thiserror::Error;

/// Errors raised while building or parsing GoiManager objects.
#[derive(Error, Debug, PartialEq)]
pub enum GoiStdError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unknown asset type {0}")]
    UnknownAssetType(String),

    #[error("Unknown managed status {0}")]
    UnknownManagedStatus(String),

    #[error("Unknown player position {0}")]
    UnknownPosition(String),
}

pub type GoiStdResult<T> = Result<T, GoiStdError>;
