#![doc = include_str!("../README.md")]

mod client;
pub mod config;
mod error;
pub mod fee;
#[cfg(feature = "interface")]
pub mod interface;
#[cfg(feature = "lcd")]
pub mod lcd;
mod query_client;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;
pub mod transport;

// Re-export the message types
pub use goi_manager_std::{self, group_admin, msg, objects};

pub use client::GoiManagerClient;
pub use config::GoiManagerConfig;
pub use error::{GoiManagerClientError, GoiManagerClientResult};
pub use fee::{ExecuteFee, StdFee};
pub use query_client::GoiManagerQueryClient;
pub use transport::{CosmWasmClient, ExecuteResult, SigningCosmWasmClient};
