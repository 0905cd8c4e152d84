//! # GoiManager std
//!
//! `goi_manager_std` contains the messages understood by the GoiManager contract
//! together with the objects those messages carry.
//!
//! ## Description
//! Everything in here is a plain serializable shape. The contract owns the semantics,
//! this crate only fixes the JSON that goes over the wire.

pub mod error;
pub mod group_admin;
pub mod msg;
pub mod objects;

pub use error::GoiStdError;

/// Contract id of the GoiManager, used to key deployments.
pub const GOI_MANAGER: &str = "goi:manager";
