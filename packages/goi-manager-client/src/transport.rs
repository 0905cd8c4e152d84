//! Chain access the GoiManager facades are built on.
//!
//! Both traits mirror the generic CosmWasm client primitives: a smart query and a signed
//! execute. Implementations own networking, signing, JSON encoding of the message and
//! decoding of the response. Their `Error` is handed back to callers untouched.

use async_trait::async_trait;
use cosmwasm_std::{Addr, Binary, Coin, Event};
use serde::{de::DeserializeOwned, Serialize};

use crate::fee::ExecuteFee;

/// Result of a broadcast execute transaction.
#[cosmwasm_schema::cw_serde]
#[derive(Default)]
pub struct ExecuteResult {
    pub transaction_hash: String,
    pub height: u64,
    pub gas_wanted: u64,
    pub gas_used: u64,
    pub events: Vec<Event>,
    pub data: Option<Binary>,
}

impl ExecuteResult {
    /// Events of the given type, e.g. `wasm`.
    pub fn events_of_type<'a>(&'a self, ty: &'a str) -> impl Iterator<Item = &'a Event> + 'a {
        self.events.iter().filter(move |event| event.ty == ty)
    }
}

/// Read-only access to contracts on a chain.
#[async_trait]
pub trait CosmWasmClient: Send + Sync {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Sends `msg` as a smart query to `address` and decodes the JSON answer.
    async fn query_contract_smart<M, T>(&self, address: &Addr, msg: &M) -> Result<T, Self::Error>
    where
        M: Serialize + Sync,
        T: DeserializeOwned + Send;
}

/// Signing access to contracts on a chain.
#[async_trait]
pub trait SigningCosmWasmClient: CosmWasmClient {
    /// Signs `msg` as `sender`, broadcasts it to `contract_address` and waits for inclusion.
    async fn execute<M>(
        &self,
        sender: &Addr,
        contract_address: &Addr,
        msg: &M,
        fee: ExecuteFee,
        memo: Option<&str>,
        funds: Option<&[Coin]>,
    ) -> Result<ExecuteResult, Self::Error>
    where
        M: Serialize + Sync;
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    #[test]
    fn filters_events_by_type() {
        let result = ExecuteResult {
            events: vec![
                Event::new("message").add_attribute("sender", "juno1sender"),
                Event::new("wasm").add_attribute("action", "create_new_asset"),
                Event::new("transfer"),
                Event::new("wasm").add_attribute("action", "add_managed_contract"),
            ],
            ..Default::default()
        };

        let actions: Vec<&str> = result
            .events_of_type("wasm")
            .map(|event| event.attributes[0].value.as_str())
            .collect();

        assert_that!(actions).is_equal_to(vec!["create_new_asset", "add_managed_contract"]);
        assert_that!(result.events_of_type("instantiate").count()).is_equal_to(0);
    }
}
