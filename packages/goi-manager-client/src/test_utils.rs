//! Recording transport for tests.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use cosmwasm_std::{Addr, Coin};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use crate::{
    error::GoiManagerClientError,
    fee::ExecuteFee,
    transport::{CosmWasmClient, ExecuteResult, SigningCosmWasmClient},
};

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedQuery {
    pub contract_address: Addr,
    pub msg: Value,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedExecute {
    pub sender: Addr,
    pub contract_address: Addr,
    pub msg: Value,
    pub fee: ExecuteFee,
    pub memo: Option<String>,
    pub funds: Option<Vec<Coin>>,
}

/// Transport that records every request as JSON and answers with canned values.
///
/// Requests are recorded before any configured rejection, so rejected calls are still counted.
#[derive(Debug, Default)]
pub struct MockCosmWasmClient {
    query_response: Option<Value>,
    execute_result: ExecuteResult,
    rejection: Option<String>,
    queries: Mutex<Vec<RecordedQuery>>,
    executes: Mutex<Vec<RecordedExecute>>,
}

impl MockCosmWasmClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// Answer every query with `response`.
    ///
    /// Panics when `response` has no JSON form.
    pub fn with_query_response(mut self, response: impl Serialize) -> Self {
        let response =
            serde_json::to_value(response).expect("canned query response must serialize to JSON");
        self.query_response = Some(response);
        self
    }

    pub fn with_execute_result(mut self, result: ExecuteResult) -> Self {
        self.execute_result = result;
        self
    }

    /// Reject every request with [`GoiManagerClientError::Mock`].
    pub fn rejecting(mut self, reason: impl Into<String>) -> Self {
        self.rejection = Some(reason.into());
        self
    }

    pub fn queries(&self) -> Vec<RecordedQuery> {
        lock(&self.queries).clone()
    }

    pub fn executes(&self) -> Vec<RecordedExecute> {
        lock(&self.executes).clone()
    }

    fn check_rejection(&self) -> Result<(), GoiManagerClientError> {
        match &self.rejection {
            Some(reason) => Err(GoiManagerClientError::Mock(reason.clone())),
            None => Ok(()),
        }
    }
}

// A panicking test must not hide the requests recorded so far.
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl CosmWasmClient for MockCosmWasmClient {
    type Error = GoiManagerClientError;

    async fn query_contract_smart<M, T>(&self, address: &Addr, msg: &M) -> Result<T, Self::Error>
    where
        M: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let msg = serde_json::to_value(msg)?;
        lock(&self.queries).push(RecordedQuery {
            contract_address: address.clone(),
            msg,
        });
        self.check_rejection()?;

        let response = self.query_response.clone().ok_or_else(|| {
            GoiManagerClientError::Mock("no query response configured".to_string())
        })?;
        Ok(serde_json::from_value(response)?)
    }
}

#[async_trait]
impl SigningCosmWasmClient for MockCosmWasmClient {
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
        M: Serialize + Sync,
    {
        let msg = serde_json::to_value(msg)?;
        lock(&self.executes).push(RecordedExecute {
            sender: sender.clone(),
            contract_address: contract_address.clone(),
            msg,
            fee,
            memo: memo.map(str::to_string),
            funds: funds.map(<[Coin]>::to_vec),
        });
        self.check_rejection()?;

        Ok(self.execute_result.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    #[should_panic(expected = "canned query response must serialize to JSON")]
    fn unserializable_response_panics() {
        // JSON object keys must be strings
        let response = BTreeMap::from([(vec![1u8], 1u8)]);
        let _ = MockCosmWasmClient::new().with_query_response(response);
    }

    #[tokio::test]
    async fn missing_response_is_reported() {
        let mock = MockCosmWasmClient::new();

        let res: Result<Value, _> = mock
            .query_contract_smart(&Addr::unchecked("juno1manager"), &serde_json::json!({}))
            .await;

        assert!(matches!(
            res,
            Err(GoiManagerClientError::Mock(reason)) if reason == "no query response configured"
        ));
    }
}
