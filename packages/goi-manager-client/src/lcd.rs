//! Smart queries over a chain's REST (LCD) gateway.

use std::time::Duration;

use async_trait::async_trait;
use cosmwasm_std::{Addr, Binary};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::{
    config::{GoiManagerConfig, LCD_URL_ENV},
    error::{GoiManagerClientError, GoiManagerClientResult},
    transport::CosmWasmClient,
};

const SMART_QUERY_PATH: &str = "cosmwasm/wasm/v1/contract";

#[derive(Deserialize)]
struct SmartQueryResponse<T> {
    data: T,
}

#[derive(Deserialize)]
struct LcdErrorResponse {
    message: String,
}

/// Read-only transport querying contracts through `GET .../smart/{query}`.
#[derive(Clone, Debug)]
pub struct LcdQueryClient {
    http: reqwest::Client,
    base_url: String,
}

impl LcdQueryClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> GoiManagerClientResult<Self> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    /// Uses the configured `lcd_url` and request timeout.
    pub fn from_config(config: &GoiManagerConfig) -> GoiManagerClientResult<Self> {
        let base_url = config
            .lcd_url
            .as_deref()
            .ok_or(GoiManagerClientError::MissingEnv(LCD_URL_ENV))?;
        Self::new(base_url, config.request_timeout)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL of the smart query `msg` (raw JSON bytes) against `address`.
    /// The query is base64 encoded with the url-safe alphabet so it fits in a path segment.
    pub fn smart_query_url(&self, address: &Addr, msg: &[u8]) -> String {
        let encoded = Binary::from(msg)
            .to_base64()
            .replace('+', "-")
            .replace('/', "_");
        format!(
            "{}/{}/{}/smart/{}",
            self.base_url, SMART_QUERY_PATH, address, encoded
        )
    }
}

#[async_trait]
impl CosmWasmClient for LcdQueryClient {
    type Error = GoiManagerClientError;

    async fn query_contract_smart<M, T>(&self, address: &Addr, msg: &M) -> Result<T, Self::Error>
    where
        M: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let body = serde_json::to_vec(msg)?;
        let url = self.smart_query_url(address, &body);
        log::trace!(
            "smart query {} to {address}",
            String::from_utf8_lossy(&body)
        );

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<LcdErrorResponse>(&text)
                .map(|err| err.message)
                .unwrap_or(text);
            log::warn!("smart query to {address} failed with {status}: {message}");
            return Err(GoiManagerClientError::Lcd {
                status: status.as_u16(),
                message,
            });
        }

        let SmartQueryResponse { data } = serde_json::from_str::<SmartQueryResponse<T>>(&text)?;
        Ok(data)
    }
}
