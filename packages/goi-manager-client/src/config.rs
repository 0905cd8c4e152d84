//! Client configuration, usually read from the environment.

use std::time::Duration;

use cosmwasm_std::Addr;

use crate::{
    error::{GoiManagerClientError, GoiManagerClientResult},
    fee::ExecuteFee,
};

pub const ADDRESS_ENV: &str = "GOI_MANAGER_ADDRESS";
pub const SENDER_ENV: &str = "GOI_MANAGER_SENDER";
pub const LCD_URL_ENV: &str = "GOI_MANAGER_LCD_URL";
pub const TIMEOUT_ENV: &str = "GOI_MANAGER_TIMEOUT_SECS";
pub const DEFAULT_FEE_ENV: &str = "GOI_MANAGER_DEFAULT_FEE";

pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone, Debug, PartialEq)]
pub struct GoiManagerConfig {
    pub contract_address: Addr,
    /// Required by the signing client only.
    pub sender: Option<Addr>,
    pub lcd_url: Option<String>,
    pub request_timeout: Duration,
    /// Fee used by execute calls that don't pass one.
    pub default_fee: ExecuteFee,
}

impl GoiManagerConfig {
    pub fn new(contract_address: impl Into<String>) -> Self {
        Self {
            contract_address: Addr::unchecked(contract_address),
            sender: None,
            lcd_url: None,
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
            default_fee: ExecuteFee::Auto,
        }
    }

    pub fn with_sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = Some(Addr::unchecked(sender));
        self
    }

    pub fn with_lcd_url(mut self, lcd_url: impl Into<String>) -> Self {
        self.lcd_url = Some(lcd_url.into());
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_default_fee(mut self, fee: ExecuteFee) -> Self {
        self.default_fee = fee;
        self
    }

    /// Loads `.env` when present, then reads the `GOI_MANAGER_*` variables.
    pub fn from_env() -> GoiManagerClientResult<Self> {
        if let Ok(path) = dotenv::dotenv() {
            log::debug!("loaded environment from {}", path.display());
        }
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Empty values count as unset.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> GoiManagerClientResult<Self> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let contract_address =
            var(ADDRESS_ENV).ok_or(GoiManagerClientError::MissingEnv(ADDRESS_ENV))?;
        let mut config = Self::new(contract_address.trim());

        if let Some(sender) = var(SENDER_ENV) {
            config = config.with_sender(sender.trim());
        }
        if let Some(lcd_url) = var(LCD_URL_ENV) {
            config = config.with_lcd_url(lcd_url.trim());
        }
        if let Some(timeout) = var(TIMEOUT_ENV) {
            let secs = timeout
                .trim()
                .parse::<u64>()
                .map_err(|_| GoiManagerClientError::InvalidEnv {
                    key: TIMEOUT_ENV,
                    value: timeout.clone(),
                })?;
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        if let Some(fee) = var(DEFAULT_FEE_ENV) {
            let fee = fee.parse::<ExecuteFee>().map_err(|_| GoiManagerClientError::InvalidEnv {
                key: DEFAULT_FEE_ENV,
                value: fee.clone(),
            })?;
            config = config.with_default_fee(fee);
        }

        Ok(config)
    }
}
