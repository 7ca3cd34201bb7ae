//! Runtime configuration from `STOREFRONT_*` environment variables.
//!
//! Every key is optional. A missing key is logged and the default used; a key that is
//! set but does not parse is an error, so a typo never silently falls back.

use crate::checkout::CheckoutPolicy;
use crate::search::SearchSettings;
use crate::tracking::TrackingSettings;
use std::env;
use std::fmt::Display;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid {key} value {value:?}: {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct StorefrontConfig {
    /// Where the cart and search blobs are written. `None` keeps them in memory.
    pub data_dir: Option<PathBuf>,
    /// Menu JSON file. `None` uses the built-in menu.
    pub menu_path: Option<PathBuf>,
    pub search: SearchSettings,
    pub tracking: TrackingSettings,
    pub checkout: CheckoutPolicy,
    pub processing_delay: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            data_dir: None,
            menu_path: None,
            search: SearchSettings::default(),
            tracking: TrackingSettings::default(),
            checkout: CheckoutPolicy::default(),
            processing_delay: Duration::from_secs(2),
        }
    }
}

impl StorefrontConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup (the environment, a map in tests).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let loader = Loader { lookup };

        Ok(Self {
            data_dir: loader.path("STOREFRONT_DATA_DIR"),
            menu_path: loader.path("STOREFRONT_MENU_PATH"),
            search: SearchSettings {
                debounce: Duration::from_millis(loader.parse(
                    "STOREFRONT_SEARCH_DEBOUNCE_MS",
                    defaults.search.debounce.as_millis() as u64,
                )?),
                min_query_len: loader.parse(
                    "STOREFRONT_SEARCH_MIN_QUERY_LEN",
                    defaults.search.min_query_len,
                )?,
            },
            tracking: TrackingSettings {
                stage_interval: Duration::from_secs(loader.parse(
                    "STOREFRONT_STAGE_INTERVAL_SECS",
                    defaults.tracking.stage_interval.as_secs(),
                )?),
                minute_interval: Duration::from_secs(loader.parse(
                    "STOREFRONT_MINUTE_INTERVAL_SECS",
                    defaults.tracking.minute_interval.as_secs(),
                )?),
                initial_minutes: loader.parse(
                    "STOREFRONT_INITIAL_MINUTES",
                    defaults.tracking.initial_minutes,
                )?,
            },
            checkout: CheckoutPolicy {
                delivery_fee: loader.parse(
                    "STOREFRONT_DELIVERY_FEE",
                    defaults.checkout.delivery_fee,
                )?,
                service_fee: loader.parse("STOREFRONT_SERVICE_FEE", defaults.checkout.service_fee)?,
                promo_code: loader.parse("STOREFRONT_PROMO_CODE", defaults.checkout.promo_code)?,
                promo_rate: loader.parse("STOREFRONT_PROMO_RATE", defaults.checkout.promo_rate)?,
            },
            processing_delay: Duration::from_millis(loader.parse(
                "STOREFRONT_PROCESSING_DELAY_MS",
                defaults.processing_delay.as_millis() as u64,
            )?),
        })
    }
}

struct Loader<F> {
    lookup: F,
}

impl<F: Fn(&str) -> Option<String>> Loader<F> {
    fn parse<T>(&self, key: &'static str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr + Display,
        T::Err: Display,
    {
        let Some(value) = (self.lookup)(key) else {
            info!("{key} not set, using default: {default}");
            return Ok(default);
        };
        value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            value,
            reason: e.to_string(),
        })
    }

    fn path(&self, key: &'static str) -> Option<PathBuf> {
        let path = (self.lookup)(key).filter(|v| !v.trim().is_empty());
        if path.is_none() {
            info!("{key} not set");
        }
        path.map(PathBuf::from)
    }
}
