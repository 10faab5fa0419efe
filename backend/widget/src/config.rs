use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use cart::Checkout;
use tracing::{info, warn};

use crate::error::ConfigError;

pub const DEFAULT_RECIPIENT: &str = "96176717577";
pub const DEFAULT_MESSAGING_HOST: &str = "wa.me";
pub const DEFAULT_STORE_NAME: &str = "Drive & Drip";
pub const DEFAULT_CART_SLOT: &str = "drive_drip_cart";
pub const DEFAULT_CURRENCY: &str = "$";
pub const DEFAULT_STORAGE_DIR: &str = ".drip";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Messaging account that receives orders. Digits only, no `+` or spaces.
    pub recipient: String,
    pub messaging_host: String,
    pub store_name: String,
    pub cart_slot: String,
    pub currency: String,
    pub storage_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recipient: DEFAULT_RECIPIENT.to_string(),
            messaging_host: DEFAULT_MESSAGING_HOST.to_string(),
            store_name: DEFAULT_STORE_NAME.to_string(),
            cart_slot: DEFAULT_CART_SLOT.to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self {
            recipient: try_load("DRIP_RECIPIENT", DEFAULT_RECIPIENT)?,
            messaging_host: try_load("DRIP_MESSAGING_HOST", DEFAULT_MESSAGING_HOST)?,
            store_name: try_load("DRIP_STORE_NAME", DEFAULT_STORE_NAME)?,
            cart_slot: try_load("DRIP_CART_SLOT", DEFAULT_CART_SLOT)?,
            currency: try_load("DRIP_CURRENCY", DEFAULT_CURRENCY)?,
            storage_dir: try_load("DRIP_STORAGE_DIR", DEFAULT_STORAGE_DIR)?,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.recipient.is_empty() || !self.recipient.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ConfigError::Recipient(self.recipient.clone()));
        }

        if self.messaging_host.trim().is_empty() {
            return Err(ConfigError::Empty("DRIP_MESSAGING_HOST"));
        }

        if self.cart_slot.trim().is_empty() {
            return Err(ConfigError::Empty("DRIP_CART_SLOT"));
        }

        // the slot name becomes a file name under the storage directory
        if !self
            .cart_slot
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'_' || b == b'-')
        {
            return Err(ConfigError::SlotName(self.cart_slot.clone()));
        }

        Ok(())
    }

    pub fn checkout(&self) -> Checkout {
        Checkout {
            host: self.messaging_host.clone(),
            recipient: self.recipient.clone(),
            store_name: self.store_name.clone(),
            currency: self.currency.clone(),
        }
    }
}

fn var(key: &str) -> Option<String> {
    env::var(key).ok()
}

fn try_load<T: FromStr>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T::Err: Display,
{
    var(key)
        .unwrap_or_else(|| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e: T::Err| {
            warn!("Invalid {key} value: {e}");
            ConfigError::Invalid {
                key,
                reason: e.to_string(),
            }
        })
}
