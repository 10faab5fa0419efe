use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid {key} value: {reason}")]
    Invalid { key: &'static str, reason: String },

    #[error("{0} must not be empty")]
    Empty(&'static str),

    #[error("Cart slot may only use letters, digits, `_` and `-`, got {0:?}")]
    SlotName(String),

    #[error("Recipient must be digits only, got {0:?}")]
    Recipient(String),
}
