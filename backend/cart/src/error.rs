use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Slot unavailable: {0}")]
    Io(#[from] std::io::Error),
}

/// Reasons a checkout is refused. The messages are shown to the customer as-is.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("Your cart is empty.")]
    EmptyCart,

    #[error("Please enter your location / address.")]
    MissingLocation,
}
