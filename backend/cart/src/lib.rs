//! # Cart
//!
//! Shopping cart kept in a single persistent slot.
//!
//! ## Slot Format
//! - One string key, JSON object value
//! - identifier (**string**) to `{ name: string, price: number, qty: number }`
//! - No versioning, a malformed slot is read as an empty cart
//!
//! ## Identifiers
//! - Derived from the display name: lowercased, runs of anything outside `a-z0-9`
//!   collapsed to `_`, leading/trailing `_` stripped
//! - Two names that normalize to the same identifier share one entry
//!
//! ## Checkout
//! - Blocked with a notice when the cart is empty or the location is blank
//! - Otherwise the order text is percent-encoded into a messaging deep link
pub mod checkout;
pub mod error;
pub mod render;
pub mod storage;
pub mod store;
pub mod utils;

pub use checkout::Checkout;
pub use error::{CheckoutError, StorageError};
pub use render::{CartRow, CartView, EMPTY_CART_NOTICE, render};
pub use storage::{FileSlot, MemorySlot, Slot};
pub use store::{Cart, CartStore, Entry};
pub use utils::{format_money, item_id};
