//! # Storefront Widget
//!
//! Browsing, cart, and checkout for a single-page shop.
//!
//! ## Flow
//! - Catalog is loaded once, cart is read from its slot
//! - Each UI event maps to one action identifier and one target string
//! - The action runs to completion and the result is drawn
//!
//! ## Actions
//! - `add` card name, `remove`/`inc`/`dec` cart identifier, `clear`
//! - `open`/`close` the cart panel
//! - `filter` category, `search` text, `clear-search`
//! - `location` text, `checkout`
use std::fmt::Write;

use cart::{Slot, format_money};
use tracing_subscriber::{EnvFilter, fmt};

pub mod config;
pub mod error;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::{Outcome, Router, routes};
pub use state::{Launcher, PrintLauncher, Widget};

pub fn init_tracing() {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
}

/// Text form of an outcome, as the CLI prints it.
pub fn describe<S: Slot>(outcome: &Outcome, widget: &Widget<S>) -> String {
    match outcome {
        Outcome::Cart(view) => view.to_string(),
        Outcome::Listing(visibility) => {
            let mut listing = String::new();

            for (title, items) in visibility.visible_items(widget.catalog()) {
                let _ = writeln!(listing, "{title}");
                for item in items {
                    let _ = writeln!(
                        listing,
                        "  {} {} - {}",
                        item.name,
                        format_money(item.price, widget.currency()),
                        item.description
                    );
                }
            }

            if listing.is_empty() {
                "No items match.".to_string()
            } else {
                listing.trim_end().to_string()
            }
        }
        Outcome::Panel(open) => {
            let state = if *open { "opened" } else { "closed" };
            format!("Cart {state}.")
        }
        Outcome::Notice(notice) => notice.to_string(),
        Outcome::Opened(url) => format!("Order link: {url}"),
        Outcome::Updated | Outcome::Ignored => String::new(),
    }
}
