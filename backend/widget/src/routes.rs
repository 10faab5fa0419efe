use std::collections::HashMap;

use cart::{CartView, CheckoutError, Slot};
use catalog::Visibility;
use tracing::debug;

use crate::state::Widget;

/// What a handler hands back for the page to draw.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Cart(CartView),
    Listing(Visibility),
    Panel(bool),
    Notice(CheckoutError),
    Opened(String),
    Updated,
    Ignored,
}

pub type Handler<S> = fn(&mut Widget<S>, &str) -> Outcome;

/// Action identifier to handler.
pub struct Router<S> {
    routes: HashMap<&'static str, Handler<S>>,
}

impl<S: Slot> Default for Router<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Slot> Router<S> {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
        }
    }

    pub fn route(mut self, action: &'static str, handler: Handler<S>) -> Self {
        self.routes.insert(action, handler);
        self
    }

    pub fn actions(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.routes.keys().copied()
    }

    /// Unknown actions do nothing.
    pub fn dispatch(&self, widget: &mut Widget<S>, action: &str, target: &str) -> Outcome {
        match self.routes.get(action) {
            Some(handler) => handler(widget, target),
            None => {
                debug!("No handler for action {action}");
                Outcome::Ignored
            }
        }
    }
}

pub fn routes<S: Slot>() -> Router<S> {
    Router::new()
        .route("add", add_handler)
        .route("remove", remove_handler)
        .route("inc", increment_handler)
        .route("dec", decrement_handler)
        .route("clear", clear_handler)
        .route("open", open_handler)
        .route("close", close_handler)
        .route("filter", filter_handler)
        .route("search", search_handler)
        .route("clear-search", clear_search_handler)
        .route("location", location_handler)
        .route("checkout", checkout_handler)
}

fn add_handler<S: Slot>(widget: &mut Widget<S>, name: &str) -> Outcome {
    Outcome::Cart(widget.add_card(name))
}

fn remove_handler<S: Slot>(widget: &mut Widget<S>, id: &str) -> Outcome {
    if id.is_empty() {
        return Outcome::Ignored;
    }

    Outcome::Cart(widget.remove_item(id))
}

fn increment_handler<S: Slot>(widget: &mut Widget<S>, id: &str) -> Outcome {
    if id.is_empty() {
        return Outcome::Ignored;
    }

    Outcome::Cart(widget.increment_item(id))
}

fn decrement_handler<S: Slot>(widget: &mut Widget<S>, id: &str) -> Outcome {
    if id.is_empty() {
        return Outcome::Ignored;
    }

    Outcome::Cart(widget.decrement_item(id))
}

fn clear_handler<S: Slot>(widget: &mut Widget<S>, _: &str) -> Outcome {
    Outcome::Cart(widget.clear_cart())
}

fn open_handler<S: Slot>(widget: &mut Widget<S>, _: &str) -> Outcome {
    widget.set_cart_open(true);
    Outcome::Panel(true)
}

fn close_handler<S: Slot>(widget: &mut Widget<S>, _: &str) -> Outcome {
    widget.set_cart_open(false);
    Outcome::Panel(false)
}

fn filter_handler<S: Slot>(widget: &mut Widget<S>, category: &str) -> Outcome {
    Outcome::Listing(widget.select_category(category))
}

fn search_handler<S: Slot>(widget: &mut Widget<S>, query: &str) -> Outcome {
    Outcome::Listing(widget.search(query))
}

fn clear_search_handler<S: Slot>(widget: &mut Widget<S>, _: &str) -> Outcome {
    Outcome::Listing(widget.clear_search())
}

fn location_handler<S: Slot>(widget: &mut Widget<S>, location: &str) -> Outcome {
    widget.set_location(location);
    Outcome::Updated
}

fn checkout_handler<S: Slot>(widget: &mut Widget<S>, _: &str) -> Outcome {
    match widget.checkout() {
        Ok(url) => Outcome::Opened(url),
        Err(notice) => Outcome::Notice(notice),
    }
}
