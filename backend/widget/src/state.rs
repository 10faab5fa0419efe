use cart::{CartStore, CartView, Checkout, CheckoutError, Slot, render};
use catalog::{Catalog, FALLBACK_ITEM_NAME, FilterState, Visibility};
use tracing::{debug, info};

use crate::config::Config;

/// Opens a deep link somewhere outside the widget. Nothing is awaited.
pub trait Launcher {
    fn open(&mut self, url: &str);
}

/// Prints the link for the user to follow.
pub struct PrintLauncher;

impl Launcher for PrintLauncher {
    fn open(&mut self, url: &str) {
        println!("{url}");
    }
}

/// Owns everything the page mutates: the cart, the filter chips and search
/// field, the location field, and the cart panel.
pub struct Widget<S> {
    catalog: Catalog,
    filter: FilterState,
    store: CartStore<S>,
    checkout: Checkout,
    currency: String,
    location: String,
    cart_open: bool,
    launcher: Box<dyn Launcher>,
}

impl<S: Slot> Widget<S> {
    pub fn new(config: &Config, catalog: Catalog, slot: S, launcher: Box<dyn Launcher>) -> Self {
        let store = CartStore::load(slot, &config.cart_slot);

        info!("Widget ready with {} categories", catalog.categories().len());

        Self {
            catalog,
            filter: FilterState::default(),
            store,
            checkout: config.checkout(),
            currency: config.currency.clone(),
            location: String::new(),
            cart_open: false,
            launcher,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn store(&self) -> &CartStore<S> {
        &self.store
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn is_cart_open(&self) -> bool {
        self.cart_open
    }

    pub fn view(&self) -> CartView {
        render(self.store.cart(), &self.currency)
    }

    pub fn visibility(&self) -> Visibility {
        self.filter.apply(&self.catalog)
    }

    /// Adds the card with this name. Cards missing from the catalog fall
    /// back to the given name at no charge.
    pub fn add_card(&mut self, name: &str) -> CartView {
        let name = name.trim();

        let (name, price) = match self.catalog.find(name) {
            Some(item) => (item.name.clone(), item.price),
            None if name.is_empty() => (FALLBACK_ITEM_NAME.to_string(), 0.0),
            None => {
                debug!("No card named {name}, adding without a price");
                (name.to_string(), 0.0)
            }
        };

        self.store.add_item(&name, price);
        self.cart_open = true;

        self.view()
    }

    pub fn remove_item(&mut self, id: &str) -> CartView {
        self.store.remove_item(id);
        self.view()
    }

    pub fn increment_item(&mut self, id: &str) -> CartView {
        self.store.increment_item(id);
        self.view()
    }

    pub fn decrement_item(&mut self, id: &str) -> CartView {
        self.store.decrement_item(id);
        self.view()
    }

    pub fn clear_cart(&mut self) -> CartView {
        self.store.clear();
        self.view()
    }

    pub fn set_cart_open(&mut self, open: bool) {
        self.cart_open = open;
    }

    pub fn select_category(&mut self, category: &str) -> Visibility {
        self.filter.select_category(category);
        self.visibility()
    }

    pub fn search(&mut self, query: &str) -> Visibility {
        self.filter.set_search(query);
        self.visibility()
    }

    pub fn clear_search(&mut self) -> Visibility {
        self.filter.clear_search();
        self.visibility()
    }

    pub fn set_location(&mut self, location: &str) {
        self.location = location.to_string();
    }

    /// Opens the order link and returns it, or the notice explaining why not.
    pub fn checkout(&mut self) -> Result<String, CheckoutError> {
        let url = self.checkout.order_url(self.store.cart(), &self.location)?;
        self.launcher.open(&url);
        Ok(url)
    }
}

#[cfg(test)]
mod tests {
    use std::{cell::RefCell, rc::Rc};

    use cart::{CheckoutError, MemorySlot};
    use catalog::parse_catalog;

    use super::{Launcher, Widget};
    use crate::config::Config;

    #[derive(Clone, Default)]
    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl Launcher for Recorder {
        fn open(&mut self, url: &str) {
            self.0.borrow_mut().push(url.to_string());
        }
    }

    fn widget() -> (Widget<MemorySlot>, Recorder) {
        let catalog = parse_catalog(
            r#"{ "sections": [ { "title": "Accessories", "items": [
                { "category": "accessories", "name": "Air Freshener", "description": "Vanilla", "price": 4.5 }
            ] } ] }"#,
        )
        .unwrap();

        let recorder = Recorder::default();
        let widget = Widget::new(
            &Config::default(),
            catalog,
            MemorySlot::new(),
            Box::new(recorder.clone()),
        );

        (widget, recorder)
    }

    #[test]
    fn test_add_uses_card_price_and_opens_panel() {
        let (mut widget, _) = widget();
        assert!(!widget.is_cart_open());

        let view = widget.add_card("air freshener");

        assert!(widget.is_cart_open());
        assert_eq!(view.rows[0].name, "Air Freshener");
        assert_eq!(view.rows[0].unit_price, "$4.50");
    }

    #[test]
    fn test_add_missing_card() {
        let (mut widget, _) = widget();

        widget.add_card("");
        widget.add_card("Gift Card");

        let view = widget.view();
        assert_eq!(view.rows[0].name, "Item");
        assert_eq!(view.rows[1].name, "Gift Card");
        assert_eq!(view.total, "$0.00");
    }

    #[test]
    fn test_checkout_blocked_without_location() {
        let (mut widget, recorder) = widget();
        widget.add_card("Air Freshener");

        assert_eq!(widget.checkout(), Err(CheckoutError::MissingLocation));
        assert!(recorder.0.borrow().is_empty());
    }

    #[test]
    fn test_checkout_opens_link() {
        let (mut widget, recorder) = widget();
        widget.add_card("Air Freshener");
        widget.set_location("Beirut");

        let url = widget.checkout().unwrap();

        assert!(url.starts_with("https://wa.me/96176717577?text="));
        assert_eq!(recorder.0.borrow().as_slice(), [url]);
    }
}
