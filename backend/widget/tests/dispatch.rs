use cart::{CheckoutError, FileSlot, MemorySlot, Slot};
use catalog::parse_catalog;
use widget::{Config, Launcher, Outcome, Widget, describe, routes};

const CATALOG: &str = r#"{
    "sections": [
        {
            "title": "Cleaning",
            "items": [
                { "category": "cleaning", "name": "Car Shampoo", "description": "Thick foam wash", "price": 12 },
                { "category": "cleaning", "name": "Glass Cleaner", "description": "Streak free", "price": 6.5 }
            ]
        },
        {
            "title": "Accessories",
            "items": [
                { "category": "accessories", "name": "Air Freshener", "description": "Vanilla scent", "price": 4.5 },
                { "category": "accessories", "name": "Phone Holder", "description": "Fits any vent", "price": 10 }
            ]
        }
    ]
}"#;

struct Silent;

impl Launcher for Silent {
    fn open(&mut self, _url: &str) {}
}

fn widget_with<S: Slot>(slot: S) -> Widget<S> {
    Widget::new(
        &Config::default(),
        parse_catalog(CATALOG).unwrap(),
        slot,
        Box::new(Silent),
    )
}

#[test]
fn test_shopping_flow() {
    let router = routes();
    let mut widget = widget_with(MemorySlot::new());

    router.dispatch(&mut widget, "add", "Air Freshener");
    router.dispatch(&mut widget, "add", "Air Freshener");
    router.dispatch(&mut widget, "add", "Car Shampoo");
    router.dispatch(&mut widget, "inc", "car_shampoo");
    router.dispatch(&mut widget, "dec", "car_shampoo");

    let Outcome::Cart(view) = router.dispatch(&mut widget, "dec", "air_freshener") else {
        panic!("expected a cart view");
    };

    assert_eq!(view.count, 2);
    assert_eq!(view.total, "$16.50");
    assert!(widget.is_cart_open());

    router.dispatch(&mut widget, "location", "  Beirut ");
    let Outcome::Opened(url) = router.dispatch(&mut widget, "checkout", "") else {
        panic!("expected an order link");
    };

    assert!(url.starts_with("https://wa.me/96176717577?text="));
    assert!(url.contains("Location%3A%20Beirut"));
    assert!(url.contains("Total%3A%20%2416.50"));
}

#[test]
fn test_checkout_notices() {
    let router = routes();
    let mut widget = widget_with(MemorySlot::new());

    assert_eq!(
        router.dispatch(&mut widget, "checkout", ""),
        Outcome::Notice(CheckoutError::EmptyCart)
    );

    router.dispatch(&mut widget, "add", "Phone Holder");
    assert_eq!(
        router.dispatch(&mut widget, "checkout", ""),
        Outcome::Notice(CheckoutError::MissingLocation)
    );
}

#[test]
fn test_filtering() {
    let router = routes();
    let mut widget = widget_with(MemorySlot::new());

    let Outcome::Listing(visibility) = router.dispatch(&mut widget, "filter", "accessories") else {
        panic!("expected a listing");
    };
    assert!(!visibility.sections[0].visible);
    assert_eq!(visibility.sections[1].items, vec![true, true]);

    let Outcome::Listing(visibility) = router.dispatch(&mut widget, "search", "VENT") else {
        panic!("expected a listing");
    };
    assert_eq!(visibility.visible_count(), 1);
    assert_eq!(
        describe(&Outcome::Listing(visibility), &widget),
        "Accessories\n  Phone Holder $10.00 - Fits any vent"
    );

    router.dispatch(&mut widget, "filter", "all");
    let Outcome::Listing(visibility) = router.dispatch(&mut widget, "clear-search", "") else {
        panic!("expected a listing");
    };
    assert_eq!(visibility.visible_count(), 4);
}

#[test]
fn test_unknown_and_missing_targets() {
    let router = routes();
    let mut widget = widget_with(MemorySlot::new());
    router.dispatch(&mut widget, "add", "Glass Cleaner");

    assert_eq!(router.dispatch(&mut widget, "teleport", "x"), Outcome::Ignored);
    assert_eq!(router.dispatch(&mut widget, "remove", ""), Outcome::Ignored);
    assert_eq!(router.dispatch(&mut widget, "inc", ""), Outcome::Ignored);

    let Outcome::Cart(view) = router.dispatch(&mut widget, "inc", "no_such_item") else {
        panic!("expected a cart view");
    };
    assert_eq!(view.count, 1);
}

#[test]
fn test_panel() {
    let router = routes();
    let mut widget = widget_with(MemorySlot::new());

    assert_eq!(router.dispatch(&mut widget, "open", ""), Outcome::Panel(true));
    assert!(widget.is_cart_open());
    assert_eq!(router.dispatch(&mut widget, "close", ""), Outcome::Panel(false));
    assert!(!widget.is_cart_open());
}

#[test]
fn test_cart_survives_reload() {
    let dir = tempfile::tempdir().unwrap();
    let router = routes();

    {
        let mut widget = widget_with(FileSlot::new(dir.path()));
        router.dispatch(&mut widget, "add", "Car Shampoo");
        router.dispatch(&mut widget, "add", "Car Shampoo");
        router.dispatch(&mut widget, "filter", "cleaning");
    }

    let widget = widget_with(FileSlot::new(dir.path()));
    let view = widget.view();

    assert_eq!(view.count, 2);
    assert_eq!(view.total, "$24.00");
    assert_eq!(widget.filter().active_category(), "all");
}

#[test]
fn test_corrupt_slot_loads_empty() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("drive_drip_cart.json"), "{{{").unwrap();

    let widget = widget_with(FileSlot::new(dir.path()));

    assert_eq!(widget.view().count, 0);
}

#[test]
fn test_every_action_is_routed() {
    let router = routes::<MemorySlot>();
    let mut actions: Vec<_> = router.actions().collect();
    actions.sort_unstable();

    assert_eq!(
        actions,
        vec![
            "add",
            "checkout",
            "clear",
            "clear-search",
            "close",
            "dec",
            "filter",
            "inc",
            "location",
            "open",
            "remove",
            "search"
        ]
    );
}
