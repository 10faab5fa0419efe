use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

pub const FALLBACK_ITEM_NAME: &str = "Item";

static LEADING_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?").expect("number pattern")
});

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Item {
    /// Empty when the card has none; such cards only show under `all`.
    #[serde(default, deserialize_with = "lenient_text")]
    pub category: String,
    #[serde(default = "fallback_name", deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "lenient_price")]
    pub price: f64,
}

#[derive(Deserialize, Debug, Clone)]
pub struct Section {
    #[serde(default)]
    pub title: String,
    pub items: Vec<Item>,
}

#[derive(Deserialize, Debug, Clone, Default)]
pub struct Catalog {
    pub sections: Vec<Section>,
}

impl Catalog {
    pub fn items(&self) -> impl Iterator<Item = &Item> {
        self.sections.iter().flat_map(|section| section.items.iter())
    }

    /// Chip row: `all` first, then each category in first-appearance order.
    pub fn categories(&self) -> Vec<String> {
        let mut categories = vec![crate::ALL_CATEGORIES.to_string()];

        for item in self.items() {
            if !item.category.is_empty() && !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }

        categories
    }

    pub fn find(&self, name: &str) -> Option<&Item> {
        let name = name.trim().to_lowercase();

        self.items().find(|item| item.name.to_lowercase() == name)
    }
}

fn fallback_name() -> String {
    FALLBACK_ITEM_NAME.to_string()
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        _ => String::new(),
    })
}

fn lenient_name<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let name = lenient_text(deserializer)?;

    Ok(if name.trim().is_empty() { fallback_name() } else { name })
}

/// Reads the leading number of a string, so `"12abc"` is 12 and `"abc"` is 0.
pub fn parse_leading_number(s: &str) -> f64 {
    LEADING_NUMBER
        .find(s.trim_start())
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0.0)
}

// Prices come from hand-edited card metadata, so anything that is not a number
// or a numeric string counts as free rather than failing the whole catalog.
fn lenient_price<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let price = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => parse_leading_number(&s),
        _ => 0.0,
    };

    Ok(if price.is_finite() { price.max(0.0) } else { 0.0 })
}

#[cfg(test)]
mod tests {
    use super::parse_leading_number;
    use crate::parse_catalog;

    const SAMPLE: &str = r#"{
        "sections": [
            {
                "title": "Cleaning",
                "items": [
                    { "category": "cleaning", "name": "Car Shampoo", "description": "Foam wash", "price": "12.00" },
                    { "category": "cleaning", "name": "Microfiber Cloth", "price": "free" }
                ]
            },
            {
                "title": "Accessories",
                "items": [
                    { "category": "accessories", "name": "Air Freshener", "description": "Vanilla", "price": 4.5 },
                    { "category": "cleaning", "name": "Glass Cleaner", "description": "Streak free", "price": -3 }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_price_coercion() {
        let catalog = parse_catalog(SAMPLE).unwrap();
        let prices: Vec<f64> = catalog.items().map(|item| item.price).collect();

        assert_eq!(prices, vec![12.0, 0.0, 4.5, 0.0]);
    }

    #[test]
    fn test_categories() {
        let catalog = parse_catalog(SAMPLE).unwrap();

        assert_eq!(catalog.categories(), vec!["all", "cleaning", "accessories"]);
    }

    #[test]
    fn test_find() {
        let catalog = parse_catalog(SAMPLE).unwrap();

        assert_eq!(catalog.find("  air freshener ").unwrap().price, 4.5);
        assert!(catalog.find("Tire Shine").is_none());
    }

    #[test]
    fn test_missing_fields() {
        let catalog = parse_catalog(
            r#"{ "sections": [ { "title": "Misc", "items": [
                { "category": "cleaning", "name": "Car Shampoo", "price": 12 },
                { "name": "Sponge", "price": 2 },
                { "category": "cleaning", "price": 3 },
                { "category": null, "name": "  ", "price": 1 }
            ] } ] }"#,
        )
        .unwrap();

        let names: Vec<&str> = catalog.items().map(|item| item.name.as_str()).collect();
        assert_eq!(names, vec!["Car Shampoo", "Sponge", "Item", "Item"]);

        assert_eq!(catalog.find("Sponge").unwrap().category, "");
        assert_eq!(catalog.categories(), vec!["all", "cleaning"]);
    }

    #[test]
    fn test_leading_number() {
        assert_eq!(parse_leading_number("12abc"), 12.0);
        assert_eq!(parse_leading_number(" 4.5 USD"), 4.5);
        assert_eq!(parse_leading_number(".5"), 0.5);
        assert_eq!(parse_leading_number("1e2x"), 100.0);
        assert_eq!(parse_leading_number("abc"), 0.0);
        assert_eq!(parse_leading_number(""), 0.0);
    }

    #[test]
    fn test_missing_description() {
        let catalog = parse_catalog(SAMPLE).unwrap();

        assert_eq!(catalog.find("Microfiber Cloth").unwrap().description, "");
    }
}
