use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static SEPARATORS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^a-z0-9]+").expect("separator pattern"));

pub fn item_id(name: &str) -> String {
    let lowered = name.to_lowercase();

    SEPARATORS
        .replace_all(&lowered, "_")
        .trim_matches('_')
        .to_string()
}

pub fn format_money(amount: f64, currency: &str) -> String {
    // adding 0.0 turns -0.0 into 0.0
    let amount = if amount.is_finite() { amount + 0.0 } else { 0.0 };

    format!("{currency}{amount:.2}")
}

/// Reads a number the way a loosely typed page would: numbers as-is, numeric
/// strings parsed, everything else 0.
pub fn coerce_number(value: &Value) -> f64 {
    let number = match value {
        Value::Number(n) => n.as_f64().unwrap_or(0.0),
        Value::String(s) => {
            let s = s.trim();
            if s.is_empty() { 0.0 } else { s.parse().unwrap_or(0.0) }
        }
        Value::Bool(b) => f64::from(u8::from(*b)),
        _ => 0.0,
    };

    if number.is_finite() { number } else { 0.0 }
}

pub fn clamp_price(price: f64) -> f64 {
    if price.is_finite() && price > 0.0 { price } else { 0.0 }
}
