use std::fmt;

use crate::{store::Cart, utils::format_money};

pub const EMPTY_CART_NOTICE: &str = "Your cart is empty.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartRow {
    pub id: String,
    pub name: String,
    pub unit_price: String,
    pub qty: u32,
    pub line_total: String,
}

/// Cart panel contents, built fresh from the cart on every call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartView {
    pub rows: Vec<CartRow>,
    pub count: u64,
    pub total: String,
}

pub fn render(cart: &Cart, currency: &str) -> CartView {
    let rows = cart
        .entries()
        .map(|(id, entry)| CartRow {
            id: id.to_string(),
            name: entry.name.clone(),
            unit_price: format_money(entry.price, currency),
            qty: entry.qty,
            line_total: format_money(entry.line_total(), currency),
        })
        .collect();

    CartView {
        rows,
        count: cart.count(),
        total: format_money(cart.total(), currency),
    }
}

impl fmt::Display for CartView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.rows.is_empty() {
            writeln!(f, "{EMPTY_CART_NOTICE}")?;
        }

        for row in &self.rows {
            writeln!(f, "{} [{}]", row.name, row.id)?;
            writeln!(f, "  {} each", row.unit_price)?;
            writeln!(f, "  x{}  {}", row.qty, row.line_total)?;
        }

        writeln!(f, "Items: {}", self.count)?;
        write!(f, "Total: {}", self.total)
    }
}
