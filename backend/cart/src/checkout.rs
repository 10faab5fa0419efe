use tracing::info;

use crate::{error::CheckoutError, store::Cart, utils::format_money};

/// Turns a cart into an order message for a fixed messaging recipient.
#[derive(Debug, Clone)]
pub struct Checkout {
    pub host: String,
    pub recipient: String,
    pub store_name: String,
    pub currency: String,
}

impl Checkout {
    pub fn build_order_message(&self, cart: &Cart, location: &str) -> Result<String, CheckoutError> {
        if cart.count() == 0 {
            return Err(CheckoutError::EmptyCart);
        }

        let location = location.trim();
        if location.is_empty() {
            return Err(CheckoutError::MissingLocation);
        }

        let mut message = format!(
            "Hello,I want to make an order from {}\n\nLocation: {location}\n\nOrder:\n",
            self.store_name
        );

        for (_, entry) in cart.entries() {
            let name = if entry.name.is_empty() { "Item" } else { entry.name.as_str() };

            message.push_str(&format!(
                "• {name} x{} = {}\n",
                entry.qty,
                format_money(entry.line_total(), &self.currency)
            ));
        }

        message.push_str(&format!(
            "\n Total: {}\n",
            format_money(cart.total(), &self.currency)
        ));

        Ok(message)
    }

    pub fn deep_link(&self, message: &str) -> String {
        format!(
            "https://{}/{}?text={}",
            self.host,
            self.recipient,
            urlencoding::encode(message)
        )
    }

    pub fn order_url(&self, cart: &Cart, location: &str) -> Result<String, CheckoutError> {
        let message = self.build_order_message(cart, location)?;

        info!(
            "Order ready: {} items, {}",
            cart.count(),
            format_money(cart.total(), &self.currency)
        );

        Ok(self.deep_link(&message))
    }
}
