use indexmap::{IndexMap, map::Entry as MapEntry};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    storage::Slot,
    utils::{clamp_price, coerce_number, item_id},
};

/// One cart line. `qty` is at least 1 for as long as the entry exists.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(from = "RawEntry")]
pub struct Entry {
    pub name: String,
    pub price: f64,
    pub qty: u32,
}

impl Entry {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.qty)
    }
}

// Slot contents may have been edited by hand, so every field is read loosely.
#[derive(Deserialize)]
struct RawEntry {
    #[serde(default)]
    name: Value,
    #[serde(default)]
    price: Value,
    #[serde(default)]
    qty: Value,
}

impl From<RawEntry> for Entry {
    fn from(raw: RawEntry) -> Self {
        let name = match raw.name {
            Value::String(s) => s,
            _ => String::new(),
        };

        let qty = coerce_number(&raw.qty);

        Self {
            name,
            price: clamp_price(coerce_number(&raw.price)),
            qty: if qty >= 1.0 { qty.floor() as u32 } else { 0 },
        }
    }
}

/// Identifier to entry, iterated in insertion order.
#[derive(Serialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct Cart {
    entries: IndexMap<String, Entry>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses slot contents. Entries that cannot be read, or whose quantity
    /// is not positive, are dropped; only invalid JSON is an error.
    pub fn from_json(data: &str) -> Result<Self, serde_json::Error> {
        let raw: Option<IndexMap<String, Value>> = serde_json::from_str(data)?;

        let mut entries = IndexMap::new();
        for (id, value) in raw.unwrap_or_default() {
            match Entry::deserialize(value) {
                Ok(entry) if entry.qty > 0 => {
                    entries.insert(id, entry);
                }
                Ok(_) => debug!("Dropping empty cart entry {id}"),
                Err(e) => debug!("Dropping unreadable cart entry {id}: {e}"),
            }
        }

        Ok(Self { entries })
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// First add of an identifier fixes its price; later adds only bump quantity.
    pub fn add_item(&mut self, name: &str, price: f64) -> String {
        let id = item_id(name);

        match self.entries.entry(id.clone()) {
            MapEntry::Vacant(vacant) => {
                vacant.insert(Entry {
                    name: name.to_string(),
                    price: clamp_price(price),
                    qty: 1,
                });
            }
            MapEntry::Occupied(mut occupied) => {
                let entry = occupied.get_mut();
                entry.qty = entry.qty.saturating_add(1);
            }
        }

        id
    }

    pub fn remove_item(&mut self, id: &str) -> bool {
        self.entries.shift_remove(id).is_some()
    }

    pub fn increment_item(&mut self, id: &str) -> bool {
        match self.entries.get_mut(id) {
            Some(entry) => {
                entry.qty = entry.qty.saturating_add(1);
                true
            }
            None => false,
        }
    }

    pub fn decrement_item(&mut self, id: &str) -> bool {
        let Some(entry) = self.entries.get_mut(id) else {
            return false;
        };

        if entry.qty <= 1 {
            self.entries.shift_remove(id);
        } else {
            entry.qty -= 1;
        }

        true
    }

    pub fn clear(&mut self) -> bool {
        let changed = !self.entries.is_empty();
        self.entries.clear();
        changed
    }

    pub fn get(&self, id: &str) -> Option<&Entry> {
        self.entries.get(id)
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn count(&self) -> u64 {
        self.entries.values().map(|entry| u64::from(entry.qty)).sum()
    }

    pub fn total(&self) -> f64 {
        self.entries.values().map(Entry::line_total).sum()
    }
}

/// The cart plus the slot it lives in. Every mutation is written back
/// before returning.
#[derive(Debug)]
pub struct CartStore<S> {
    cart: Cart,
    slot: S,
    key: String,
}

impl<S: Slot> CartStore<S> {
    pub fn load(slot: S, key: &str) -> Self {
        let cart = match slot.read(key) {
            Ok(Some(data)) => Cart::from_json(&data).unwrap_or_else(|e| {
                warn!("Malformed cart in slot {key}, starting empty: {e}");
                Cart::new()
            }),
            Ok(None) => {
                info!("No saved cart in slot {key}");
                Cart::new()
            }
            Err(e) => {
                warn!("Failed to read cart slot {key}, starting empty: {e}");
                Cart::new()
            }
        };

        info!("Loaded cart: {} entries, {} items", cart.len(), cart.count());

        Self {
            cart,
            slot,
            key: key.to_string(),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    pub fn add_item(&mut self, name: &str, price: f64) -> String {
        let id = self.cart.add_item(name, price);
        self.save();
        id
    }

    pub fn remove_item(&mut self, id: &str) -> bool {
        let changed = self.cart.remove_item(id);
        self.save();
        changed
    }

    pub fn increment_item(&mut self, id: &str) -> bool {
        let changed = self.cart.increment_item(id);
        self.save();
        changed
    }

    pub fn decrement_item(&mut self, id: &str) -> bool {
        let changed = self.cart.decrement_item(id);
        self.save();
        changed
    }

    pub fn clear(&mut self) -> bool {
        let changed = self.cart.clear();
        self.save();
        changed
    }

    pub fn count(&self) -> u64 {
        self.cart.count()
    }

    pub fn total(&self) -> f64 {
        self.cart.total()
    }

    /// A failed write leaves the in-memory cart authoritative.
    pub fn save(&mut self) {
        let data = match self.cart.to_json() {
            Ok(data) => data,
            Err(e) => {
                warn!("Failed to serialize cart: {e}");
                return;
            }
        };

        if let Err(e) = self.slot.write(&self.key, &data) {
            warn!("Failed to save cart to slot {}: {e}", self.key);
        }
    }
}
