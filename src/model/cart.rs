//! The cart and its line items.
//!
//! [`Cart`] holds the pure collection logic (merge on add, remove on zero quantity,
//! derived totals). Persistence and message handling live in
//! [`cart_actor`](crate::cart_actor).

use crate::catalog::round_cents;
use crate::storage::CART_KEY;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for carts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartId(pub u32);

impl From<u32> for CartId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for CartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "cart_{}", self.0)
    }
}

/// A priced, quantified snapshot of one configured menu item.
///
/// Serialized in the storefront's storage format: the selected add-on names are stored
/// under `ingredients`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Derived from the item id, size and add-on set. See
    /// [`line_item_id`](crate::catalog::line_item_id).
    pub id: String,
    #[serde(default)]
    pub item_id: String,
    pub name: String,
    /// Resolved unit price.
    pub price: f64,
    pub image: String,
    pub restaurant: String,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(
        default,
        rename = "ingredients",
        skip_serializing_if = "Option::is_none"
    )]
    pub addons: Option<Vec<String>>,
}

impl LineItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Payload for opening a cart.
#[derive(Debug, Clone)]
pub struct CartCreate {
    /// Storage key the cart reads on open and writes after every mutation.
    pub storage_key: String,
}

impl Default for CartCreate {
    fn default() -> Self {
        Self {
            storage_key: CART_KEY.to_string(),
        }
    }
}

/// Cart contents plus the derived totals, as returned by every cart action.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartSummary {
    pub lines: Vec<LineItem>,
    pub subtotal: f64,
    pub total_items: u32,
}

impl CartSummary {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// The in-progress order.
///
/// # Actor Framework
/// Implements [`ActorEntity`](crate::framework::ActorEntity) in
/// [`cart_actor::entity`](crate::cart_actor::entity).
#[derive(Debug, Clone, PartialEq)]
pub struct Cart {
    pub id: CartId,
    pub storage_key: String,
    pub lines: Vec<LineItem>,
}

impl Cart {
    pub fn new(id: CartId, storage_key: impl Into<String>) -> Self {
        Self {
            id,
            storage_key: storage_key.into(),
            lines: Vec::new(),
        }
    }

    /// Merges into the line with the same id, or appends. A zero-quantity line is
    /// ignored. Returns whether the cart changed.
    pub fn add(&mut self, line: LineItem) -> bool {
        if line.quantity == 0 {
            return false;
        }
        match self.lines.iter_mut().find(|l| l.id == line.id) {
            Some(existing) => {
                let merged = existing.quantity.saturating_add(line.quantity);
                let changed = merged != existing.quantity;
                existing.quantity = merged;
                changed
            }
            None => {
                self.lines.push(line);
                true
            }
        }
    }

    /// Takes `taken` out of the cart: each line loses at most the quantity taken and
    /// is dropped when nothing is left. Lines added since `taken` was read stay.
    pub fn release(&mut self, taken: &[LineItem]) -> bool {
        let mut changed = false;
        for t in taken {
            if let Some(line) = self.lines.iter_mut().find(|l| l.id == t.id) {
                line.quantity = line.quantity.saturating_sub(t.quantity);
                changed = true;
            }
        }
        self.lines.retain(|l| l.quantity > 0);
        changed
    }

    /// Returns whether a line was removed.
    pub fn remove(&mut self, line_id: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| l.id != line_id);
        self.lines.len() != before
    }

    /// Sets the quantity of a line; zero or less removes it. Returns whether anything changed.
    pub fn set_quantity(&mut self, line_id: &str, quantity: i64) -> bool {
        if quantity <= 0 {
            return self.remove(line_id);
        }
        let quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
        match self.lines.iter_mut().find(|l| l.id == line_id) {
            Some(line) => {
                line.quantity = quantity;
                true
            }
            None => false,
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    pub fn subtotal(&self) -> f64 {
        round_cents(self.lines.iter().map(LineItem::line_total).sum())
    }

    pub fn total_items(&self) -> u32 {
        self.lines
            .iter()
            .fold(0u32, |total, l| total.saturating_add(l.quantity))
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn summary(&self) -> CartSummary {
        CartSummary {
            lines: self.lines.clone(),
            subtotal: self.subtotal(),
            total_items: self.total_items(),
        }
    }
}
