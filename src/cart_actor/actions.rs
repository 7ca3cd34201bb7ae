//! Custom actions for the Cart actor.
//!
//! Nearly everything a shopper does to a cart is an action on lines inside one cart
//! entity, so these carry the cart's whole behaviour. Each result carries the
//! [`CartSummary`] computed after the action ran.

use crate::model::{CartSummary, LineItem};

#[derive(Debug, Clone)]
pub enum CartAction {
    /// Merges into the line with the same id, or appends. Zero quantity is a no-op.
    AddItem(LineItem),
    /// No-op when the line is absent.
    RemoveItem(String),
    /// Zero or negative removes the line. Unknown ids are a no-op.
    UpdateQuantity { line_id: String, quantity: i64 },
    Clear,
    /// Subtracts the given lines' quantities, as read at checkout.
    Release(Vec<LineItem>),
    /// Read-only.
    Summary,
}

/// Results from CartActions - variants match 1:1 with CartAction
#[derive(Debug, Clone)]
pub enum CartActionResult {
    AddItem(CartSummary),
    RemoveItem(CartSummary),
    UpdateQuantity(CartSummary),
    Clear(CartSummary),
    Release(CartSummary),
    Summary(CartSummary),
}

impl CartActionResult {
    pub fn into_summary(self) -> CartSummary {
        match self {
            CartActionResult::AddItem(s)
            | CartActionResult::RemoveItem(s)
            | CartActionResult::UpdateQuantity(s)
            | CartActionResult::Clear(s)
            | CartActionResult::Release(s)
            | CartActionResult::Summary(s) => s,
        }
    }
}
