//! Placed orders, their price breakdown and delivery progress.

use super::cart::{CartId, LineItem};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders, displayed as `ORD-000001`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrderId(pub u32);

impl From<u32> for OrderId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ORD-{:06}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    #[default]
    Card,
    PayPal,
    ApplePay,
    CashOnDelivery,
}

impl PaymentMethod {
    pub fn label(&self) -> &'static str {
        match self {
            PaymentMethod::Card => "Credit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::ApplePay => "Apple Pay",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

/// Delivery progress. Ordered: a stage only ever moves forward.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum DeliveryStage {
    #[default]
    Accepted,
    Cooking,
    OnTheWay,
    Delivered,
}

impl DeliveryStage {
    pub const ALL: [DeliveryStage; 4] = [
        DeliveryStage::Accepted,
        DeliveryStage::Cooking,
        DeliveryStage::OnTheWay,
        DeliveryStage::Delivered,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn label(self) -> &'static str {
        match self {
            DeliveryStage::Accepted => "Order Accepted",
            DeliveryStage::Cooking => "Cooking Food",
            DeliveryStage::OnTheWay => "Food's on the Way",
            DeliveryStage::Delivered => "Delivered to you",
        }
    }

    /// The following stage; `Delivered` saturates.
    pub fn next(self) -> DeliveryStage {
        Self::ALL
            .get(self.index() + 1)
            .copied()
            .unwrap_or(DeliveryStage::Delivered)
    }

    pub fn is_terminal(self) -> bool {
        self == DeliveryStage::Delivered
    }
}

impl Display for DeliveryStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Price breakdown at checkout. `total = subtotal + delivery_fee + service_fee - discount`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutQuote {
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub service_fee: f64,
    pub discount: f64,
    pub total: f64,
}

/// Payload for placing an order from a cart.
#[derive(Debug, Clone)]
pub struct OrderCreate {
    pub cart_id: CartId,
    pub payment: PaymentMethod,
    pub address: String,
    pub instructions: Option<String>,
    pub promo_code: Option<String>,
}

impl OrderCreate {
    pub fn new(cart_id: CartId, address: impl Into<String>) -> Self {
        Self {
            cart_id,
            payment: PaymentMethod::default(),
            address: address.into(),
            instructions: None,
            promo_code: None,
        }
    }

    pub fn with_payment(mut self, payment: PaymentMethod) -> Self {
        self.payment = payment;
        self
    }

    pub fn with_promo_code(mut self, code: impl Into<String>) -> Self {
        self.promo_code = Some(code.into());
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = Some(instructions.into());
        self
    }
}

/// A placed order.
///
/// # Actor Framework
/// Implements [`ActorEntity`](crate::framework::ActorEntity); creating one runs checkout
/// against the cart actor (see [`order_actor`](crate::order_actor)).
#[derive(Debug, Clone, PartialEq)]
pub struct Order {
    pub id: OrderId,
    pub cart_id: CartId,
    /// Filled by checkout; empty until then.
    pub lines: Vec<LineItem>,
    pub quote: Option<CheckoutQuote>,
    pub payment: PaymentMethod,
    pub address: String,
    pub instructions: Option<String>,
    pub promo_code: Option<String>,
    pub stage: DeliveryStage,
    pub placed_at: DateTime<Utc>,
}

impl Order {
    /// An order that has not been checked out yet.
    pub fn pending(id: OrderId, params: OrderCreate) -> Self {
        Self {
            id,
            cart_id: params.cart_id,
            lines: Vec::new(),
            quote: None,
            payment: params.payment,
            address: params.address,
            instructions: params.instructions,
            promo_code: params.promo_code,
            stage: DeliveryStage::Accepted,
            placed_at: Utc::now(),
        }
    }

    pub fn total(&self) -> f64 {
        self.quote.map(|q| q.total).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_id_display() {
        assert_eq!(OrderId(1).to_string(), "ORD-000001");
        assert_eq!(OrderId(123456).to_string(), "ORD-123456");
    }

    #[test]
    fn stages_advance_and_saturate() {
        let mut stage = DeliveryStage::Accepted;
        let mut seen = vec![stage];
        for _ in 0..5 {
            stage = stage.next();
            seen.push(stage);
        }
        assert_eq!(
            &seen[..4],
            &[
                DeliveryStage::Accepted,
                DeliveryStage::Cooking,
                DeliveryStage::OnTheWay,
                DeliveryStage::Delivered
            ]
        );
        assert!(seen[4..].iter().all(|s| *s == DeliveryStage::Delivered));
        assert!(DeliveryStage::Accepted < DeliveryStage::Delivered);
        assert_eq!(DeliveryStage::OnTheWay.label(), "Food's on the Way");
    }
}
