//! Checkout arithmetic: fixed fees plus an optional promo discount.

use crate::catalog::round_cents;
use crate::model::CheckoutQuote;

/// Fees and the single promo code the storefront honours.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutPolicy {
    pub delivery_fee: f64,
    pub service_fee: f64,
    pub promo_code: String,
    /// Fraction of the subtotal taken off when the promo code matches.
    pub promo_rate: f64,
}

impl Default for CheckoutPolicy {
    fn default() -> Self {
        Self {
            delivery_fee: 2.99,
            service_fee: 1.50,
            promo_code: "SAVE10".to_string(),
            promo_rate: 0.10,
        }
    }
}

impl CheckoutPolicy {
    /// The code must match exactly, case included.
    pub fn promo_applies(&self, code: Option<&str>) -> bool {
        code.is_some_and(|c| c == self.promo_code)
    }

    pub fn quote(&self, subtotal: f64, promo_code: Option<&str>) -> CheckoutQuote {
        let discount = if self.promo_applies(promo_code) {
            round_cents(subtotal * self.promo_rate)
        } else {
            0.0
        };
        CheckoutQuote {
            subtotal,
            delivery_fee: self.delivery_fee,
            service_fee: self.service_fee,
            discount,
            total: round_cents(subtotal + self.delivery_fee + self.service_fee - discount),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quote_without_promo() {
        let quote = CheckoutPolicy::default().quote(43.96, None);
        assert_eq!(quote.discount, 0.0);
        assert_eq!(quote.total, 48.45);
    }

    #[test]
    fn save10_takes_ten_percent() {
        let policy = CheckoutPolicy::default();
        let quote = policy.quote(40.0, Some("SAVE10"));
        assert_eq!(quote.discount, 4.0);
        assert_eq!(quote.total, 40.49);

        assert_eq!(policy.quote(40.0, Some("save10")).discount, 0.0);
        assert_eq!(policy.quote(40.0, Some("SAVE20")).discount, 0.0);
    }
}
