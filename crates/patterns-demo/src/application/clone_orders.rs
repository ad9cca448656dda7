//! Order duplication walkthrough.
//!
//! Builds a prototype order, deep-duplicates it, and edits only the copy:
//! different payment method, higher delivery cost, doubled mouse quantity,
//! and an extra promo discount.  The outcome carries both orders so the
//! caller (and the tests) can confirm the original never moved.

use patterns_core::{Discount, LineItem, Order, PaymentMethod};

/// The prototype and its edited duplicate.
#[derive(Debug)]
pub struct WhatIfOutcome {
    pub original: Order,
    pub variant: Order,
}

/// Runs the duplication walkthrough.
pub fn run() -> WhatIfOutcome {
    let mut original = Order::new(500.0, PaymentMethod::Card);
    original.add_item(LineItem::new("Laptop", 250_000.0, 1));
    original.add_item(LineItem::new("Mouse", 5_000.0, 1));
    original.add_discount(Discount::new("WelcomeDiscount", 3_000.0));

    let mut variant = original.duplicate();
    variant.set_payment(PaymentMethod::Cash);
    variant.set_delivery_cost(800.0);
    if let Some(mouse) = variant.item_mut(1) {
        mouse.quantity = 2;
    }
    variant.add_discount(Discount::new("Promo", 2_000.0));

    WhatIfOutcome { original, variant }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_original_keeps_its_pre_duplication_state() {
        let outcome = run();

        // 500 + 250_000 + 5_000 - 3_000
        assert_eq!(outcome.original.total(), 252_500.0);
        assert_eq!(outcome.original.items().len(), 2);
        assert_eq!(outcome.original.items()[1].quantity, 1);
        assert_eq!(outcome.original.discounts().len(), 1);
        assert_eq!(outcome.original.payment(), PaymentMethod::Card);
    }

    #[test]
    fn test_variant_reflects_every_edit() {
        let outcome = run();

        // 800 + 250_000 + 10_000 - 3_000 - 2_000
        assert_eq!(outcome.variant.total(), 255_800.0);
        assert_eq!(outcome.variant.items()[1].quantity, 2);
        assert_eq!(outcome.variant.discounts().len(), 2);
        assert_eq!(outcome.variant.payment(), PaymentMethod::Cash);
    }

    #[test]
    fn test_variant_is_a_distinct_order() {
        let outcome = run();
        assert_ne!(outcome.original.id(), outcome.variant.id());
    }
}
