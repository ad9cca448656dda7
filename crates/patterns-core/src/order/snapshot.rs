//! Order aggregate with priced items, discounts, and deep duplication.

use std::fmt;

use uuid::Uuid;

/// Unique identifier for an order, derived from UUID v4.
pub type OrderId = Uuid;

/// How the order is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Card,
    Cash,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Card => write!(f, "CARD"),
            PaymentMethod::Cash => write!(f, "CASH"),
        }
    }
}

/// One priced position on the order.
#[derive(Debug, Clone, PartialEq)]
pub struct LineItem {
    pub name: String,
    pub unit_price: f64,
    pub quantity: u32,
}

impl LineItem {
    pub fn new(name: impl Into<String>, unit_price: f64, quantity: u32) -> Self {
        Self {
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Position total: unit price times quantity.
    pub fn total(&self) -> f64 {
        self.unit_price * f64::from(self.quantity)
    }

    /// Independent copy of this item.
    pub fn duplicate(&self) -> LineItem {
        LineItem {
            name: self.name.clone(),
            unit_price: self.unit_price,
            quantity: self.quantity,
        }
    }
}

impl fmt::Display for LineItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{} ({})", self.name, self.quantity, self.unit_price)
    }
}

/// Flat amount subtracted from the order total.
#[derive(Debug, Clone, PartialEq)]
pub struct Discount {
    pub name: String,
    pub amount: f64,
}

impl Discount {
    pub fn new(name: impl Into<String>, amount: f64) -> Self {
        Self {
            name: name.into(),
            amount,
        }
    }

    /// Independent copy of this discount.
    pub fn duplicate(&self) -> Discount {
        Discount {
            name: self.name.clone(),
            amount: self.amount,
        }
    }
}

impl fmt::Display for Discount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (-{})", self.name, self.amount)
    }
}

/// An order: line items plus discounts plus delivery, payable by card or cash.
///
/// The aggregate supports *deep duplication*: [`Order::duplicate`] copies
/// every nested item and discount, so the copy can be edited freely for
/// what-if pricing without disturbing the original.  The copy gets a fresh
/// [`OrderId`] because it represents a new candidate order, not the same one.
///
/// # Examples
///
/// ```rust
/// use patterns_core::{Discount, LineItem, Order, PaymentMethod};
///
/// let mut order = Order::new(500.0, PaymentMethod::Card);
/// order.add_item(LineItem::new("Laptop", 250_000.0, 1));
/// order.add_discount(Discount::new("Welcome", 3_000.0));
///
/// let mut variant = order.duplicate();
/// variant.set_delivery_cost(800.0);
/// assert_ne!(order.total(), variant.total());
/// assert_ne!(order.id(), variant.id());
/// ```
#[derive(Debug)]
pub struct Order {
    id: OrderId,
    items: Vec<LineItem>,
    discounts: Vec<Discount>,
    delivery_cost: f64,
    payment: PaymentMethod,
}

impl Order {
    /// Creates an empty order with a fresh id.
    pub fn new(delivery_cost: f64, payment: PaymentMethod) -> Self {
        Self {
            id: Uuid::new_v4(),
            items: Vec::new(),
            discounts: Vec::new(),
            delivery_cost,
            payment,
        }
    }

    pub fn id(&self) -> OrderId {
        self.id
    }

    pub fn payment(&self) -> PaymentMethod {
        self.payment
    }

    pub fn delivery_cost(&self) -> f64 {
        self.delivery_cost
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn discounts(&self) -> &[Discount] {
        &self.discounts
    }

    pub fn add_item(&mut self, item: LineItem) {
        self.items.push(item);
    }

    pub fn add_discount(&mut self, discount: Discount) {
        self.discounts.push(discount);
    }

    /// Mutable access to one line item, for quantity edits on a duplicate.
    pub fn item_mut(&mut self, index: usize) -> Option<&mut LineItem> {
        self.items.get_mut(index)
    }

    pub fn set_delivery_cost(&mut self, delivery_cost: f64) {
        self.delivery_cost = delivery_cost;
    }

    pub fn set_payment(&mut self, payment: PaymentMethod) {
        self.payment = payment;
    }

    /// Order total: delivery plus item totals minus discounts, floored at 0.
    pub fn total(&self) -> f64 {
        let items: f64 = self.items.iter().map(LineItem::total).sum();
        let discounts: f64 = self.discounts.iter().map(|d| d.amount).sum();
        (self.delivery_cost + items - discounts).max(0.0)
    }

    /// Deep copy: duplicates every nested item and discount and assigns a
    /// fresh id.  No mutable state is shared with the original.
    pub fn duplicate(&self) -> Order {
        Order {
            id: Uuid::new_v4(),
            items: self.items.iter().map(LineItem::duplicate).collect(),
            discounts: self.discounts.iter().map(Discount::duplicate).collect(),
            delivery_cost: self.delivery_cost,
            payment: self.payment,
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let items: Vec<String> = self.items.iter().map(ToString::to_string).collect();
        let discounts: Vec<String> = self.discounts.iter().map(ToString::to_string).collect();
        write!(
            f,
            "Order {} {{ items: [{}], discounts: [{}], delivery: {}, payment: {}, total: {} }}",
            self.id,
            items.join(", "),
            discounts.join(", "),
            self.delivery_cost,
            self.payment,
            self.total()
        )
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
