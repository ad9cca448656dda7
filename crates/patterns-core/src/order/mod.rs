//! Order snapshot domain: priced line items, flat discounts, and deep
//! duplication for independent what-if edits.
//!
//! Every entity defines its own `duplicate()` composing its fields' copies,
//! so a duplicated [`snapshot::Order`] shares no mutable state with the
//! original.  Mutating the copy's items, discounts, delivery cost, or
//! payment method leaves the original untouched.

pub mod snapshot;
