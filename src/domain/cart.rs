use crate::domain::money::Money;
use serde::{Deserialize, Serialize};

/// One cart line as seen at checkout time.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct LineItem {
    pub product_id: String,
    pub category_id: String,
    pub unit_price: Money,
    pub quantity: u32,
}

/// An immutable snapshot of the cart for one evaluation call.
///
/// The checkout collaborator rebuilds this on every cart mutation and passes
/// it in fresh; nothing in the core holds onto it between calls.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct CartSnapshot {
    pub subtotal: Money,
    #[serde(default)]
    pub shipping_cost: Money,
    #[serde(default)]
    pub items: Vec<LineItem>,
    pub currency: String,
}
