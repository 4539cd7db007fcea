use crate::domain::cart::LineItem;
use crate::domain::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The closed set of discount kinds, with the value payload inside each
/// variant. `evaluate` matches exhaustively, so adding a kind does not
/// compile until every call site handles it.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiscountKind {
    Percentage {
        percent: u32,
        #[serde(default)]
        max_discount: Option<Money>,
    },
    Fixed {
        amount: Money,
    },
    FreeShipping,
    BuyXGetY {
        buy: u32,
        get: u32,
    },
}

impl DiscountKind {
    /// Stable lowercase label used in tabular output.
    pub fn label(&self) -> &'static str {
        match self {
            DiscountKind::Percentage { .. } => "percentage",
            DiscountKind::Fixed { .. } => "fixed",
            DiscountKind::FreeShipping => "free_shipping",
            DiscountKind::BuyXGetY { .. } => "buy_x_get_y",
        }
    }
}

/// Optional product/category scoping for a coupon.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone, Default)]
pub struct CouponScope {
    #[serde(default)]
    pub product_ids: Vec<String>,
    #[serde(default)]
    pub category_ids: Vec<String>,
}

impl CouponScope {
    /// A scope with both lists empty constrains nothing.
    pub fn is_empty(&self) -> bool {
        self.product_ids.is_empty() && self.category_ids.is_empty()
    }

    pub fn matches(&self, item: &LineItem) -> bool {
        self.product_ids.iter().any(|id| *id == item.product_id)
            || self.category_ids.iter().any(|id| *id == item.category_id)
    }
}

/// A coupon record as fetched read-only from the backend catalog.
///
/// `usage_count` is only ever incremented by the external order-placement
/// system after an order is confirmed; the core reads it but never writes.
#[derive(Debug, Deserialize, Serialize, PartialEq, Clone)]
pub struct Coupon {
    pub code: String,
    pub kind: DiscountKind,
    pub valid_from: DateTime<Utc>,
    pub valid_until: DateTime<Utc>,
    #[serde(default)]
    pub usage_limit: Option<u32>,
    #[serde(default)]
    pub usage_count: u32,
    #[serde(default)]
    pub min_order_value: Money,
    #[serde(default)]
    pub stackable: bool,
    #[serde(default)]
    pub scope: Option<CouponScope>,
    #[serde(default)]
    pub terms: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coupon_deserialization() {
        let json = r#"{
            "code": "SAVE10",
            "kind": {"type": "percentage", "percent": 10, "max_discount": 500},
            "valid_from": "2026-01-01T00:00:00Z",
            "valid_until": "2026-12-31T23:59:59Z",
            "usage_limit": 100,
            "usage_count": 3,
            "min_order_value": 1000,
            "stackable": true
        }"#;
        let coupon: Coupon = serde_json::from_str(json).expect("Failed to deserialize coupon");
        assert_eq!(coupon.code, "SAVE10");
        assert_eq!(
            coupon.kind,
            DiscountKind::Percentage {
                percent: 10,
                max_discount: Some(Money::new(500)),
            }
        );
        assert!(coupon.stackable);
        assert!(coupon.scope.is_none());
    }

    #[test]
    fn test_unit_variant_kind_deserialization() {
        let json = r#"{
            "code": "FREESHIP",
            "kind": {"type": "free_shipping"},
            "valid_from": "2026-01-01T00:00:00Z",
            "valid_until": "2026-12-31T23:59:59Z"
        }"#;
        let coupon: Coupon = serde_json::from_str(json).unwrap();
        assert_eq!(coupon.kind, DiscountKind::FreeShipping);
        // Optional fields fall back to their defaults
        assert_eq!(coupon.usage_count, 0);
        assert_eq!(coupon.min_order_value, Money::ZERO);
        assert!(!coupon.stackable);
    }

    #[test]
    fn test_scope_matching() {
        let scope = CouponScope {
            product_ids: vec!["p1".to_string()],
            category_ids: vec!["shoes".to_string()],
        };
        let by_product = LineItem {
            product_id: "p1".to_string(),
            category_id: "bags".to_string(),
            unit_price: Money::new(100),
            quantity: 1,
        };
        let by_category = LineItem {
            product_id: "p9".to_string(),
            category_id: "shoes".to_string(),
            unit_price: Money::new(100),
            quantity: 1,
        };
        let neither = LineItem {
            product_id: "p9".to_string(),
            category_id: "bags".to_string(),
            unit_price: Money::new(100),
            quantity: 1,
        };
        assert!(scope.matches(&by_product));
        assert!(scope.matches(&by_category));
        assert!(!scope.matches(&neither));
    }
}
