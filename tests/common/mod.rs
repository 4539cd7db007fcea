#![allow(dead_code)]

use checkout_core::domain::cart::{CartSnapshot, LineItem};
use checkout_core::domain::coupon::{Coupon, DiscountKind};
use checkout_core::domain::money::Money;
use chrono::{DateTime, TimeZone, Utc};
use std::io::Error;
use std::path::Path;

/// Mid-2026 instant inside every fixture coupon's validity window.
pub fn fixture_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 6, 15, 12, 0, 0).unwrap()
}

pub fn coupon(code: &str, kind: DiscountKind) -> Coupon {
    Coupon {
        code: code.to_string(),
        kind,
        valid_from: Utc.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap(),
        valid_until: Utc.with_ymd_and_hms(2026, 12, 31, 23, 59, 59).unwrap(),
        usage_limit: None,
        usage_count: 0,
        min_order_value: Money::ZERO,
        stackable: false,
        scope: None,
        terms: None,
    }
}

pub fn cart(subtotal: i64) -> CartSnapshot {
    CartSnapshot {
        subtotal: Money::new(subtotal),
        shipping_cost: Money::ZERO,
        items: Vec::new(),
        currency: "INR".to_string(),
    }
}

pub fn item(product: &str, category: &str, price: i64, quantity: u32) -> LineItem {
    LineItem {
        product_id: product.to_string(),
        category_id: category.to_string(),
        unit_price: Money::new(price),
        quantity,
    }
}

/// Writes a minimal cart JSON fixture for CLI runs.
pub fn write_cart_json(path: &Path, subtotal: i64, shipping_cost: i64) -> Result<(), Error> {
    let json = serde_json::json!({
        "subtotal": subtotal,
        "shipping_cost": shipping_cost,
        "currency": "INR",
        "items": [],
    });
    std::fs::write(path, serde_json::to_vec_pretty(&json)?)
}

/// Writes a single-coupon catalog JSON fixture for CLI runs.
pub fn write_percentage_coupon_json(path: &Path, code: &str, percent: u32) -> Result<(), Error> {
    let json = serde_json::json!([{
        "code": code,
        "kind": { "type": "percentage", "percent": percent },
        "valid_from": "2026-01-01T00:00:00Z",
        "valid_until": "2026-12-31T23:59:59Z",
    }]);
    std::fs::write(path, serde_json::to_vec_pretty(&json)?)
}
