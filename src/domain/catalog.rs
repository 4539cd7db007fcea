use crate::domain::cart::CartSnapshot;
use crate::domain::coupon::Coupon;
use crate::domain::discount::{DiscountResult, evaluate};
use crate::domain::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A coupon that currently applies to the cart, with its computed discount.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedOffer {
    pub coupon: Coupon,
    pub amount: Money,
    pub savings_percentage: f64,
}

/// Ranks a coupon catalog against a cart, best offer first.
///
/// Each coupon runs through the full eligibility evaluation with no
/// already-applied coupon, so the stacking check is deferred to application
/// time. Ordering: discount amount descending, ties broken by later
/// `valid_until` (offers that live longer surface first), then lexical code.
/// Recomputed fresh on every call; nothing is cached.
pub fn rank_eligible(
    coupons: &[Coupon],
    cart: &CartSnapshot,
    now: DateTime<Utc>,
) -> Vec<RankedOffer> {
    let mut offers: Vec<RankedOffer> = coupons
        .iter()
        .filter_map(|coupon| match evaluate(coupon, cart, now, None) {
            DiscountResult::Applied {
                amount,
                savings_percentage,
            } => Some(RankedOffer {
                coupon: coupon.clone(),
                amount,
                savings_percentage,
            }),
            DiscountResult::Ineligible { .. } => None,
        })
        .collect();

    offers.sort_by(|a, b| {
        b.amount
            .cmp(&a.amount)
            .then_with(|| b.coupon.valid_until.cmp(&a.coupon.valid_until))
            .then_with(|| a.coupon.code.cmp(&b.coupon.code))
    });
    offers
}
