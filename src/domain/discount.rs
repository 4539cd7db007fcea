use crate::domain::cart::CartSnapshot;
use crate::domain::coupon::{Coupon, DiscountKind};
use crate::domain::money::Money;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Why a well-formed coupon did not apply.
///
/// These are business outcomes, not errors; user-facing copy stays with the
/// caller, the tag is the contract.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum IneligibleReason {
    /// The validity window has not opened yet.
    NotStarted,
    /// The validity window has closed.
    Expired,
    /// The coupon has reached its redemption limit.
    UsageLimitExceeded,
    /// Cart subtotal is below the coupon's minimum order value.
    MinOrderNotMet { required: Money, current: Money },
    /// A scoped coupon matched no line item in the cart.
    ProductNotEligible,
    /// Another coupon is applied and one of the two is non-stackable.
    NotStackable,
    /// This exact coupon is already applied to the cart.
    AlreadyApplied,
}

impl fmt::Display for IneligibleReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IneligibleReason::NotStarted => write!(f, "coupon is not active yet"),
            IneligibleReason::Expired => write!(f, "coupon has expired"),
            IneligibleReason::UsageLimitExceeded => {
                write!(f, "coupon has reached its usage limit")
            }
            IneligibleReason::MinOrderNotMet { required, current } => write!(
                f,
                "order total {} is below the required minimum {}",
                current.minor_units(),
                required.minor_units()
            ),
            IneligibleReason::ProductNotEligible => {
                write!(f, "no item in the cart is eligible for this coupon")
            }
            IneligibleReason::NotStackable => {
                write!(f, "coupon cannot be combined with the one already applied")
            }
            IneligibleReason::AlreadyApplied => write!(f, "coupon is already applied"),
        }
    }
}

/// Outcome of evaluating one coupon against one cart snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DiscountResult {
    Applied {
        amount: Money,
        savings_percentage: f64,
    },
    Ineligible {
        reason: IneligibleReason,
    },
}

impl DiscountResult {
    pub fn is_applied(&self) -> bool {
        matches!(self, DiscountResult::Applied { .. })
    }

    pub fn amount(&self) -> Money {
        match self {
            DiscountResult::Applied { amount, .. } => *amount,
            DiscountResult::Ineligible { .. } => Money::ZERO,
        }
    }
}

/// Evaluates one coupon against one cart snapshot at one instant.
///
/// Pure function of its inputs: no clock reads, no counter mutation.
/// Checks run in a fixed order so each violation reports its own reason;
/// the first failed check wins. On success the discount amount is computed
/// per kind and clamped to the cart subtotal.
pub fn evaluate(
    coupon: &Coupon,
    cart: &CartSnapshot,
    now: DateTime<Utc>,
    already_applied: Option<&Coupon>,
) -> DiscountResult {
    // 1. Validity window, both bounds inclusive.
    if now < coupon.valid_from {
        return ineligible(IneligibleReason::NotStarted);
    }
    if now > coupon.valid_until {
        return ineligible(IneligibleReason::Expired);
    }

    // 2. Redemption budget.
    if let Some(limit) = coupon.usage_limit
        && coupon.usage_count >= limit
    {
        return ineligible(IneligibleReason::UsageLimitExceeded);
    }

    // 3. Minimum order value.
    if cart.subtotal < coupon.min_order_value {
        return ineligible(IneligibleReason::MinOrderNotMet {
            required: coupon.min_order_value,
            current: cart.subtotal,
        });
    }

    // 4. Product/category scoping.
    if let Some(scope) = &coupon.scope
        && !scope.is_empty()
        && !cart.items.iter().any(|item| scope.matches(item))
    {
        return ineligible(IneligibleReason::ProductNotEligible);
    }

    // 5. Stacking against a coupon that is already on the cart.
    if let Some(applied) = already_applied {
        if applied.code == coupon.code {
            return ineligible(IneligibleReason::AlreadyApplied);
        }
        if !applied.stackable || !coupon.stackable {
            return ineligible(IneligibleReason::NotStackable);
        }
    }

    let amount = match &coupon.kind {
        DiscountKind::Percentage {
            percent,
            max_discount,
        } => {
            let raw = cart.subtotal.percent(*percent);
            match max_discount {
                Some(cap) => raw.min(*cap),
                None => raw,
            }
        }
        DiscountKind::Fixed { amount } => (*amount).min(cart.subtotal),
        DiscountKind::FreeShipping => cart.shipping_cost,
        DiscountKind::BuyXGetY { .. } => cheapest_eligible_unit(coupon, cart),
    };

    // Invariant: a discount never exceeds what is owed and is never
    // negative, even when the snapshot carries negative money fields.
    let amount = amount.min(cart.subtotal).max(Money::ZERO);
    let savings_percentage = if cart.subtotal > Money::ZERO {
        amount.minor_units() as f64 / cart.subtotal.minor_units() as f64 * 100.0
    } else {
        0.0
    };

    DiscountResult::Applied {
        amount,
        savings_percentage,
    }
}

fn ineligible(reason: IneligibleReason) -> DiscountResult {
    DiscountResult::Ineligible { reason }
}

/// Unit price of the cheapest eligible line item, retailer-favorable.
///
/// Ties between equal lowest prices resolve to the first such item in cart
/// order: only a strictly cheaper price displaces the current pick.
fn cheapest_eligible_unit(coupon: &Coupon, cart: &CartSnapshot) -> Money {
    let mut cheapest: Option<Money> = None;
    for item in &cart.items {
        let in_scope = match &coupon.scope {
            Some(scope) if !scope.is_empty() => scope.matches(item),
            _ => true,
        };
        if in_scope && cheapest.is_none_or(|price| item.unit_price < price) {
            cheapest = Some(item.unit_price);
        }
    }
    cheapest.unwrap_or(Money::ZERO)
}
