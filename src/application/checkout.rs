use crate::domain::cart::CartSnapshot;
use crate::domain::catalog::{RankedOffer, rank_eligible};
use crate::domain::coupon::Coupon;
use crate::domain::discount::{DiscountResult, evaluate};
use crate::domain::emi::{AmortizationSchedule, EmiOption};
use crate::domain::money::Money;
use crate::domain::ports::{CouponCatalogBox, EmiCatalogBox};
use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An eligible EMI option together with its computed schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmiQuote {
    pub option: EmiOption,
    pub schedule: AmortizationSchedule,
}

/// The checkout-time computation entry point.
///
/// `CheckoutEngine` owns the catalog ports and runs the pure domain
/// evaluators over their contents. It holds no cart or result state of its
/// own; every call recomputes from the snapshot it is given.
pub struct CheckoutEngine {
    coupon_catalog: CouponCatalogBox,
    emi_catalog: EmiCatalogBox,
}

impl CheckoutEngine {
    pub fn new(coupon_catalog: CouponCatalogBox, emi_catalog: EmiCatalogBox) -> Self {
        Self {
            coupon_catalog,
            emi_catalog,
        }
    }

    /// All currently eligible coupons for the cart, best offer first.
    pub async fn available_offers(
        &self,
        cart: &CartSnapshot,
        now: DateTime<Utc>,
    ) -> Result<Vec<RankedOffer>> {
        let coupons = self.coupon_catalog.all().await?;
        Ok(rank_eligible(&coupons, cart, now))
    }

    /// Evaluates the coupon with the given code against the cart.
    ///
    /// Returns `None` when the code is not in the catalog; an ineligible
    /// coupon is a `Some` carrying the reason, not an error.
    pub async fn apply_coupon(
        &self,
        code: &str,
        cart: &CartSnapshot,
        now: DateTime<Utc>,
        already_applied: Option<&Coupon>,
    ) -> Result<Option<DiscountResult>> {
        let found = self.coupon_catalog.find(code).await?;
        Ok(found.map(|coupon| evaluate(&coupon, cart, now, already_applied)))
    }

    /// Schedules for every EMI option eligible at this order amount,
    /// cheapest total cost first.
    pub async fn emi_quotes(&self, order_amount: Money) -> Result<Vec<EmiQuote>> {
        let options = self.emi_catalog.all().await?;
        let mut quotes = Vec::new();
        for option in options {
            if option.is_eligible(order_amount) {
                let schedule = option.quote(order_amount)?;
                quotes.push(EmiQuote { option, schedule });
            }
        }
        quotes.sort_by(|a, b| a.schedule.total_amount.cmp(&b.schedule.total_amount));
        Ok(quotes)
    }

    /// Swaps in a freshly fetched coupon catalog.
    pub async fn refresh_coupons(&self, coupons: Vec<Coupon>) -> Result<()> {
        self.coupon_catalog.replace_all(coupons).await
    }

    /// Swaps in a freshly fetched EMI option catalog.
    pub async fn refresh_emi_options(&self, options: Vec<EmiOption>) -> Result<()> {
        self.emi_catalog.replace_all(options).await
    }
}
