use crate::domain::coupon::Coupon;
use crate::domain::emi::EmiOption;
use crate::domain::ports::{CouponCatalog, EmiCatalog};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory coupon catalog, keyed by coupon code.
///
/// Uses `Arc<RwLock<HashMap<String, Coupon>>>` to allow shared concurrent
/// access. This is what the CLI and tests use; a deployment would back the
/// same port with a client for the catalog service.
#[derive(Default, Clone)]
pub struct InMemoryCouponCatalog {
    coupons: Arc<RwLock<HashMap<String, Coupon>>>,
}

impl InMemoryCouponCatalog {
    /// Creates a new, empty in-memory catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-populated with the given coupons.
    pub fn with_coupons(coupons: Vec<Coupon>) -> Self {
        let map = coupons
            .into_iter()
            .map(|coupon| (coupon.code.clone(), coupon))
            .collect();
        Self {
            coupons: Arc::new(RwLock::new(map)),
        }
    }
}

#[async_trait]
impl CouponCatalog for InMemoryCouponCatalog {
    async fn all(&self) -> Result<Vec<Coupon>> {
        let coupons = self.coupons.read().await;
        Ok(coupons.values().cloned().collect())
    }

    async fn find(&self, code: &str) -> Result<Option<Coupon>> {
        let coupons = self.coupons.read().await;
        Ok(coupons.get(code).cloned())
    }

    async fn replace_all(&self, fresh: Vec<Coupon>) -> Result<()> {
        let mut coupons = self.coupons.write().await;
        coupons.clear();
        coupons.extend(
            fresh
                .into_iter()
                .map(|coupon| (coupon.code.clone(), coupon)),
        );
        Ok(())
    }
}

/// A thread-safe in-memory EMI option catalog.
#[derive(Default, Clone)]
pub struct InMemoryEmiCatalog {
    options: Arc<RwLock<Vec<EmiOption>>>,
}

impl InMemoryEmiCatalog {
    /// Creates a new, empty in-memory catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-populated with the given options.
    pub fn with_options(options: Vec<EmiOption>) -> Self {
        Self {
            options: Arc::new(RwLock::new(options)),
        }
    }
}

#[async_trait]
impl EmiCatalog for InMemoryEmiCatalog {
    async fn all(&self) -> Result<Vec<EmiOption>> {
        let options = self.options.read().await;
        Ok(options.clone())
    }

    async fn replace_all(&self, fresh: Vec<EmiOption>) -> Result<()> {
        let mut options = self.options.write().await;
        *options = fresh;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::coupon::DiscountKind;
    use crate::domain::money::Money;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn coupon(code: &str) -> Coupon {
        Coupon {
            code: code.to_string(),
            kind: DiscountKind::Fixed {
                amount: Money::new(50),
            },
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

    #[tokio::test]
    async fn test_in_memory_coupon_catalog() {
        let catalog = InMemoryCouponCatalog::with_coupons(vec![coupon("SAVE10")]);

        let found = catalog.find("SAVE10").await.unwrap();
        assert_eq!(found.unwrap().code, "SAVE10");
        assert!(catalog.find("MISSING").await.unwrap().is_none());

        assert_eq!(catalog.all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_replace_all_drops_stale_coupons() {
        let catalog = InMemoryCouponCatalog::with_coupons(vec![coupon("OLD")]);
        catalog.replace_all(vec![coupon("NEW")]).await.unwrap();

        assert!(catalog.find("OLD").await.unwrap().is_none());
        assert!(catalog.find("NEW").await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_in_memory_emi_catalog() {
        let option = EmiOption {
            provider: "examplebank".to_string(),
            periods: 6,
            annual_rate_percent: dec!(12),
            processing_fee: Money::ZERO,
            minimum_amount: Money::new(5000),
            maximum_amount: Money::new(500000),
            is_available: true,
        };
        let catalog = InMemoryEmiCatalog::with_options(vec![option.clone()]);
        assert_eq!(catalog.all().await.unwrap(), vec![option]);

        catalog.replace_all(Vec::new()).await.unwrap();
        assert!(catalog.all().await.unwrap().is_empty());
    }
}
