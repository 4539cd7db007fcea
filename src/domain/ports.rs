use crate::domain::coupon::Coupon;
use crate::domain::emi::EmiOption;
use crate::error::Result;
use async_trait::async_trait;

/// Read access to the coupon catalog owned by the backend system of record.
///
/// `replace_all` is the explicit refresh/invalidate operation: the checkout
/// collaborator swaps in a freshly fetched catalog, and nothing in the core
/// refreshes state on its own.
#[async_trait]
pub trait CouponCatalog: Send + Sync {
    async fn all(&self) -> Result<Vec<Coupon>>;
    async fn find(&self, code: &str) -> Result<Option<Coupon>>;
    async fn replace_all(&self, coupons: Vec<Coupon>) -> Result<()>;
}

/// Read access to the EMI option catalog.
#[async_trait]
pub trait EmiCatalog: Send + Sync {
    async fn all(&self) -> Result<Vec<EmiOption>>;
    async fn replace_all(&self, options: Vec<EmiOption>) -> Result<()>;
}

pub type CouponCatalogBox = Box<dyn CouponCatalog>;
pub type EmiCatalogBox = Box<dyn EmiCatalog>;
