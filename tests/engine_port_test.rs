mod common;

use checkout_core::application::checkout::CheckoutEngine;
use checkout_core::domain::coupon::DiscountKind;
use checkout_core::domain::money::Money;
use checkout_core::domain::ports::{CouponCatalog, CouponCatalogBox, EmiCatalogBox};
use checkout_core::infrastructure::in_memory::{InMemoryCouponCatalog, InMemoryEmiCatalog};

#[tokio::test]
async fn test_catalogs_as_trait_objects() {
    let coupon_catalog: CouponCatalogBox = Box::new(InMemoryCouponCatalog::with_coupons(vec![
        common::coupon(
            "SAVE10",
            DiscountKind::Percentage {
                percent: 10,
                max_discount: None,
            },
        ),
    ]));

    // Verify Send + Sync by moving the boxed port into a task
    let handle = tokio::spawn(async move {
        coupon_catalog.find("SAVE10").await.unwrap().unwrap()
    });
    let coupon = handle.await.unwrap();
    assert_eq!(coupon.code, "SAVE10");
}

#[tokio::test]
async fn test_engine_evaluates_independent_carts_concurrently() {
    let engine = std::sync::Arc::new(CheckoutEngine::new(
        Box::new(InMemoryCouponCatalog::with_coupons(vec![common::coupon(
            "SAVE10",
            DiscountKind::Percentage {
                percent: 10,
                max_discount: None,
            },
        )])) as CouponCatalogBox,
        Box::new(InMemoryEmiCatalog::new()) as EmiCatalogBox,
    ));

    let mut handles = Vec::new();
    for i in 1..=8u32 {
        let engine = engine.clone();
        handles.push(tokio::spawn(async move {
            let cart = common::cart(i as i64 * 1000);
            let offers = engine
                .available_offers(&cart, common::fixture_now())
                .await
                .unwrap();
            (i, offers)
        }));
    }

    for handle in handles {
        let (i, offers) = handle.await.unwrap();
        assert_eq!(offers.len(), 1);
        // 10% of each independent cart, no cross-talk between tasks
        assert_eq!(offers[0].amount, Money::new(i as i64 * 100));
    }
}
