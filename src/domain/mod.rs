pub mod cart;
pub mod catalog;
pub mod coupon;
pub mod discount;
pub mod emi;
pub mod instrument;
pub mod money;
pub mod ports;
