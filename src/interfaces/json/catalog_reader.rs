use crate::domain::cart::CartSnapshot;
use crate::domain::coupon::Coupon;
use crate::domain::emi::EmiOption;
use crate::error::Result;
use std::io::Read;

/// Reads a coupon catalog from any JSON `Read` source (e.g., File, Stdin).
pub fn read_coupons<R: Read>(source: R) -> Result<Vec<Coupon>> {
    Ok(serde_json::from_reader(source)?)
}

/// Reads an EMI option catalog from a JSON source.
pub fn read_emi_options<R: Read>(source: R) -> Result<Vec<EmiOption>> {
    Ok(serde_json::from_reader(source)?)
}

/// Reads a single cart snapshot from a JSON source.
pub fn read_cart<R: Read>(source: R) -> Result<CartSnapshot> {
    Ok(serde_json::from_reader(source)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::money::Money;
    use crate::error::CheckoutError;

    #[test]
    fn test_read_coupons_valid_stream() {
        let data = r#"[
            {
                "code": "SAVE10",
                "kind": {"type": "percentage", "percent": 10},
                "valid_from": "2026-01-01T00:00:00Z",
                "valid_until": "2026-12-31T23:59:59Z"
            }
        ]"#;
        let coupons = read_coupons(data.as_bytes()).unwrap();
        assert_eq!(coupons.len(), 1);
        assert_eq!(coupons[0].code, "SAVE10");
    }

    #[test]
    fn test_read_coupons_malformed_input() {
        let data = r#"[{"code": "BROKEN"}]"#; // missing kind and window
        let result = read_coupons(data.as_bytes());
        assert!(matches!(result, Err(CheckoutError::Json(_))));
    }

    #[test]
    fn test_read_cart() {
        let data = r#"{"subtotal": 1000, "currency": "INR"}"#;
        let cart = read_cart(data.as_bytes()).unwrap();
        assert_eq!(cart.subtotal, Money::new(1000));
    }

    #[test]
    fn test_read_emi_options() {
        let data = r#"[
            {
                "provider": "examplebank",
                "periods": 6,
                "annual_rate_percent": "12.5",
                "minimum_amount": 5000,
                "maximum_amount": 500000
            }
        ]"#;
        let options = read_emi_options(data.as_bytes()).unwrap();
        assert_eq!(options.len(), 1);
        assert!(options[0].is_available);
        assert_eq!(options[0].processing_fee, Money::ZERO);
    }
}
