use crate::domain::catalog::RankedOffer;
use crate::error::Result;
use std::io::Write;

/// Writes ranked offers as CSV to any `Write` sink (e.g., stdout).
pub struct OfferWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> OfferWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes a header followed by one row per offer, then flushes.
    pub fn write_offers(&mut self, offers: &[RankedOffer]) -> Result<()> {
        self.writer
            .write_record(["code", "kind", "amount", "savings_percentage"])?;
        for offer in offers {
            self.writer.write_record([
                offer.coupon.code.as_str(),
                offer.coupon.kind.label(),
                &offer.amount.minor_units().to_string(),
                &format!("{:.2}", offer.savings_percentage),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
