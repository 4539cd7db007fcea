use crate::application::checkout::EmiQuote;
use crate::error::Result;
use std::io::Write;

/// Writes EMI quotes as CSV to any `Write` sink.
pub struct QuoteWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> QuoteWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Writes a header followed by one row per quote, then flushes.
    pub fn write_quotes(&mut self, quotes: &[EmiQuote]) -> Result<()> {
        self.writer.write_record([
            "provider",
            "periods",
            "payment",
            "total_interest",
            "total_amount",
        ])?;
        for quote in quotes {
            self.writer.write_record([
                quote.option.provider.as_str(),
                &quote.option.periods.to_string(),
                &quote.schedule.payment.minor_units().to_string(),
                &quote.schedule.total_interest.minor_units().to_string(),
                &quote.schedule.total_amount.minor_units().to_string(),
            ])?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
