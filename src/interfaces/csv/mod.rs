pub mod offer_writer;
pub mod quote_writer;
