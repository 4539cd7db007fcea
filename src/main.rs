use checkout_core::application::checkout::CheckoutEngine;
use checkout_core::domain::ports::{CouponCatalogBox, EmiCatalogBox};
use checkout_core::infrastructure::in_memory::{InMemoryCouponCatalog, InMemoryEmiCatalog};
use checkout_core::interfaces::csv::offer_writer::OfferWriter;
use checkout_core::interfaces::csv::quote_writer::QuoteWriter;
use checkout_core::interfaces::json::catalog_reader;
use chrono::{DateTime, Utc};
use clap::Parser;
use miette::{IntoDiagnostic, Result};
use std::fs::File;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Cart snapshot JSON file
    cart: PathBuf,

    /// Coupon catalog JSON file
    #[arg(long)]
    coupons: PathBuf,

    /// EMI option catalog JSON file. When given, quotes are printed after
    /// the ranked offers.
    #[arg(long)]
    emi: Option<PathBuf>,

    /// Evaluation instant (RFC 3339). Defaults to the current time; the
    /// core itself never reads the clock.
    #[arg(long)]
    now: Option<DateTime<Utc>>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let now = cli.now.unwrap_or_else(Utc::now);

    let cart_file = File::open(&cli.cart).into_diagnostic()?;
    let cart = catalog_reader::read_cart(cart_file).into_diagnostic()?;

    let coupons_file = File::open(&cli.coupons).into_diagnostic()?;
    let coupons = catalog_reader::read_coupons(coupons_file).into_diagnostic()?;

    let emi_options = match &cli.emi {
        Some(path) => {
            let file = File::open(path).into_diagnostic()?;
            catalog_reader::read_emi_options(file).into_diagnostic()?
        }
        None => Vec::new(),
    };

    let coupon_catalog: CouponCatalogBox = Box::new(InMemoryCouponCatalog::with_coupons(coupons));
    let emi_catalog: EmiCatalogBox = Box::new(InMemoryEmiCatalog::with_options(emi_options));
    let engine = CheckoutEngine::new(coupon_catalog, emi_catalog);

    let offers = engine.available_offers(&cart, now).await.into_diagnostic()?;
    let stdout = io::stdout();
    let mut offer_writer = OfferWriter::new(stdout.lock());
    offer_writer.write_offers(&offers).into_diagnostic()?;
    drop(offer_writer);

    if cli.emi.is_some() {
        let quotes = engine.emi_quotes(cart.subtotal).await.into_diagnostic()?;
        let mut quote_writer = QuoteWriter::new(io::stdout().lock());
        quote_writer.write_quotes(&quotes).into_diagnostic()?;
    }

    Ok(())
}
