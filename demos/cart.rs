//! Cart Demo
//!
//! Prices a fixture cart against a fixture catalog and prints the receipt.
//!
//! Use `-f` to load a fixture set by name
//! Use `-n` to cap the number of cart lines priced

use std::io;

use anyhow::Result;
use clap::Parser;
use rusty_money::iso;
use tartine::{
    cart::{CheckoutRules, price_cart},
    fixtures::Fixture,
    receipt::Receipt,
    utils::DemoCartArgs,
};

/// Cart Demo
pub fn main() -> Result<()> {
    let args = DemoCartArgs::parse();

    let fixture = Fixture::from_set(&args.fixture)?;
    let cart = fixture.cart(args.n)?;

    let priced = price_cart(&cart, fixture.catalog(), &CheckoutRules::default());

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    Receipt::from_priced_cart(&priced).write_to(&mut handle, iso::INR)?;

    Ok(())
}
