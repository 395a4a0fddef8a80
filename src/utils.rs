//! Utils

use clap::Parser;

/// Arguments for the cart demo
#[derive(Debug, Parser)]
pub struct DemoCartArgs {
    /// Cap the number of cart lines priced
    #[clap(short, long)]
    pub n: Option<usize>,

    /// Fixture set to use for the catalog & cart
    #[clap(short, long, default_value = "bakery")]
    pub fixture: String,
}
