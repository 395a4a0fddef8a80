//! Receipt
//!
//! An owned snapshot of a priced cart, plus a terminal renderer for the
//! demo. Once an order is placed the collaborator persists the snapshot, so
//! a historical order's prices never move with later catalog edits.

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use serde::{Deserialize, Serialize};
use tabled::{
    builder::Builder,
    grid::config::HorizontalLine,
    settings::{
        Alignment, Color, Style, Theme,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::{CartTotals, PricedCart},
    pricing::PricedLine,
};

/// Errors that can occur when writing a receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// IO error while writing the rendered receipt.
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Snapshot of a priced cart: lines and totals, nothing live.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    lines: Vec<PricedLine>,
    totals: CartTotals,
}

impl Receipt {
    /// Builds a receipt by copying a priced cart.
    #[must_use]
    pub fn from_priced_cart(cart: &PricedCart) -> Self {
        Self {
            lines: cart.lines.clone(),
            totals: cart.totals,
        }
    }

    /// The priced lines, unavailable ones included.
    #[must_use]
    pub fn lines(&self) -> &[PricedLine] {
        &self.lines
    }

    /// The aggregated totals.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        self.totals
    }

    /// Renders the receipt as a table followed by a totals block.
    ///
    /// # Errors
    ///
    /// Returns a [`ReceiptError::Io`] if writing to `out` fails.
    pub fn write_to(
        &self,
        mut out: impl io::Write,
        currency: &'static Currency,
    ) -> Result<(), ReceiptError> {
        let mut builder = Builder::default();

        builder.push_record(["", "Item", "Size", "Qty", "Unit Price", "Line Total"]);

        for (idx, line) in self.lines.iter().enumerate() {
            builder.push_record(line_record(idx, line, currency));
        }

        write_receipt_table(&mut out, builder)?;
        write_totals(&mut out, self.totals, currency)?;

        Ok(())
    }
}

impl From<PricedCart> for Receipt {
    fn from(cart: PricedCart) -> Self {
        Self {
            lines: cart.lines,
            totals: cart.totals,
        }
    }
}

fn line_record(idx: usize, line: &PricedLine, currency: &'static Currency) -> [String; 6] {
    if line.is_available() {
        [
            format!("#{:<3}", idx + 1),
            line.name.clone(),
            line.resolved_size.clone().unwrap_or_default(),
            line.quantity.to_string(),
            format_amount(line.unit_price, currency),
            format_amount(line.line_total, currency),
        ]
    } else {
        [
            format!("#{:<3}", idx + 1),
            line.product.to_string(),
            String::new(),
            line.quantity.to_string(),
            String::new(),
            "unavailable".to_string(),
        ]
    }
}

fn write_receipt_table(out: &mut impl io::Write, builder: Builder) -> Result<(), ReceiptError> {
    let mut table = builder.build();
    let mut theme = Theme::from(Style::modern_rounded());
    let separator = HorizontalLine::new(Some('─'), Some('┼'), Some('├'), Some('┤'));

    theme.remove_horizontal_lines();
    theme.insert_horizontal_line(1, separator);

    table.with(theme);
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(3..6), Alignment::right());

    writeln!(out, "\n{table}")?;

    Ok(())
}

fn write_totals(
    out: &mut impl io::Write,
    totals: CartTotals,
    currency: &'static Currency,
) -> Result<(), ReceiptError> {
    writeln!(out, " Subtotal:  {}", format_amount(totals.subtotal, currency))?;

    if totals.delivery_fee > Decimal::ZERO {
        writeln!(
            out,
            " Delivery:  {}",
            format_amount(totals.delivery_fee, currency)
        )?;
    }

    if totals.discount > Decimal::ZERO {
        writeln!(
            out,
            " Discount: -{}",
            format_amount(totals.discount, currency)
        )?;
    }

    writeln!(
        out,
        " \x1b[1mTotal:     {}\x1b[0m",
        format_amount(totals.total, currency)
    )?;

    Ok(())
}

fn format_amount(amount: Decimal, currency: &'static Currency) -> String {
    Money::from_decimal(amount, currency).to_string()
}
