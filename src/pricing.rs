//! Pricing
//!
//! Resolves one cart line against the catalog into plain, serializable
//! priced data. Pricing is total over its domain: catalog drift (missing
//! products, missing toppings, empty size lists) degrades to flagged or
//! zero-contribution results, never to an error or a NaN.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{
    catalog::{Cake, CatalogSource, Pricing},
    lines::{AccessoryRef, CartLine, ProductRef},
    sizes::resolve_size,
    toppings::topping_sum,
};

/// Why a line was excluded from totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Unavailable {
    /// The referenced product was not found (deleted or hidden after the
    /// line was added).
    MissingProduct,

    /// A size-based cake had no size entries to price against.
    NoPrices,
}

/// A cart line annotated with its resolved prices.
///
/// Fully owned data with no references into the catalog, so a placed order
/// can snapshot it verbatim and stay immutable however the catalog changes
/// afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricedLine {
    /// What the line sells.
    pub product: ProductRef,

    /// Display name at resolution time; empty if the product was missing.
    pub name: String,

    /// Quantity requested.
    pub quantity: u32,

    /// Label of the size that was actually matched, for size-based cakes.
    /// May differ from what the shopper requested.
    pub resolved_size: Option<String>,

    /// Price of one unit of the primary product, toppings included but
    /// attached accessories excluded.
    pub unit_price: Decimal,

    /// Extended total for the line, attached accessories included.
    pub line_total: Decimal,

    /// Set when the line is excluded from totals. Unavailable lines stay in
    /// the list so the shopper can see what was dropped and remove it.
    pub unavailable: Option<Unavailable>,
}

impl PricedLine {
    /// Whether the line counts towards the subtotal.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.unavailable.is_none()
    }

    fn unavailable(line: &CartLine, reason: Unavailable) -> Self {
        Self {
            product: line.product.clone(),
            name: String::new(),
            quantity: line.quantity,
            resolved_size: None,
            unit_price: Decimal::ZERO,
            line_total: Decimal::ZERO,
            unavailable: Some(reason),
        }
    }
}

/// Prices one cart line.
///
/// Accessory lines take the accessory's price directly. Flat-priced cakes
/// ignore any size selection. Size-based cakes resolve their size, then sum
/// selected topping prices at the resolved size label. Attached accessories
/// are priced into the line total but not the unit price; the unit price
/// shown to the shopper covers only the primary product.
pub fn price_line(line: &CartLine, catalog: &impl CatalogSource) -> PricedLine {
    let mut priced = match &line.product {
        ProductRef::Cake(id) => match catalog.cake(id) {
            Some(cake) => price_cake(line, cake, catalog),
            None => PricedLine::unavailable(line, Unavailable::MissingProduct),
        },
        ProductRef::Accessory(id) => match catalog.accessory(id) {
            Some(accessory) => PricedLine {
                product: line.product.clone(),
                name: accessory.name.clone(),
                quantity: line.quantity,
                resolved_size: None,
                unit_price: accessory.price,
                line_total: accessory.price * Decimal::from(line.quantity),
                unavailable: None,
            },
            None => PricedLine::unavailable(line, Unavailable::MissingProduct),
        },
    };

    if priced.is_available() && !line.accessories.is_empty() {
        let attached = attached_accessory_sum(&line.accessories, catalog);
        priced.line_total += attached * Decimal::from(line.quantity);
    }

    priced
}

fn price_cake(line: &CartLine, cake: &Cake, catalog: &impl CatalogSource) -> PricedLine {
    let (base, resolved_size) = match &cake.pricing {
        Pricing::Flat(price) => (*price, None),
        Pricing::SizeBased(sizes) => {
            let Some(hit) = resolve_size(sizes, &line.size) else {
                return PricedLine::unavailable(line, Unavailable::NoPrices);
            };

            (hit.price, Some(hit.label.to_string()))
        }
    };

    let toppings = cake
        .topping_group
        .as_ref()
        .map_or(Decimal::ZERO, |group_id| {
            catalog
                .topping_group(group_id)
                .map_or(Decimal::ZERO, |group| {
                    // Toppings resolve at the *resolved* size label; a flat
                    // cake has none, so its toppings fall through to their
                    // first price entry.
                    topping_sum(group, &line.toppings, resolved_size.as_deref().unwrap_or(""))
                })
        });

    let unit_price = base + toppings;

    PricedLine {
        product: line.product.clone(),
        name: cake.name.clone(),
        quantity: line.quantity,
        resolved_size,
        unit_price,
        line_total: unit_price * Decimal::from(line.quantity),
        unavailable: None,
    }
}

/// Sums attached accessory cost per unit of the line's primary product.
/// Accessories missing from the catalog are skipped, like missing toppings.
fn attached_accessory_sum(refs: &[AccessoryRef], catalog: &impl CatalogSource) -> Decimal {
    refs.iter()
        .filter_map(|attached| {
            catalog
                .accessory(&attached.id)
                .map(|accessory| accessory.price * Decimal::from(attached.quantity))
        })
        .sum()
}
