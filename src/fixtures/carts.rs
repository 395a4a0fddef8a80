//! Cart fixtures

use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    cart::Cart,
    catalog::normalize::{AttachedAccessoryPayload, ToppingRefPayload, dedup_topping_refs},
    fixtures::FixtureError,
    lines::{AccessoryRef, CartLine, ProductRef},
    sizes::SizeSelector,
};

/// Wrapper for a cart fixture file.
#[derive(Debug, Deserialize)]
pub struct CartFixture {
    /// Lines in cart order.
    pub lines: Vec<CartLinePayload>,
}

impl CartFixture {
    /// Canonicalizes every line into a cart.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError::AmbiguousLine`] if a line does not
    /// reference exactly one of cake or accessory.
    pub fn try_into_cart(self) -> Result<Cart, FixtureError> {
        let lines = self
            .lines
            .into_iter()
            .map(CartLinePayload::try_into_line)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Cart::with_lines(lines))
    }
}

/// One cart line as it appears in a fixture, in wire shape.
#[derive(Debug, Deserialize)]
pub struct CartLinePayload {
    /// Cake id, for cake lines.
    #[serde(default)]
    pub cake: Option<String>,

    /// Accessory id, for standalone accessory lines.
    #[serde(default)]
    pub accessory: Option<String>,

    /// Quantity; defaults to one.
    #[serde(default = "default_quantity")]
    pub quantity: u32,

    /// Requested size: label, index, or absent.
    #[serde(default)]
    pub size: SizeSelector,

    /// Selected toppings in mixed legacy/new shapes.
    #[serde(default)]
    pub toppings: Vec<ToppingRefPayload>,

    /// Attached accessories (legacy secondary-attachment path).
    #[serde(default)]
    pub accessories: Vec<AttachedAccessoryPayload>,
}

impl CartLinePayload {
    /// Canonicalizes the payload into a cart line.
    ///
    /// # Errors
    ///
    /// Returns a [`FixtureError::AmbiguousLine`] if the payload does not
    /// reference exactly one of cake or accessory.
    pub fn try_into_line(self) -> Result<CartLine, FixtureError> {
        let product = match (self.cake, self.accessory) {
            (Some(id), None) => ProductRef::Cake(id.into()),
            (None, Some(id)) => ProductRef::Accessory(id.into()),
            (Some(_), Some(_)) | (None, None) => return Err(FixtureError::AmbiguousLine),
        };

        Ok(CartLine {
            product,
            quantity: self.quantity,
            size: self.size,
            toppings: dedup_topping_refs(self.toppings),
            accessories: self
                .accessories
                .into_iter()
                .map(AccessoryRef::from)
                .collect::<SmallVec<_>>(),
        })
    }
}

fn default_quantity() -> u32 {
    1
}
