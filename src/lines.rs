//! Cart lines
//!
//! The request side of pricing: what the shopper put in the cart, before any
//! catalog resolution happens.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    catalog::{AccessoryId, CakeId, ToppingId},
    sizes::SizeSelector,
};

/// Reference to a purchasable catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductRef {
    /// A cake, priced flat or by size.
    Cake(CakeId),

    /// A standalone accessory line.
    Accessory(AccessoryId),
}

impl fmt::Display for ProductRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProductRef::Cake(id) => write!(f, "{id}"),
            ProductRef::Accessory(id) => write!(f, "{id}"),
        }
    }
}

/// An accessory attached to a line through the legacy secondary-attachment
/// path, with its own quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessoryRef {
    /// The referenced accessory.
    pub id: AccessoryId,

    /// How many to attach per unit of the line's primary product.
    pub quantity: u32,
}

/// One entry in a cart or order: a product reference plus its modifiers.
///
/// Size and toppings are only meaningful for cake lines; accessory lines
/// never carry either, and any that sneak in are ignored at pricing time.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine {
    /// What this line sells.
    pub product: ProductRef,

    /// Quantity; expected to be positive.
    pub quantity: u32,

    /// Requested size, for size-based cakes.
    pub size: SizeSelector,

    /// Selected topping ids, deduplicated.
    pub toppings: SmallVec<[ToppingId; 4]>,

    /// Attached accessories (legacy secondary-attachment path).
    pub accessories: SmallVec<[AccessoryRef; 2]>,
}

impl CartLine {
    /// Creates a cake line with no size selection, toppings, or accessories.
    #[must_use]
    pub fn cake(id: impl Into<CakeId>, quantity: u32) -> Self {
        Self {
            product: ProductRef::Cake(id.into()),
            quantity,
            size: SizeSelector::First,
            toppings: SmallVec::new(),
            accessories: SmallVec::new(),
        }
    }

    /// Creates a standalone accessory line.
    #[must_use]
    pub fn accessory(id: impl Into<AccessoryId>, quantity: u32) -> Self {
        Self {
            product: ProductRef::Accessory(id.into()),
            quantity,
            size: SizeSelector::First,
            toppings: SmallVec::new(),
            accessories: SmallVec::new(),
        }
    }

    /// Sets the requested size.
    #[must_use]
    pub fn with_size(mut self, size: impl Into<SizeSelector>) -> Self {
        self.size = size.into();
        self
    }

    /// Sets the selected toppings, deduplicating while keeping first-seen
    /// order (legacy payloads repeat ids across shapes).
    #[must_use]
    pub fn with_toppings(mut self, toppings: impl IntoIterator<Item = ToppingId>) -> Self {
        let mut seen = FxHashSet::default();

        self.toppings = toppings
            .into_iter()
            .filter(|id| seen.insert(id.clone()))
            .collect();

        self
    }

    /// Sets the attached accessories.
    #[must_use]
    pub fn with_accessories(mut self, accessories: impl IntoIterator<Item = AccessoryRef>) -> Self {
        self.accessories = accessories.into_iter().collect();
        self
    }
}
