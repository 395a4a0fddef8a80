//! Catalog
//!
//! Canonical, read-only catalog types consumed by the pricing core, plus the
//! collaborator boundary that supplies them. The back office owns catalog
//! data; the pricing core only ever reads it.

use std::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::sizes::SizePrice;

pub mod normalize;
pub mod source;

pub use source::{CatalogSource, InMemoryCatalog};

macro_rules! catalog_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates an id from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// The raw id string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }
    };
}

catalog_id! {
    /// Opaque catalog identifier for a cake.
    CakeId
}

catalog_id! {
    /// Opaque catalog identifier for a topping group.
    ToppingGroupId
}

catalog_id! {
    /// Opaque catalog identifier for a topping within a group.
    ToppingId
}

catalog_id! {
    /// Opaque catalog identifier for an accessory.
    AccessoryId
}

/// How a cake is priced.
///
/// The variant is authoritative: a flat-priced cake never consults a size
/// list, and a size-based cake never carries a flat price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Pricing {
    /// One price regardless of size.
    Flat(Decimal),

    /// Ordered size/price list; the selected size determines the base price.
    SizeBased(SmallVec<[SizePrice; 4]>),
}

/// A cake in the catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cake {
    /// Catalog id.
    pub id: CakeId,

    /// Display name.
    pub name: String,

    /// Flat or size-based pricing.
    pub pricing: Pricing,

    /// Optional topping group; absent means no toppings are selectable.
    pub topping_group: Option<ToppingGroupId>,
}

/// One optional add-on within a topping group, independently priced per size
/// label.
///
/// A topping's size vocabulary is not guaranteed to match the product's
/// (`"1 Kg"` vs `"1kg"` vs `"1000g"`); resolution tolerates this via the
/// shared label matcher.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topping {
    /// Catalog id, matched exactly against cart line selections.
    pub id: ToppingId,

    /// Display name.
    pub name: String,

    /// Per-size prices; may be empty, in which case the topping is free.
    pub prices: SmallVec<[SizePrice; 4]>,
}

/// A named group of toppings selectable for a cake.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToppingGroup {
    /// Catalog id.
    pub id: ToppingGroupId,

    /// Ordered topping entries.
    pub toppings: Vec<Topping>,
}

impl ToppingGroup {
    /// Looks up a topping by exact id.
    #[must_use]
    pub fn topping(&self, id: &ToppingId) -> Option<&Topping> {
        self.toppings.iter().find(|topping| &topping.id == id)
    }
}

/// An accessory (candles, knives, message toppers).
///
/// Accessories have one immutable price at pricing time; they do not support
/// sizes or toppings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Accessory {
    /// Catalog id.
    pub id: AccessoryId,

    /// Display name.
    pub name: String,

    /// Unit price.
    pub price: Decimal,
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    fn group() -> ToppingGroup {
        ToppingGroup {
            id: "classic".into(),
            toppings: vec![
                Topping {
                    id: "choco-chips".into(),
                    name: "Choco Chips".to_string(),
                    prices: smallvec![SizePrice::new("1kg", Decimal::from(50))],
                },
                Topping {
                    id: "almonds".into(),
                    name: "Roasted Almonds".to_string(),
                    prices: smallvec![],
                },
            ],
        }
    }

    #[test]
    fn topping_lookup_is_exact() {
        let group = group();

        assert!(group.topping(&"choco-chips".into()).is_some());
        assert!(group.topping(&"Choco-Chips".into()).is_none());
        assert!(group.topping(&"missing".into()).is_none());
    }

    #[test]
    fn ids_display_as_their_raw_string() {
        let id = CakeId::new("chocolate-truffle");

        assert_eq!(id.to_string(), "chocolate-truffle");
        assert_eq!(id.as_str(), "chocolate-truffle");
    }
}
