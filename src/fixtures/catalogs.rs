//! Catalog fixtures

use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::catalog::{
    InMemoryCatalog, Topping, ToppingGroup, ToppingGroupId,
    normalize::{AccessoryPayload, CakePayload, ListPayload, ToppingPayload},
};

/// Wrapper for a catalog fixture file.
///
/// Documents are keyed by their catalog id, and arrive in the same wire
/// shapes the storefront API produces, so fixtures exercise the
/// normalization boundary too.
#[derive(Debug, Deserialize)]
pub struct CatalogFixture {
    /// Map of cake id -> cake payload.
    #[serde(default)]
    pub cakes: FxHashMap<String, CakePayload>,

    /// Map of topping group id -> topping list (possibly wrapped).
    #[serde(default)]
    pub topping_groups: FxHashMap<String, ListPayload<ToppingPayload>>,

    /// Map of accessory id -> accessory payload.
    #[serde(default)]
    pub accessories: FxHashMap<String, AccessoryPayload>,
}

impl CatalogFixture {
    /// Canonicalizes every document into a catalog store.
    #[must_use]
    pub fn into_catalog(self) -> InMemoryCatalog {
        let mut catalog = InMemoryCatalog::new();

        for (id, cake) in self.cakes {
            catalog.insert_cake(cake.into_cake(id.into()));
        }

        for (id, toppings) in self.topping_groups {
            catalog.insert_topping_group(ToppingGroup {
                id: ToppingGroupId::new(id),
                toppings: toppings.into_vec().into_iter().map(Topping::from).collect(),
            });
        }

        for (id, accessory) in self.accessories {
            catalog.insert_accessory(accessory.into_accessory(id.into()));
        }

        catalog
    }
}
