//! Catalog sources
//!
//! The pricing core never fetches anything itself; a [`CatalogSource`] hands
//! it already-fetched documents. `None` means not-found or hidden, which the
//! pricer surfaces as an unavailable line rather than an error.

use rustc_hash::FxHashMap;

use crate::catalog::{
    Accessory, AccessoryId, Cake, CakeId, ToppingGroup, ToppingGroupId,
};

/// Read access to catalog documents.
pub trait CatalogSource {
    /// Looks up a cake; `None` for deleted or hidden cakes.
    fn cake(&self, id: &CakeId) -> Option<&Cake>;

    /// Looks up a topping group.
    fn topping_group(&self, id: &ToppingGroupId) -> Option<&ToppingGroup>;

    /// Looks up an accessory.
    fn accessory(&self, id: &AccessoryId) -> Option<&Accessory>;
}

/// An explicitly-scoped catalog store backed by hash maps.
///
/// The collaborator layer builds one of these per request (or per recompute)
/// from its fetched documents and passes it into the pricers, so no pricing
/// state leaks across requests or test runs.
#[derive(Debug, Default)]
pub struct InMemoryCatalog {
    cakes: FxHashMap<CakeId, Cake>,
    topping_groups: FxHashMap<ToppingGroupId, ToppingGroup>,
    accessories: FxHashMap<AccessoryId, Accessory>,
}

impl InMemoryCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a cake, keyed by its id.
    pub fn insert_cake(&mut self, cake: Cake) -> &mut Self {
        self.cakes.insert(cake.id.clone(), cake);
        self
    }

    /// Adds a topping group, keyed by its id.
    pub fn insert_topping_group(&mut self, group: ToppingGroup) -> &mut Self {
        self.topping_groups.insert(group.id.clone(), group);
        self
    }

    /// Adds an accessory, keyed by its id.
    pub fn insert_accessory(&mut self, accessory: Accessory) -> &mut Self {
        self.accessories.insert(accessory.id.clone(), accessory);
        self
    }

    /// Number of cakes in the catalog.
    #[must_use]
    pub fn cake_count(&self) -> usize {
        self.cakes.len()
    }

    /// Number of accessories in the catalog.
    #[must_use]
    pub fn accessory_count(&self) -> usize {
        self.accessories.len()
    }
}

impl CatalogSource for InMemoryCatalog {
    fn cake(&self, id: &CakeId) -> Option<&Cake> {
        self.cakes.get(id)
    }

    fn topping_group(&self, id: &ToppingGroupId) -> Option<&ToppingGroup> {
        self.topping_groups.get(id)
    }

    fn accessory(&self, id: &AccessoryId) -> Option<&Accessory> {
        self.accessories.get(id)
    }
}
