//! Fixtures
//!
//! Named YAML fixture sets for the demos and integration tests: a catalog
//! set under `fixtures/catalogs/` and a cart set under `fixtures/carts/`.
//! Fixture files are written in the storefront's wire shapes and pass
//! through the normalization boundary on load.

use std::{fs, path::PathBuf};

use thiserror::Error;

use crate::{
    cart::Cart,
    catalog::InMemoryCatalog,
    fixtures::{carts::CartFixture, catalogs::CatalogFixture},
};

pub mod carts;
pub mod catalogs;

/// Fixture parsing errors.
#[derive(Debug, Error)]
pub enum FixtureError {
    /// IO error reading fixture files.
    #[error("Failed to read fixture file: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error.
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_norway::Error),

    /// A cart line referenced both a cake and an accessory, or neither.
    #[error("Cart line must reference exactly one of cake or accessory")]
    AmbiguousLine,

    /// Not enough lines in the fixture cart.
    #[error("Not enough lines in fixture, available: {available}, requested: {requested}")]
    NotEnoughLines {
        /// Number of lines defined in the fixture.
        available: usize,

        /// Number of lines requested.
        requested: usize,
    },
}

/// A loaded fixture set.
#[derive(Debug)]
pub struct Fixture {
    /// Base path for fixture files.
    base_path: PathBuf,

    /// Canonicalized catalog documents.
    catalog: InMemoryCatalog,

    /// Canonicalized cart lines.
    cart: Cart,
}

impl Fixture {
    /// Creates a new empty fixture with the default base path.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_path("./fixtures")
    }

    /// Creates a new empty fixture with a custom base path.
    #[must_use]
    pub fn with_base_path(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
            catalog: InMemoryCatalog::new(),
            cart: Cart::new(),
        }
    }

    /// Loads a catalog from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_catalog(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("catalogs").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CatalogFixture = serde_norway::from_str(&contents)?;

        self.catalog = fixture.into_catalog();

        Ok(self)
    }

    /// Loads a cart from a YAML fixture file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or if a line
    /// is ambiguous.
    pub fn load_cart(&mut self, name: &str) -> Result<&mut Self, FixtureError> {
        let file_path = self.base_path.join("carts").join(format!("{name}.yml"));
        let contents = fs::read_to_string(&file_path)?;
        let fixture: CartFixture = serde_norway::from_str(&contents)?;

        self.cart = fixture.try_into_cart()?;

        Ok(self)
    }

    /// Loads a complete fixture set (catalog and cart with the same name).
    ///
    /// # Errors
    ///
    /// Returns an error if either fixture file cannot be loaded.
    pub fn from_set(name: &str) -> Result<Self, FixtureError> {
        let mut fixture = Self::new();

        fixture.load_catalog(name)?.load_cart(name)?;

        Ok(fixture)
    }

    /// The loaded catalog.
    #[must_use]
    pub fn catalog(&self) -> &InMemoryCatalog {
        &self.catalog
    }

    /// A copy of the loaded cart, optionally capped to the first `n` lines.
    ///
    /// # Errors
    ///
    /// Returns [`FixtureError::NotEnoughLines`] if more lines are requested
    /// than the fixture defines.
    pub fn cart(&self, n: Option<usize>) -> Result<Cart, FixtureError> {
        if let Some(n) = n
            && n > self.cart.len()
        {
            return Err(FixtureError::NotEnoughLines {
                requested: n,
                available: self.cart.len(),
            });
        }

        let lines: Vec<_> = self
            .cart
            .lines()
            .iter()
            .take(n.unwrap_or(self.cart.len()))
            .cloned()
            .collect();

        Ok(Cart::with_lines(lines))
    }
}

impl Default for Fixture {
    fn default() -> Self {
        Self::new()
    }
}
