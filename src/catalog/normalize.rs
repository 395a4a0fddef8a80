//! Payload normalization
//!
//! The storefront API drifted over the years: lists arrive bare or wrapped
//! (`{items: []}`, `{orders: []}`, `{data: []}`), money amounts arrive as
//! numbers or strings, topping selections arrive as bare ids or `{id: …}`
//! objects, and cakes signal their pricing mode explicitly or by shape.
//! Everything crossing the collaborator boundary passes through this module
//! once, so the pricing core only ever sees one canonical form.

use rust_decimal::Decimal;
use rustc_hash::FxHashSet;
use serde::Deserialize;
use smallvec::SmallVec;

use crate::{
    catalog::{Accessory, AccessoryId, Cake, CakeId, Pricing, Topping, ToppingGroupId, ToppingId},
    lines::AccessoryRef,
    sizes::SizePrice,
};

/// A list that may arrive bare or under one of the historical wrapper keys.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ListPayload<T> {
    /// Bare array.
    Bare(Vec<T>),

    /// `{ "items": [...] }`
    Items {
        /// The wrapped list.
        items: Vec<T>,
    },

    /// `{ "orders": [...] }`
    Orders {
        /// The wrapped list.
        orders: Vec<T>,
    },

    /// `{ "data": [...] }`
    Data {
        /// The wrapped list.
        data: Vec<T>,
    },
}

impl<T> ListPayload<T> {
    /// Unwraps to the underlying list, whatever shape it arrived in.
    #[must_use]
    pub fn into_vec(self) -> Vec<T> {
        match self {
            ListPayload::Bare(list)
            | ListPayload::Items { items: list }
            | ListPayload::Orders { orders: list }
            | ListPayload::Data { data: list } => list,
        }
    }
}

impl<T> Default for ListPayload<T> {
    fn default() -> Self {
        ListPayload::Bare(Vec::new())
    }
}

/// A money amount that tolerates the storefront's drifting payload types.
///
/// Numbers and numeric strings parse normally; junk strings and nulls coerce
/// to zero so a malformed price can never poison a total with NaN.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(from = "RawAmount")]
pub struct LenientAmount(pub Decimal);

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawAmount {
    Number(Decimal),
    Text(String),
    Null,
}

impl From<RawAmount> for LenientAmount {
    fn from(raw: RawAmount) -> Self {
        match raw {
            RawAmount::Number(value) => Self(value),
            RawAmount::Text(text) => Self(text.trim().parse().unwrap_or(Decimal::ZERO)),
            RawAmount::Null => Self(Decimal::ZERO),
        }
    }
}

/// One size/price entry as it appears on the wire.
#[derive(Debug, Deserialize)]
pub struct SizePricePayload {
    /// Size label.
    #[serde(alias = "label")]
    pub size: String,

    /// Price, leniently parsed.
    #[serde(default)]
    pub price: LenientAmount,
}

impl From<SizePricePayload> for SizePrice {
    fn from(payload: SizePricePayload) -> Self {
        SizePrice::new(payload.size, payload.price.0)
    }
}

/// Explicit pricing mode, when a payload carries one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PricingModePayload {
    /// Price depends on the selected size.
    SizeBased,

    /// One price regardless of size.
    Flat,
}

/// A cake document as it appears on the wire.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CakePayload {
    /// Display name.
    pub name: String,

    /// Explicit pricing mode; older payloads omit it and signal the mode by
    /// shape instead.
    #[serde(default, alias = "pricing_mode")]
    pub pricing_mode: Option<PricingModePayload>,

    /// Flat price, authoritative only in flat mode.
    #[serde(default)]
    pub price: Option<LenientAmount>,

    /// Size/price list, authoritative only in size-based mode; possibly
    /// wrapped.
    #[serde(default)]
    pub prices: ListPayload<SizePricePayload>,

    /// Reference to a topping group.
    #[serde(default, alias = "topping_group", alias = "toppingGroupRef")]
    pub topping_group: Option<ToppingGroupId>,
}

impl CakePayload {
    /// Canonicalizes the payload under the given id.
    ///
    /// An explicit pricing mode wins; otherwise a non-empty size list means
    /// size-based, else flat. A flat cake with no usable price is priced at
    /// zero rather than rejected.
    #[must_use]
    pub fn into_cake(self, id: CakeId) -> Cake {
        let prices = self.prices.into_vec();
        let flat = self.price.unwrap_or_default().0;

        let sizes = |prices: Vec<SizePricePayload>| {
            prices
                .into_iter()
                .map(SizePrice::from)
                .collect::<SmallVec<[SizePrice; 4]>>()
        };

        let pricing = match self.pricing_mode {
            Some(PricingModePayload::Flat) => Pricing::Flat(flat),
            Some(PricingModePayload::SizeBased) => Pricing::SizeBased(sizes(prices)),
            None if prices.is_empty() => Pricing::Flat(flat),
            None => Pricing::SizeBased(sizes(prices)),
        };

        Cake {
            id,
            name: self.name,
            pricing,
            topping_group: self.topping_group,
        }
    }
}

/// A topping entry as it appears on the wire.
#[derive(Debug, Deserialize)]
pub struct ToppingPayload {
    /// Catalog id; legacy entries without one are identified by name.
    #[serde(default)]
    pub id: Option<ToppingId>,

    /// Display name.
    pub name: String,

    /// Per-size prices, possibly wrapped.
    #[serde(default)]
    pub prices: ListPayload<SizePricePayload>,
}

impl From<ToppingPayload> for Topping {
    fn from(payload: ToppingPayload) -> Self {
        let id = payload
            .id
            .unwrap_or_else(|| ToppingId::new(payload.name.clone()));

        Topping {
            id,
            name: payload.name,
            prices: payload
                .prices
                .into_vec()
                .into_iter()
                .map(SizePrice::from)
                .collect(),
        }
    }
}

/// An accessory document as it appears on the wire.
#[derive(Debug, Deserialize)]
pub struct AccessoryPayload {
    /// Display name.
    pub name: String,

    /// Unit price, leniently parsed.
    #[serde(default)]
    pub price: LenientAmount,
}

impl AccessoryPayload {
    /// Canonicalizes the payload under the given id.
    #[must_use]
    pub fn into_accessory(self, id: AccessoryId) -> Accessory {
        Accessory {
            id,
            name: self.name,
            price: self.price.0,
        }
    }
}

/// A selected topping as it appears on a cart line: a bare id in newer
/// payloads, an `{id: …}` object in legacy ones.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ToppingRefPayload {
    /// Bare id string.
    Id(ToppingId),

    /// Object shape.
    Entry {
        /// The referenced topping.
        #[serde(alias = "topping")]
        id: ToppingId,
    },
}

impl ToppingRefPayload {
    /// The referenced topping id, whichever shape carried it.
    #[must_use]
    pub fn into_id(self) -> ToppingId {
        match self {
            ToppingRefPayload::Id(id) | ToppingRefPayload::Entry { id } => id,
        }
    }
}

/// Collapses a mixed legacy/new topping selection into unique ids, keeping
/// first-seen order.
pub fn dedup_topping_refs(
    refs: impl IntoIterator<Item = ToppingRefPayload>,
) -> SmallVec<[ToppingId; 4]> {
    let mut seen = FxHashSet::default();
    let mut out = SmallVec::new();

    for payload in refs {
        let id = payload.into_id();

        if seen.insert(id.clone()) {
            out.push(id);
        }
    }

    out
}

/// An attached accessory as it appears on a cart line.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AttachedAccessoryPayload {
    /// Bare id string, quantity one.
    Id(AccessoryId),

    /// Object shape with an independent quantity.
    Entry {
        /// The referenced accessory.
        id: AccessoryId,

        /// How many to attach; defaults to one.
        #[serde(default = "default_quantity")]
        quantity: u32,
    },
}

impl From<AttachedAccessoryPayload> for AccessoryRef {
    fn from(payload: AttachedAccessoryPayload) -> Self {
        match payload {
            AttachedAccessoryPayload::Id(id) => AccessoryRef { id, quantity: 1 },
            AttachedAccessoryPayload::Entry { id, quantity } => AccessoryRef { id, quantity },
        }
    }
}

fn default_quantity() -> u32 {
    1
}
