//! Sizes
//!
//! Size variants and the fallback matcher that resolves a requested size
//! descriptor against a product's ordered size/price list.
//!
//! Size labels are free text entered by the back office (`"500g"`, `"1 Kg"`,
//! `"1000g"`), so matching is layered: an in-bounds index wins outright, then
//! a normalized exact label match, then a leading-number comparison, and
//! finally the first entry as a silent default. Callers must not assume the
//! resolved size equals what was requested.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One entry of an ordered size/price list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizePrice {
    /// Free-text size label, e.g. `"500g"` or `"1 Kg"`.
    #[serde(rename = "size")]
    pub label: String,

    /// Price for this size, in catalog units.
    pub price: Decimal,
}

impl SizePrice {
    /// Creates a new size/price entry.
    #[must_use]
    pub fn new(label: impl Into<String>, price: Decimal) -> Self {
        Self {
            label: label.into(),
            price,
        }
    }
}

/// What a cart line asked for, before resolution.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(untagged)]
pub enum SizeSelector {
    /// Positional index into the product's size list.
    Index(usize),

    /// Free-text size label, matched with the fallback chain.
    Label(String),

    /// No explicit selection; the first available size applies.
    #[default]
    First,
}

impl From<&str> for SizeSelector {
    fn from(label: &str) -> Self {
        SizeSelector::Label(label.to_string())
    }
}

impl From<usize> for SizeSelector {
    fn from(index: usize) -> Self {
        SizeSelector::Index(index)
    }
}

/// A size entry matched from a product's size list.
///
/// Borrows the matched entry; callers that persist the resolution copy the
/// label into owned data.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedSize<'a> {
    /// Label of the entry that was actually matched, which may differ from
    /// what was requested.
    pub label: &'a str,

    /// Price of the matched entry.
    pub price: Decimal,

    /// Index of the matched entry in the size list.
    pub index: usize,
}

/// Resolves a requested size descriptor against an ordered size/price list.
///
/// Fallback chain, first hit wins:
///
/// 1. an in-bounds [`SizeSelector::Index`] returns that entry;
/// 2. a [`SizeSelector::Label`] is matched exactly after normalization
///    (lowercased, all whitespace stripped);
/// 3. failing that, the leading numeric portion of the label is compared
///    against the leading numeric portion of each entry's label;
/// 4. failing that, the first entry is returned as a silent default.
///
/// Returns `None` only for an empty size list; the caller must treat the
/// product as unpriced.
pub fn resolve_size<'a>(
    sizes: &'a [SizePrice],
    selector: &SizeSelector,
) -> Option<ResolvedSize<'a>> {
    if let SizeSelector::Index(index) = selector
        && let Some(entry) = sizes.get(*index)
    {
        return Some(resolved(entry, *index));
    }

    if let SizeSelector::Label(label) = selector
        && let Some((index, entry)) = match_label(sizes, label)
    {
        return Some(resolved(entry, index));
    }

    sizes.first().map(|entry| resolved(entry, 0))
}

fn resolved(entry: &SizePrice, index: usize) -> ResolvedSize<'_> {
    ResolvedSize {
        label: &entry.label,
        price: entry.price,
        index,
    }
}

/// Shared label matcher used by both product size resolution and per-topping
/// price resolution.
///
/// Tries a normalized exact match first, then compares leading numbers.
/// Unit suffixes are deliberately not normalized: `"1kg"` and `"1000g"` do
/// not numeric-match, and `"1kg"` vs `"10g"` compare only on their digit
/// runs. This mirrors the storefront's historical matching behaviour.
pub(crate) fn match_label<'a>(
    entries: &'a [SizePrice],
    target: &str,
) -> Option<(usize, &'a SizePrice)> {
    let wanted = normalize_label(target);

    if wanted.is_empty() {
        return None;
    }

    if let Some(hit) = entries
        .iter()
        .enumerate()
        .find(|(_, entry)| normalize_label(&entry.label) == wanted)
    {
        return Some(hit);
    }

    let wanted_number = leading_number(target)?;

    entries
        .iter()
        .enumerate()
        .find(|(_, entry)| leading_number(&entry.label) == Some(wanted_number))
}

/// Lowercases a label and strips all whitespace, so `"1 KG"` and `"1kg"`
/// compare equal.
fn normalize_label(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Extracts the first run of digits (with at most one decimal point) from a
/// label, e.g. `"1.5 Kg Deluxe"` -> `1.5`.
fn leading_number(label: &str) -> Option<Decimal> {
    let mut digits = String::new();
    let mut seen_point = false;

    for ch in label.chars().skip_while(|c| !c.is_ascii_digit()) {
        if ch.is_ascii_digit() {
            digits.push(ch);
        } else if ch == '.' && !seen_point {
            seen_point = true;
            digits.push(ch);
        } else {
            break;
        }
    }

    digits.parse::<Decimal>().ok()
}
