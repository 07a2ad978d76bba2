//! Document-wide name pool.
//!
//! Lotus and Multiplan both store user-defined names in a flat, small-integer
//! keyed table rather than a name-keyed map: a name record gives an id, and
//! later references (in formulas, or in other records) cite that id. Unlike
//! Excel's named ranges, a name entry can resolve to either literal text or
//! a cell/range reference - there's no separate "formula name" kind.

use std::collections::BTreeMap;

use crate::CellRange;

/// What a name entry resolves to.
#[derive(Debug, Clone, PartialEq)]
pub enum NameTarget {
    /// A literal text value.
    Text(String),
    /// A cell or range reference, optionally qualified by a sheet index.
    Reference {
        sheet: Option<usize>,
        range: CellRange,
    },
}

/// A single name-pool entry.
#[derive(Debug, Clone, PartialEq)]
pub struct NameEntry {
    /// The name's display label.
    pub label: String,
    /// What it resolves to.
    pub target: NameTarget,
}

/// Document-wide name pool, keyed by the small integer id the source file
/// assigns each name.
#[derive(Debug, Default)]
pub struct NamePool {
    entries: BTreeMap<u32, NameEntry>,
}

impl NamePool {
    /// A new, empty name pool.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the entry for `id`.
    pub fn insert(&mut self, id: u32, entry: NameEntry) {
        self.entries.insert(id, entry);
    }

    /// Look up a name entry by id.
    pub fn get(&self, id: u32) -> Option<&NameEntry> {
        self.entries.get(&id)
    }

    /// Look up a name entry by its label (case-insensitive), as formula
    /// text sometimes references names by label rather than by id.
    pub fn get_by_label(&self, label: &str) -> Option<(u32, &NameEntry)> {
        let label_lower = label.to_lowercase();
        self.entries
            .iter()
            .find(|(_, e)| e.label.to_lowercase() == label_lower)
            .map(|(&id, e)| (id, e))
    }

    /// Number of names in the pool.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the pool holds no names.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all entries in id order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, &NameEntry)> {
        self.entries.iter().map(|(&id, e)| (id, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellAddress;

    #[test]
    fn lookup_by_id_and_label() {
        let mut pool = NamePool::new();
        pool.insert(
            1,
            NameEntry {
                label: "TaxRate".into(),
                target: NameTarget::Text("0.0725".into()),
            },
        );

        assert_eq!(pool.get(1).unwrap().label, "TaxRate");
        assert_eq!(pool.get_by_label("taxrate").unwrap().0, 1);
        assert!(pool.get_by_label("missing").is_none());
    }

    #[test]
    fn reference_target_carries_sheet_and_range() {
        let range = CellRange::single(CellAddress::new(0, 0));
        let entry = NameEntry {
            label: "Origin".into(),
            target: NameTarget::Reference {
                sheet: Some(0),
                range,
            },
        };
        assert!(matches!(entry.target, NameTarget::Reference { .. }));
    }
}
