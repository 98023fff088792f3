//! Domain types for the item store.
//!
//! # Design
//! `ItemId` is a newtype over `i64` so ids cannot be confused with positions
//! in the collection. It serializes transparently as a plain JSON integer.
//! `ItemFilter` owns the matching rule so every backend filters the same way.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier assigned to an item at creation. Never reused or changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(pub i64);

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for ItemId {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

/// A single to-do item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
}

impl Item {
    pub fn new(id: impl Into<ItemId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// Optional criteria for `list`. An absent or blank `name` matches everything.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ItemFilter {
    #[serde(default)]
    pub name: Option<String>,
}

impl ItemFilter {
    pub fn by_name(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
        }
    }

    /// Lowercased filter text, or `None` when the filter selects every item.
    pub fn needle(&self) -> Option<String> {
        self.name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .map(str::to_lowercase)
    }

    /// Case-insensitive substring match on the item name.
    pub fn matches(&self, item: &Item) -> bool {
        match self.needle() {
            Some(needle) => item.name.to_lowercase().contains(&needle),
            None => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_serializes_id_as_plain_integer() {
        let item = Item::new(7, "Buy milk");
        let json = serde_json::to_value(&item).unwrap();
        assert_eq!(json["id"], 7);
        assert_eq!(json["name"], "Buy milk");
    }

    #[test]
    fn filter_without_name_matches_everything() {
        let item = Item::new(1, "Anything");
        assert!(ItemFilter::default().matches(&item));
        assert!(ItemFilter::by_name("").matches(&item));
        assert!(ItemFilter::by_name("   ").matches(&item));
    }

    #[test]
    fn filter_is_case_insensitive_containment() {
        let item = Item::new(1, "Buy Milk");
        assert!(ItemFilter::by_name("uy").matches(&item));
        assert!(ItemFilter::by_name("MILK").matches(&item));
        assert!(ItemFilter::by_name("y m").matches(&item));
        assert!(!ItemFilter::by_name("milks").matches(&item));
        assert!(!ItemFilter::by_name("bread").matches(&item));
    }

    #[test]
    fn filter_deserializes_with_missing_name() {
        let filter: ItemFilter = serde_json::from_str("{}").unwrap();
        assert!(filter.name.is_none());
        assert!(filter.needle().is_none());
    }
}
