//! The `externals` declaration: modules provided at runtime instead of bundled.
//!
//! The field is polymorphic in the engine's schema. It may be absent, hold a
//! single item, or hold a list of items, and every shape must survive a round
//! trip unchanged.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One externals item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ExternalItem {
    /// `{ "module-id": "GlobalName" }`
    Map(IndexMap<String, Value>),
    /// A bare module name
    Name(String),
}

impl ExternalItem {
    /// Single-entry mapping from a module identifier to a global variable
    pub fn global(module: impl Into<String>, global: impl Into<String>) -> Self {
        let mut map = IndexMap::with_capacity(1);
        map.insert(module.into(), Value::String(global.into()));
        ExternalItem::Map(map)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Externals {
    List(Vec<ExternalItem>),
    Single(ExternalItem),
}

impl Externals {
    /// Add `item` to an externals slot in whatever shape it currently has.
    ///
    /// - absent: becomes the single item
    /// - list: the item is pushed at the end
    /// - single: becomes `[previous, item]`
    pub fn append(slot: &mut Option<Externals>, item: ExternalItem) {
        *slot = Some(match slot.take() {
            None => Externals::Single(item),
            Some(Externals::List(mut items)) => {
                items.push(item);
                Externals::List(items)
            }
            Some(Externals::Single(previous)) => Externals::List(vec![previous, item]),
        });
    }

    /// Canonical list view regardless of shape
    pub fn items(&self) -> &[ExternalItem] {
        match self {
            Externals::List(items) => items,
            Externals::Single(item) => std::slice::from_ref(item),
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items().is_empty()
    }
}
