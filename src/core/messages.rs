//! Message identifiers, their default-locale definitions, and catalogs.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

/// Default-locale definition of one translatable string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDefinition {
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl MessageDefinition {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: None,
        }
    }

    pub fn with_context(message: impl Into<String>, context: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            context: Some(context.into()),
        }
    }
}

/// Insertion-ordered map from message identifier (`namespace.key`) to its definition.
///
/// Re-inserting an identifier replaces the definition in place: the identifier
/// keeps the position of its first insertion.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MessageMap {
    order: Vec<String>,
    entries: HashMap<String, MessageDefinition>,
}

impl MessageMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or overwrite. Returns the previous definition, if any.
    pub fn insert(
        &mut self,
        id: impl Into<String>,
        definition: MessageDefinition,
    ) -> Option<MessageDefinition> {
        let id = id.into();
        let previous = self.entries.insert(id.clone(), definition);
        if previous.is_none() {
            self.order.push(id);
        }
        previous
    }

    /// Shallow merge: every entry of `other` overwrites ours.
    pub fn extend(&mut self, other: MessageMap) {
        for (id, definition) in other.into_iter() {
            self.insert(id, definition);
        }
    }

    pub fn get(&self, id: &str) -> Option<&MessageDefinition> {
        self.entries.get(id)
    }

    /// Identifiers in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MessageDefinition)> {
        self.order
            .iter()
            .filter_map(|id| self.entries.get(id).map(|d| (id.as_str(), d)))
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl IntoIterator for MessageMap {
    type Item = (String, MessageDefinition);
    type IntoIter = std::vec::IntoIter<(String, MessageDefinition)>;

    fn into_iter(mut self) -> Self::IntoIter {
        self.order
            .into_iter()
            .filter_map(|id| self.entries.remove(&id).map(|d| (id, d)))
            .collect::<Vec<_>>()
            .into_iter()
    }
}

impl<K: Into<String>> FromIterator<(K, MessageDefinition)> for MessageMap {
    fn from_iter<T: IntoIterator<Item = (K, MessageDefinition)>>(iter: T) -> Self {
        let mut map = MessageMap::new();
        for (id, definition) in iter {
            map.insert(id, definition);
        }
        map
    }
}

/// Resolved identifier → text mapping for one (locale, bundle) pair.
///
/// A `BTreeMap` so serialization always emits keys in ascending order.
pub type Catalog = BTreeMap<String, String>;
