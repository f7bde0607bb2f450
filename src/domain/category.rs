//! Domain types representing spending categories.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::*;

/// Label used for activity that has no (resolvable) category.
pub const UNCATEGORIZED_LABEL: &str = "Uncategorized";

/// A user-defined label that transactions and recurring expenses point at.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
}

impl Category {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
        }
    }
}

impl Identifiable for Category {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl NamedEntity for Category {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Id to name resolution for the weak category references on transactions.
#[derive(Debug, Clone, Default)]
pub struct CategoryLookup {
    names: HashMap<Uuid, String>,
}

impl CategoryLookup {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: Uuid, name: impl Into<String>) {
        self.names.insert(id, name.into());
    }

    pub fn name(&self, id: Uuid) -> Option<&str> {
        self.names.get(&id).map(String::as_str)
    }

    pub fn contains(&self, id: Uuid) -> bool {
        self.names.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl<'a, T> FromIterator<&'a T> for CategoryLookup
where
    T: Identifiable + NamedEntity + 'a,
{
    fn from_iter<I: IntoIterator<Item = &'a T>>(iter: I) -> Self {
        let names = iter
            .into_iter()
            .map(|entity| (entity.id(), entity.name().to_string()))
            .collect();
        Self { names }
    }
}

impl From<&[Category]> for CategoryLookup {
    fn from(categories: &[Category]) -> Self {
        categories.iter().collect()
    }
}
