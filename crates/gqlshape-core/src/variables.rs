//! Operation variables.

use std::collections::BTreeMap;
use std::collections::btree_map;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

use crate::{ArgumentType, InputType};

/// One variable: its declared type and its serialized value.
#[derive(Clone, Debug, PartialEq)]
pub struct Variable {
    pub ty: ArgumentType,
    pub value: Value,
}

/// Named operation variables.
///
/// Kept sorted by name, so both the argument list derived from it and the
/// serialized `variables` object are deterministic.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Variables {
    entries: BTreeMap<String, Variable>,
}

impl Variables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a variable, typed by `T`'s GraphQL signature.
    ///
    /// Returns the previous variable with the same name, if any.
    pub fn insert<T>(
        &mut self,
        name: impl Into<String>,
        value: T,
    ) -> Result<Option<Variable>, serde_json::Error>
    where
        T: InputType + serde::Serialize,
    {
        let value = serde_json::to_value(&value)?;
        Ok(self.insert_value(name, T::argument_type(), value))
    }

    /// Builder form of [`Variables::insert`].
    pub fn with<T>(mut self, name: impl Into<String>, value: T) -> Result<Self, serde_json::Error>
    where
        T: InputType + serde::Serialize,
    {
        self.insert(name, value)?;
        Ok(self)
    }

    /// Insert an already serialized value with an explicit type.
    pub fn insert_value(
        &mut self,
        name: impl Into<String>,
        ty: ArgumentType,
        value: Value,
    ) -> Option<Variable> {
        self.entries.insert(name.into(), Variable { ty, value })
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.entries.get(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Variable> {
        self.entries.remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Variables in ascending name order.
    pub fn iter(&self) -> btree_map::Iter<'_, String, Variable> {
        self.entries.iter()
    }

    /// The wire `variables` object.
    pub fn to_json(&self) -> Map<String, Value> {
        self.entries
            .iter()
            .map(|(name, variable)| (name.clone(), variable.value.clone()))
            .collect()
    }

    pub fn into_json(self) -> Map<String, Value> {
        self.entries
            .into_iter()
            .map(|(name, variable)| (name, variable.value))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Variables {
    type Item = (&'a String, &'a Variable);
    type IntoIter = btree_map::Iter<'a, String, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Serialize for Variables {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, variable) in &self.entries {
            map.serialize_entry(name, &variable.value)?;
        }
        map.end()
    }
}
