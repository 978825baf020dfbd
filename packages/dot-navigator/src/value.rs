//! The Value type and tree traversal.
//!
//! A navigator's tree is a [`Map`] whose values may themselves be maps. The
//! traversal functions here walk such a tree one [`DotPath`] segment at a
//! time; only maps are descended into.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::DotPath;

/// A map level of the tree.
pub type Map = BTreeMap<String, Value>;

/// A dynamically-typed value stored in the tree.
///
/// # Design Notes
///
/// - Uses `BTreeMap` so iteration and comparison are deterministic
/// - `Null` is a real value: a key holding `Null` exists
/// - Serializes untagged, so a `Value` reads and writes as plain JSON
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Array(Vec<Value>),
    Map(Map),
}

impl Value {
    /// Create an empty map.
    pub fn map() -> Self {
        Value::Map(Map::new())
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Check if this value is a map.
    pub fn is_map(&self) -> bool {
        matches!(self, Value::Map(_))
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(map) => Some(map),
            _ => None,
        }
    }
}

/// Find the value stored at `path`.
///
/// Returns `Some(&Value::Null)` for a key that exists holding null. Returns
/// `None` as soon as a segment is missing or an intermediate is not a map.
pub fn lookup<'tree>(tree: &'tree Map, path: &DotPath) -> Option<&'tree Value> {
    let (leaf, parents) = path.split_last()?;
    let mut current = tree;
    for segment in parents {
        current = match current.get(segment)? {
            Value::Map(map) => map,
            _ => return None,
        };
    }
    current.get(leaf)
}

/// Store `value` at `path`, creating intermediate maps as needed.
///
/// An intermediate that exists but is not a map is replaced by an empty map.
/// Returns the value previously stored under the final segment.
pub fn insert(tree: &mut Map, path: &DotPath, value: Value) -> Option<Value> {
    let (leaf, parents) = path.split_last()?;
    let mut current = tree;
    for segment in parents {
        let slot = current.entry(segment.clone()).or_insert_with(Value::map);
        if !slot.is_map() {
            *slot = Value::map();
        }
        current = match slot {
            Value::Map(map) => map,
            _ => unreachable!("slot was just made a map"),
        };
    }
    current.insert(leaf.clone(), value)
}

/// Remove the value at `path`, returning it if it existed.
///
/// Parents are left in place even when the removal empties them.
pub fn remove(tree: &mut Map, path: &DotPath) -> Option<Value> {
    let (leaf, parents) = path.split_last()?;
    let mut current = tree;
    for segment in parents {
        current = match current.get_mut(segment)? {
            Value::Map(map) => map,
            _ => return None,
        };
    }
    current.remove(leaf)
}

// Conversion from common types

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Map(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::Array(v.into_iter().map(Into::into).collect())
    }
}
