//! Property bags of vertices and edges
//!
//! A property value is plain JSON; LIST and SET properties are JSON arrays.
//! How a new value is merged depends on the cardinality of its property key,
//! which the caller supplies through a [`CardinalityLookup`].

use indexmap::IndexMap;
use serde_json::Value;
use std::collections::HashMap;

use crate::error::{HugeError, HugeResult};
use crate::structure::constant::Cardinality;
use crate::structure::schema::{PropertyKey, SchemaElement};

/// Ordered property map of a graph element
pub type PropertyMap = IndexMap<String, Value>;

/// Source of declared cardinalities, usually built from the property keys
/// listed by the server
pub trait CardinalityLookup {
    fn cardinality(&self, key: &str) -> Option<Cardinality>;
}

impl CardinalityLookup for HashMap<String, Cardinality> {
    fn cardinality(&self, key: &str) -> Option<Cardinality> {
        self.get(key).copied()
    }
}

impl CardinalityLookup for [PropertyKey] {
    fn cardinality(&self, key: &str) -> Option<Cardinality> {
        self.iter().find(|pk| pk.name() == key).map(PropertyKey::cardinality)
    }
}

impl CardinalityLookup for Vec<PropertyKey> {
    fn cardinality(&self, key: &str) -> Option<Cardinality> {
        self.as_slice().cardinality(key)
    }
}

/// Merge `value` into `properties[key]` according to `cardinality`.
///
/// SINGLE overwrites. LIST appends, keeping duplicates and order. SET
/// appends only values not already present (plain JSON equality). An array
/// passed for LIST/SET contributes each of its items.
pub fn merge_property(
    properties: &mut PropertyMap,
    key: impl Into<String>,
    value: Value,
    cardinality: Cardinality,
) {
    let key = key.into();
    if cardinality == Cardinality::Single {
        properties.insert(key, value);
        return;
    }

    let incoming = match value {
        Value::Array(items) => items,
        other => vec![other],
    };
    let values = properties.entry(key).or_insert_with(|| Value::Array(Vec::new()));
    if !values.is_array() {
        *values = Value::Array(vec![values.take()]);
    }
    if let Value::Array(values) = values {
        for item in incoming {
            if cardinality == Cardinality::Set && values.contains(&item) {
                continue;
            }
            values.push(item);
        }
    }
}

/// Shared behaviour of vertices and edges
pub trait GraphElement {
    fn label(&self) -> &str;

    fn properties(&self) -> &PropertyMap;

    fn properties_mut(&mut self) -> &mut PropertyMap;

    fn property_value(&self, key: &str) -> Option<&Value> {
        self.properties().get(key)
    }

    /// Set a property, treating it as SINGLE
    fn set_property(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        merge_property(self.properties_mut(), key, value.into(), Cardinality::Single);
    }

    /// Set a property according to its declared cardinality; keys unknown
    /// to `schema` are treated as SINGLE
    fn set_property_with<L>(&mut self, schema: &L, key: impl Into<String>, value: impl Into<Value>)
    where
        L: CardinalityLookup + ?Sized,
    {
        let key = key.into();
        let cardinality = schema.cardinality(&key).unwrap_or_default();
        merge_property(self.properties_mut(), key, value.into(), cardinality);
    }

    /// Remove a property, returning its value.
    ///
    /// Fails with [`HugeError::InvalidOperation`] if the key is absent.
    fn remove_property(&mut self, key: &str) -> HugeResult<Value> {
        let label = self.label().to_string();
        self.properties_mut().shift_remove(key).ok_or_else(|| {
            HugeError::InvalidOperation(format!(
                "The element of label '{}' doesn't have property '{}'",
                label, key
            ))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn start() -> PropertyMap {
        let mut props = PropertyMap::new();
        props.insert("date".to_string(), json!("20170324"));
        props.insert("time".to_string(), json!(["20121010"]));
        props
    }

    #[test]
    fn test_set_ignores_equal_value() {
        let mut props = start();
        merge_property(&mut props, "time", json!("20121010"), Cardinality::Set);
        assert_eq!(props["time"], json!(["20121010"]));

        merge_property(&mut props, "time", json!("20140214"), Cardinality::Set);
        assert_eq!(props["time"], json!(["20121010", "20140214"]));
    }

    #[test]
    fn test_list_keeps_duplicates() {
        let mut props = start();
        merge_property(&mut props, "time", json!("20121010"), Cardinality::List);
        assert_eq!(props["time"], json!(["20121010", "20121010"]));
    }

    #[test]
    fn test_single_overwrites() {
        let mut props = start();
        merge_property(&mut props, "date", json!("20170808"), Cardinality::Single);
        assert_eq!(props["date"], json!("20170808"));
        assert_eq!(props.len(), 2);
    }

    #[test]
    fn test_collection_starts_empty_and_accepts_arrays() {
        let mut props = PropertyMap::new();
        merge_property(&mut props, "tags", json!(["a", "b", "a"]), Cardinality::Set);
        assert_eq!(props["tags"], json!(["a", "b"]));

        merge_property(&mut props, "scores", json!(1), Cardinality::List);
        merge_property(&mut props, "scores", json!([1, 2]), Cardinality::List);
        assert_eq!(props["scores"], json!([1, 1, 2]));
    }

    #[test]
    fn test_scalar_promoted_to_collection() {
        let mut props = PropertyMap::new();
        props.insert("time".to_string(), json!("20121010"));
        merge_property(&mut props, "time", json!("20140214"), Cardinality::List);
        assert_eq!(props["time"], json!(["20121010", "20140214"]));
    }

    #[test]
    fn test_lookup_from_property_keys() {
        let keys: Vec<PropertyKey> = serde_json::from_value(json!([
            {"name": "time", "data_type": "TEXT", "cardinality": "SET"},
            {"name": "date", "data_type": "TEXT", "cardinality": "SINGLE"}
        ]))
        .unwrap();
        assert_eq!(keys.cardinality("time"), Some(Cardinality::Set));
        assert_eq!(keys.cardinality("missing"), None);
    }
}
