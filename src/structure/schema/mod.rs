//! Schema elements: property keys, vertex labels, edge labels, index labels
//!
//! Each element type comes with a builder that accumulates configuration
//! and ends in one terminal call (`create`, `append`, `eliminate`, or
//! `build` for a request-free copy). Local invariants are checked before
//! anything is sent.

use indexmap::IndexSet;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{HugeError, HugeResult};
use crate::structure::constant::HugeType;

pub mod edge_label;
pub mod index_label;
pub mod property_key;
pub mod vertex_label;

pub use edge_label::{EdgeLabel, EdgeLabelBuilder};
pub use index_label::{IndexLabel, IndexLabelBuilder};
pub use property_key::{PropertyKey, PropertyKeyBuilder};
pub use vertex_label::{VertexLabel, VertexLabelBuilder};

/// A named, server-registered schema definition
pub trait SchemaElement: Serialize + DeserializeOwned + Clone + Send + Sync {
    const TYPE: HugeType;

    fn name(&self) -> &str;
}

/// Every key of `keys` must be one of `properties`
pub(crate) fn check_declared<'a>(
    owner: HugeType,
    name: &str,
    what: &str,
    keys: impl IntoIterator<Item = &'a String>,
    properties: &IndexSet<String>,
) -> HugeResult<()> {
    for key in keys {
        if !properties.contains(key) {
            return Err(HugeError::Client(format!(
                "The {} '{}' of {} '{}' must be contained in properties {:?}",
                what, key, owner, name, properties
            )));
        }
    }
    Ok(())
}

/// No key may appear both in `nullable_keys` and in `keys`
pub(crate) fn check_disjoint<'a>(
    owner: HugeType,
    name: &str,
    what: &str,
    nullable_keys: &IndexSet<String>,
    keys: impl IntoIterator<Item = &'a String>,
) -> HugeResult<()> {
    let overlap: Vec<&String> = keys
        .into_iter()
        .filter(|key| nullable_keys.contains(*key))
        .collect();
    if overlap.is_empty() {
        Ok(())
    } else {
        Err(HugeError::Client(format!(
            "The nullable keys {:?} of {} '{}' must not be {}",
            overlap, owner, name, what
        )))
    }
}

pub(crate) fn check_name(owner: HugeType, name: &str) -> HugeResult<()> {
    if name.trim().is_empty() {
        return Err(HugeError::Client(format!("The name of {} can't be empty", owner)));
    }
    Ok(())
}

/// Insert into an ordered sequence unless already present
pub(crate) fn push_unique(keys: &mut Vec<String>, key: String) {
    if !keys.contains(&key) {
        keys.push(key);
    }
}
