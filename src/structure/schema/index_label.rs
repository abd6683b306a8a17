//! Index labels

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::driver::SchemaManager;
use crate::error::{HugeError, HugeResult};
use crate::structure::constant::{HugeType, IndexType};
use crate::structure::schema::{check_name, SchemaElement};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexLabel {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_type: Option<HugeType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    base_value: Option<String>,
    #[serde(default)]
    index_type: IndexType,
    #[serde(default)]
    fields: IndexSet<String>,
}

impl IndexLabel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            base_type: None,
            base_value: None,
            index_type: IndexType::default(),
            fields: IndexSet::new(),
        }
    }

    pub fn base_type(&self) -> Option<HugeType> {
        self.base_type
    }

    /// Name of the label (or property key) the index is built on
    pub fn base_value(&self) -> Option<&str> {
        self.base_value.as_deref()
    }

    pub fn index_type(&self) -> IndexType {
        self.index_type
    }

    pub fn index_fields(&self) -> &IndexSet<String> {
        &self.fields
    }

    /// Checks run before a create request
    pub fn validate(&self) -> HugeResult<()> {
        check_name(Self::TYPE, &self.name)?;
        match (self.base_type, self.base_value.as_deref()) {
            (Some(_), Some(value)) if value.is_empty() => {
                return Err(HugeError::Client(format!(
                    "Must set the base label of index label '{}'",
                    self.name
                )))
            }
            (Some(HugeType::VertexLabel | HugeType::EdgeLabel | HugeType::PropertyKey), Some(_)) => {}
            (Some(other), Some(_)) => {
                return Err(HugeError::Client(format!(
                    "Can not build index label '{}' on schema type: {:?}",
                    self.name, other
                )))
            }
            _ => {
                return Err(HugeError::Client(format!(
                    "Must set the base label of index label '{}'",
                    self.name
                )))
            }
        }
        if self.fields.is_empty() {
            return Err(HugeError::Client(format!(
                "Must set the fields of index label '{}'",
                self.name
            )));
        }
        Ok(())
    }
}

impl SchemaElement for IndexLabel {
    const TYPE: HugeType = HugeType::IndexLabel;

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for IndexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{name={}, baseType={:?}, baseValue={:?}, indexType={:?}, fields={:?}}}",
            self.name, self.base_type, self.base_value, self.index_type, self.fields
        )
    }
}

/// Builder returned by [`SchemaManager::index_label`]
pub struct IndexLabelBuilder {
    index_label: IndexLabel,
    manager: SchemaManager,
    if_not_exist: bool,
}

impl IndexLabelBuilder {
    pub(crate) fn new(name: impl Into<String>, manager: SchemaManager) -> Self {
        Self {
            index_label: IndexLabel::new(name),
            manager,
            if_not_exist: false,
        }
    }

    fn on(mut self, base_type: HugeType, base_value: impl Into<String>) -> Self {
        self.index_label.base_type = Some(base_type);
        self.index_label.base_value = Some(base_value.into());
        self
    }

    pub fn on_vertex_label(self, label: impl Into<String>) -> Self {
        self.on(HugeType::VertexLabel, label)
    }

    pub fn on_edge_label(self, label: impl Into<String>) -> Self {
        self.on(HugeType::EdgeLabel, label)
    }

    pub fn on_property_key(self, key: impl Into<String>) -> Self {
        self.on(HugeType::PropertyKey, key)
    }

    /// Indexed fields, in order
    pub fn by<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.index_label.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    pub fn secondary(mut self) -> Self {
        self.index_label.index_type = IndexType::Secondary;
        self
    }

    pub fn search(mut self) -> Self {
        self.index_label.index_type = IndexType::Search;
        self
    }

    /// Return the existing index label instead of failing when the name is taken
    pub fn if_not_exist(mut self) -> Self {
        self.if_not_exist = true;
        self
    }

    /// The configured index label, without validation or network access
    pub fn build(self) -> IndexLabel {
        self.index_label
    }

    /// Create the index label, then register its name on the owning label.
    ///
    /// Two round trips: if the second one fails the index exists on the
    /// server while the owning label does not list it.
    pub async fn create(self) -> HugeResult<IndexLabel> {
        self.index_label.validate()?;
        if self.if_not_exist {
            if let Some(existing) = self.manager.find_index_label(&self.index_label.name).await? {
                return Ok(existing);
            }
        }
        self.manager.add_index_label(&self.index_label).await
    }
}
