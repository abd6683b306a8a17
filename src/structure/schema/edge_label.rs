//! Edge labels

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::driver::SchemaManager;
use crate::error::{HugeError, HugeResult};
use crate::structure::constant::{Frequency, HugeType};
use crate::structure::schema::{check_declared, check_disjoint, check_name, push_unique, SchemaElement};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeLabel {
    name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    source_label: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    target_label: Option<String>,
    #[serde(default)]
    frequency: Frequency,
    #[serde(default)]
    properties: IndexSet<String>,
    #[serde(default)]
    sort_keys: Vec<String>,
    #[serde(default)]
    nullable_keys: IndexSet<String>,
    #[serde(default, alias = "index_labels")]
    index_names: IndexSet<String>,
    #[serde(default = "enabled")]
    enable_label_index: bool,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    user_data: IndexMap<String, Value>,
}

fn enabled() -> bool {
    true
}

impl EdgeLabel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            source_label: None,
            target_label: None,
            frequency: Frequency::default(),
            properties: IndexSet::new(),
            sort_keys: Vec::new(),
            nullable_keys: IndexSet::new(),
            index_names: IndexSet::new(),
            enable_label_index: true,
            user_data: IndexMap::new(),
        }
    }

    pub fn source_label(&self) -> Option<&str> {
        self.source_label.as_deref()
    }

    pub fn target_label(&self) -> Option<&str> {
        self.target_label.as_deref()
    }

    pub fn frequency(&self) -> Frequency {
        self.frequency
    }

    pub fn properties(&self) -> &IndexSet<String> {
        &self.properties
    }

    pub fn sort_keys(&self) -> &[String] {
        &self.sort_keys
    }

    pub fn nullable_keys(&self) -> &IndexSet<String> {
        &self.nullable_keys
    }

    pub fn index_names(&self) -> &IndexSet<String> {
        &self.index_names
    }

    /// Record an index built on this label; returns false if already known
    pub fn add_index_name(&mut self, index: impl Into<String>) -> bool {
        self.index_names.insert(index.into())
    }

    pub fn enable_label_index(&self) -> bool {
        self.enable_label_index
    }

    pub fn user_data(&self) -> &IndexMap<String, Value> {
        &self.user_data
    }

    /// Checks run before a create request
    pub fn validate(&self) -> HugeResult<()> {
        check_name(Self::TYPE, &self.name)?;
        if self.source_label.is_none() || self.target_label.is_none() {
            return Err(HugeError::Client(format!(
                "Must set source and target label for edge label '{}'",
                self.name
            )));
        }
        check_declared(Self::TYPE, &self.name, "sort key", &self.sort_keys, &self.properties)?;
        check_declared(Self::TYPE, &self.name, "nullable key", &self.nullable_keys, &self.properties)?;
        check_disjoint(Self::TYPE, &self.name, "sort keys", &self.nullable_keys, &self.sort_keys)?;
        if self.frequency == Frequency::Multiple && self.sort_keys.is_empty() {
            return Err(HugeError::Client(format!(
                "Must set sort keys for edge label '{}' with MULTIPLE frequency",
                self.name
            )));
        }
        Ok(())
    }
}

impl SchemaElement for EdgeLabel {
    const TYPE: HugeType = HugeType::EdgeLabel;

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for EdgeLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{name={}, sourceLabel={:?}, targetLabel={:?}, frequency={:?}, sortKeys={:?}, \
             nullableKeys={:?}, properties={:?}}}",
            self.name,
            self.source_label,
            self.target_label,
            self.frequency,
            self.sort_keys,
            self.nullable_keys,
            self.properties
        )
    }
}

/// Builder returned by [`SchemaManager::edge_label`]
pub struct EdgeLabelBuilder {
    edge_label: EdgeLabel,
    manager: SchemaManager,
    if_not_exist: bool,
}

impl EdgeLabelBuilder {
    pub(crate) fn new(name: impl Into<String>, manager: SchemaManager) -> Self {
        Self {
            edge_label: EdgeLabel::new(name),
            manager,
            if_not_exist: false,
        }
    }

    /// Set both ends at once
    pub fn link(self, source_label: impl Into<String>, target_label: impl Into<String>) -> Self {
        self.source_label(source_label).target_label(target_label)
    }

    pub fn source_label(mut self, label: impl Into<String>) -> Self {
        self.edge_label.source_label = Some(label.into());
        self
    }

    pub fn target_label(mut self, label: impl Into<String>) -> Self {
        self.edge_label.target_label = Some(label.into());
        self
    }

    pub fn frequency(mut self, frequency: Frequency) -> Self {
        self.edge_label.frequency = frequency;
        self
    }

    pub fn single_time(self) -> Self {
        self.frequency(Frequency::Single)
    }

    pub fn multi_times(self) -> Self {
        self.frequency(Frequency::Multiple)
    }

    pub fn properties<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edge_label.properties.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Sort keys, in order
    pub fn sort_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            push_unique(&mut self.edge_label.sort_keys, key.into());
        }
        self
    }

    pub fn nullable_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.edge_label.nullable_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn enable_label_index(mut self, enable: bool) -> Self {
        self.edge_label.enable_label_index = enable;
        self
    }

    /// Attach user data; a repeated key keeps the last value
    pub fn user_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.edge_label.user_data.insert(key.into(), value.into());
        self
    }

    /// Return the existing label instead of failing when the name is taken
    pub fn if_not_exist(mut self) -> Self {
        self.if_not_exist = true;
        self
    }

    /// The configured label, without validation or network access
    pub fn build(self) -> EdgeLabel {
        self.edge_label
    }

    pub async fn create(self) -> HugeResult<EdgeLabel> {
        self.edge_label.validate()?;
        if self.if_not_exist {
            if let Some(existing) = self.manager.find_edge_label(&self.edge_label.name).await? {
                return Ok(existing);
            }
        }
        self.manager.add_edge_label(&self.edge_label).await
    }

    /// Add the configured properties/nullable keys/user data to an existing label
    pub async fn append(self) -> HugeResult<EdgeLabel> {
        self.manager.append_edge_label(&self.edge_label).await
    }

    /// Remove the configured nullable keys/user data from an existing label
    pub async fn eliminate(self) -> HugeResult<EdgeLabel> {
        self.manager.eliminate_edge_label(&self.edge_label).await
    }
}
