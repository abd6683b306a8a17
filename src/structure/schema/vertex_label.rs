//! Vertex labels

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::driver::SchemaManager;
use crate::error::{HugeError, HugeResult};
use crate::structure::constant::{HugeType, IdStrategy};
use crate::structure::schema::{check_declared, check_disjoint, check_name, push_unique, SchemaElement};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VertexLabel {
    name: String,
    #[serde(default)]
    id_strategy: IdStrategy,
    #[serde(default)]
    properties: IndexSet<String>,
    #[serde(default)]
    primary_keys: Vec<String>,
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

impl VertexLabel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id_strategy: IdStrategy::default(),
            properties: IndexSet::new(),
            primary_keys: Vec::new(),
            nullable_keys: IndexSet::new(),
            index_names: IndexSet::new(),
            enable_label_index: true,
            user_data: IndexMap::new(),
        }
    }

    pub fn id_strategy(&self) -> IdStrategy {
        self.id_strategy
    }

    pub fn properties(&self) -> &IndexSet<String> {
        &self.properties
    }

    pub fn primary_keys(&self) -> &[String] {
        &self.primary_keys
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
        check_declared(Self::TYPE, &self.name, "primary key", &self.primary_keys, &self.properties)?;
        check_declared(Self::TYPE, &self.name, "nullable key", &self.nullable_keys, &self.properties)?;
        check_disjoint(Self::TYPE, &self.name, "primary keys", &self.nullable_keys, &self.primary_keys)?;

        match self.id_strategy {
            IdStrategy::PrimaryKey if self.primary_keys.is_empty() => Err(HugeError::Client(format!(
                "The primary keys of vertex label '{}' can't be empty when using PRIMARY_KEY id strategy",
                self.name
            ))),
            IdStrategy::Automatic
            | IdStrategy::CustomizeString
            | IdStrategy::CustomizeNumber
            | IdStrategy::CustomizeUuid
                if !self.primary_keys.is_empty() =>
            {
                Err(HugeError::Client(format!(
                    "Not allowed to assign primary keys {:?} to vertex label '{}' with {:?} id strategy",
                    self.primary_keys, self.name, self.id_strategy
                )))
            }
            _ => Ok(()),
        }
    }
}

impl SchemaElement for VertexLabel {
    const TYPE: HugeType = HugeType::VertexLabel;

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for VertexLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{name={}, idStrategy={:?}, primaryKeys={:?}, nullableKeys={:?}, properties={:?}}}",
            self.name, self.id_strategy, self.primary_keys, self.nullable_keys, self.properties
        )
    }
}

/// Builder returned by [`SchemaManager::vertex_label`]
pub struct VertexLabelBuilder {
    vertex_label: VertexLabel,
    manager: SchemaManager,
    if_not_exist: bool,
}

impl VertexLabelBuilder {
    pub(crate) fn new(name: impl Into<String>, manager: SchemaManager) -> Self {
        Self {
            vertex_label: VertexLabel::new(name),
            manager,
            if_not_exist: false,
        }
    }

    pub fn properties<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vertex_label.properties.extend(keys.into_iter().map(Into::into));
        self
    }

    /// Primary keys, in order. Selects the PRIMARY_KEY id strategy unless
    /// another one was chosen explicitly.
    pub fn primary_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for key in keys {
            push_unique(&mut self.vertex_label.primary_keys, key.into());
        }
        if self.vertex_label.id_strategy == IdStrategy::Default {
            self.vertex_label.id_strategy = IdStrategy::PrimaryKey;
        }
        self
    }

    pub fn nullable_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.vertex_label.nullable_keys.extend(keys.into_iter().map(Into::into));
        self
    }

    pub fn id_strategy(mut self, strategy: IdStrategy) -> Self {
        self.vertex_label.id_strategy = strategy;
        self
    }

    pub fn use_automatic_id(self) -> Self {
        self.id_strategy(IdStrategy::Automatic)
    }

    pub fn use_primary_key_id(self) -> Self {
        self.id_strategy(IdStrategy::PrimaryKey)
    }

    pub fn use_customize_string_id(self) -> Self {
        self.id_strategy(IdStrategy::CustomizeString)
    }

    pub fn use_customize_number_id(self) -> Self {
        self.id_strategy(IdStrategy::CustomizeNumber)
    }

    pub fn use_customize_uuid(self) -> Self {
        self.id_strategy(IdStrategy::CustomizeUuid)
    }

    pub fn enable_label_index(mut self, enable: bool) -> Self {
        self.vertex_label.enable_label_index = enable;
        self
    }

    /// Attach user data; a repeated key keeps the last value
    pub fn user_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.vertex_label.user_data.insert(key.into(), value.into());
        self
    }

    /// Return the existing label instead of failing when the name is taken
    pub fn if_not_exist(mut self) -> Self {
        self.if_not_exist = true;
        self
    }

    /// The configured label, without validation or network access
    pub fn build(self) -> VertexLabel {
        self.vertex_label
    }

    pub async fn create(self) -> HugeResult<VertexLabel> {
        self.vertex_label.validate()?;
        if self.if_not_exist {
            if let Some(existing) = self.manager.find_vertex_label(&self.vertex_label.name).await? {
                return Ok(existing);
            }
        }
        self.manager.add_vertex_label(&self.vertex_label).await
    }

    /// Add the configured properties/nullable keys/user data to an existing label
    pub async fn append(self) -> HugeResult<VertexLabel> {
        self.manager.append_vertex_label(&self.vertex_label).await
    }

    /// Remove the configured nullable keys/user data from an existing label
    pub async fn eliminate(self) -> HugeResult<VertexLabel> {
        self.manager.eliminate_vertex_label(&self.vertex_label).await
    }
}
