//! Property keys: typed, named properties that labels refer to

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::driver::SchemaManager;
use crate::error::HugeResult;
use crate::structure::constant::{Cardinality, DataType, HugeType};
use crate::structure::schema::{check_name, SchemaElement};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyKey {
    name: String,
    #[serde(default)]
    data_type: DataType,
    #[serde(default)]
    cardinality: Cardinality,
    #[serde(default)]
    properties: IndexSet<String>,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    user_data: IndexMap<String, Value>,
}

impl PropertyKey {
    /// A TEXT, SINGLE property key
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            data_type: DataType::default(),
            cardinality: Cardinality::default(),
            properties: IndexSet::new(),
            user_data: IndexMap::new(),
        }
    }

    pub fn data_type(&self) -> DataType {
        self.data_type
    }

    pub fn cardinality(&self) -> Cardinality {
        self.cardinality
    }

    pub fn properties(&self) -> &IndexSet<String> {
        &self.properties
    }

    pub fn user_data(&self) -> &IndexMap<String, Value> {
        &self.user_data
    }

    pub(crate) fn validate(&self) -> HugeResult<()> {
        check_name(Self::TYPE, &self.name)
    }
}

impl SchemaElement for PropertyKey {
    const TYPE: HugeType = HugeType::PropertyKey;

    fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for PropertyKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{name={}, cardinality={:?}, dataType={:?}, properties={:?}}}",
            self.name, self.cardinality, self.data_type, self.properties
        )
    }
}

/// Builder returned by [`SchemaManager::property_key`]
pub struct PropertyKeyBuilder {
    property_key: PropertyKey,
    manager: SchemaManager,
    if_not_exist: bool,
}

impl PropertyKeyBuilder {
    pub(crate) fn new(name: impl Into<String>, manager: SchemaManager) -> Self {
        Self {
            property_key: PropertyKey::new(name),
            manager,
            if_not_exist: false,
        }
    }

    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.property_key.data_type = data_type;
        self
    }

    pub fn as_text(self) -> Self {
        self.data_type(DataType::Text)
    }

    pub fn as_int(self) -> Self {
        self.data_type(DataType::Int)
    }

    pub fn as_boolean(self) -> Self {
        self.data_type(DataType::Boolean)
    }

    pub fn as_byte(self) -> Self {
        self.data_type(DataType::Byte)
    }

    pub fn as_blob(self) -> Self {
        self.data_type(DataType::Blob)
    }

    pub fn as_double(self) -> Self {
        self.data_type(DataType::Double)
    }

    pub fn as_float(self) -> Self {
        self.data_type(DataType::Float)
    }

    pub fn as_long(self) -> Self {
        self.data_type(DataType::Long)
    }

    pub fn as_timestamp(self) -> Self {
        self.data_type(DataType::Timestamp)
    }

    pub fn as_uuid(self) -> Self {
        self.data_type(DataType::Uuid)
    }

    pub fn cardinality(mut self, cardinality: Cardinality) -> Self {
        self.property_key.cardinality = cardinality;
        self
    }

    pub fn value_single(self) -> Self {
        self.cardinality(Cardinality::Single)
    }

    pub fn value_list(self) -> Self {
        self.cardinality(Cardinality::List)
    }

    pub fn value_set(self) -> Self {
        self.cardinality(Cardinality::Set)
    }

    /// Attach user data; a repeated key keeps the last value
    pub fn user_data(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.property_key.user_data.insert(key.into(), value.into());
        self
    }

    /// Return the existing property key instead of failing when the name is taken
    pub fn if_not_exist(mut self) -> Self {
        self.if_not_exist = true;
        self
    }

    /// The configured property key, without contacting the server
    pub fn build(self) -> PropertyKey {
        self.property_key
    }

    pub async fn create(self) -> HugeResult<PropertyKey> {
        self.property_key.validate()?;
        if self.if_not_exist {
            if let Some(existing) = self.manager.find_property_key(&self.property_key.name).await? {
                return Ok(existing);
            }
        }
        self.manager.add_property_key(&self.property_key).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_defaults_and_wire_format() {
        let key = PropertyKey::new("name");
        assert_eq!(key.data_type(), DataType::Text);
        assert_eq!(key.cardinality(), Cardinality::Single);

        let json = serde_json::to_value(&key).unwrap();
        assert_eq!(
            json,
            json!({"name": "name", "data_type": "TEXT", "cardinality": "SINGLE", "properties": []})
        );
    }

    #[test]
    fn test_decode_server_response() {
        let key: PropertyKey = serde_json::from_value(json!({
            "id": 3,
            "name": "time",
            "data_type": "TEXT",
            "cardinality": "SET",
            "properties": [],
            "user_data": {"~create_time": "2018-01-01 00:00:00.000"}
        }))
        .unwrap();
        assert_eq!(key.name(), "time");
        assert_eq!(key.cardinality(), Cardinality::Set);
        assert_eq!(key.user_data().len(), 1);
    }
}
