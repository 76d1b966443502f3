//! Response-schema descriptors in the subset of `OpenAPI` that Gemini accepts
//! as `generationConfig.responseSchema`.

use std::collections::BTreeMap;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SchemaType {
    String,
    Integer,
    Number,
    Array,
    Object,
}

/// A JSON-shape constraint sent alongside the instruction.
///
/// Objects list every property as required and carry a
/// `propertyOrdering` so the model emits fields in declaration order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub kind: SchemaType,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_ordering: Vec<String>,
}

impl Schema {
    fn scalar(kind: SchemaType) -> Self {
        Self {
            kind,
            enum_values: Vec::new(),
            items: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
            property_ordering: Vec::new(),
        }
    }

    #[must_use]
    pub fn string() -> Self {
        Self::scalar(SchemaType::String)
    }

    #[must_use]
    pub fn integer() -> Self {
        Self::scalar(SchemaType::Integer)
    }

    #[must_use]
    pub fn number() -> Self {
        Self::scalar(SchemaType::Number)
    }

    /// A string restricted to the given values.
    #[must_use]
    pub fn string_enum<S: AsRef<str>>(values: &[S]) -> Self {
        Self {
            enum_values: values.iter().map(|v| v.as_ref().to_owned()).collect(),
            ..Self::scalar(SchemaType::String)
        }
    }

    #[must_use]
    pub fn array_of(item: Schema) -> Self {
        Self {
            items: Some(Box::new(item)),
            ..Self::scalar(SchemaType::Array)
        }
    }

    /// An object whose properties are all required, in the order given.
    #[must_use]
    pub fn object(properties: Vec<(&str, Schema)>) -> Self {
        let ordering: Vec<String> = properties.iter().map(|(k, _)| (*k).to_owned()).collect();
        Self {
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.to_owned(), v))
                .collect(),
            required: ordering.clone(),
            property_ordering: ordering,
            ..Self::scalar(SchemaType::Object)
        }
    }

    /// Looks up a property of an object schema.
    #[must_use]
    pub fn property(&self, name: &str) -> Option<&Schema> {
        self.properties.get(name)
    }

    /// The element schema of an array schema.
    #[must_use]
    pub fn item(&self) -> Option<&Schema> {
        self.items.as_deref()
    }
}
