use crate::{TagIndexParams, TextIndexParams, VectorIndexParams};
use serde::{Deserialize, Serialize};
use shoal_error::{ErrorCodes, ShoalError};
use std::collections::HashSet;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("Duplicate field name: {name}")]
    DuplicateFieldName { name: String },
    #[error("Schema must declare at least one field")]
    EmptySchema,
}

impl ShoalError for SchemaError {
    fn code(&self) -> ErrorCodes {
        match self {
            SchemaError::DuplicateFieldName { .. } => ErrorCodes::InvalidArgument,
            SchemaError::EmptySchema => ErrorCodes::InvalidArgument,
        }
    }
}

/// Which keyspace value representation the index reads field contents from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub enum KeyDataType {
    #[default]
    #[serde(rename = "hash")]
    Hash,
    #[serde(rename = "json")]
    Json,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldIndex {
    Tag(TagIndexParams),
    Numeric,
    Text(TextIndexParams),
    Vector(VectorIndexParams),
}

/// One indexed field: where its content comes from (`identifier`), the name
/// it is queried under, and how it is indexed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub identifier: String,
    pub alias: Option<String>,
    pub index: FieldIndex,
}

impl FieldSpec {
    /// The name the field is addressed by in queries: the alias when one was
    /// declared, the identifier otherwise.
    pub fn name(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.identifier)
    }
}

/// A validated index schema. Construct via [`IndexSchema::try_new`], which
/// enforces that the schema is non-empty and field names are unique.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IndexSchema {
    pub name: String,
    #[serde(default)]
    pub key_type: KeyDataType,
    #[serde(default)]
    pub prefixes: Vec<String>,
    /// Schema-wide text defaults, present when the creating command declared
    /// any. Fields have these already applied; they are retained for
    /// introspection only.
    pub text_defaults: Option<TextIndexParams>,
    pub fields: Vec<FieldSpec>,
}

impl IndexSchema {
    pub fn try_new(
        name: String,
        key_type: KeyDataType,
        prefixes: Vec<String>,
        text_defaults: Option<TextIndexParams>,
        fields: Vec<FieldSpec>,
    ) -> Result<Self, SchemaError> {
        if fields.is_empty() {
            return Err(SchemaError::EmptySchema);
        }
        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.name()) {
                return Err(SchemaError::DuplicateFieldName {
                    name: field.name().to_string(),
                });
            }
        }
        Ok(IndexSchema {
            name,
            key_type,
            prefixes,
            text_defaults,
            fields,
        })
    }

    /// Look up a field by its effective name.
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|field| field.name() == name)
    }
}
