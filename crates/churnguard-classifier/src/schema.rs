//! Feature schema and schema-aligned feature vectors
//!
//! The schema is the ordered list of column names the classifier was
//! trained on, declared explicitly by the model artifact. Alignment
//! against it replaces the original dashboard's runtime
//! pad-and-reorder step with a plain validation pass: expected columns
//! missing from the produced set default to 0, unexpected columns are
//! dropped, and output order is exactly the declared order.

use churnguard_core::{Error, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Ordered feature-name schema a trained model expects
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSchema {
    names: Vec<String>,
    index: HashMap<String, usize>,
}

impl FeatureSchema {
    /// Create a schema from an ordered list of column names.
    /// Names must be non-empty and unique.
    pub fn new(names: Vec<String>) -> Result<Self> {
        if names.is_empty() {
            return Err(Error::schema("feature schema has no columns"));
        }

        let mut index = HashMap::with_capacity(names.len());
        for (i, name) in names.iter().enumerate() {
            if name.is_empty() {
                return Err(Error::schema(format!("feature name at position {i} is empty")));
            }
            if index.insert(name.clone(), i).is_some() {
                return Err(Error::schema(format!("duplicate feature name '{name}'")));
            }
        }

        Ok(Self { names, index })
    }

    /// Number of columns in the schema
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the schema is empty (never true after construction)
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Column names in schema order
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Position of a column in the schema, if present
    pub fn position(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }
}

/// A feature vector whose key set and order match one schema exactly
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    schema: Arc<FeatureSchema>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Align produced columns against a schema.
    ///
    /// Every schema column absent from `columns` is set to 0.0
    /// (an unchosen categorical level). Columns the schema does not
    /// know are dropped, never passed to the model.
    pub fn from_columns(schema: &Arc<FeatureSchema>, columns: &[(&str, f64)]) -> Self {
        let mut values = vec![0.0; schema.len()];
        for (name, value) in columns {
            match schema.position(name) {
                Some(i) => values[i] = *value,
                None => debug!(column = %name, "dropping column not in model schema"),
            }
        }
        Self {
            schema: Arc::clone(schema),
            values,
        }
    }

    /// The schema this vector is aligned to
    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    /// Values in schema order
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Value of a named column, if the schema has it
    pub fn get(&self, name: &str) -> Option<f64> {
        self.schema.position(name).map(|i| self.values[i])
    }

    /// Iterate (name, value) pairs in schema order
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.schema
            .names()
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}
