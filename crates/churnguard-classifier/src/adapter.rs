//! Feature adapter: raw form values to a schema-aligned vector
//!
//! Deterministic and stateless. Numeric fields pass through, binary
//! categoricals encode Yes/No as 1/0, multi-valued categoricals emit
//! drop-first one-hot indicators, and the result is aligned to the
//! model's declared schema.

use crate::schema::{FeatureSchema, FeatureVector};
use churnguard_core::{Contract, InternetService, PaymentMethod, RawInput, Result};
use std::sync::Arc;

/// Adapter producing feature vectors for one model's schema
#[derive(Debug, Clone)]
pub struct FeatureAdapter {
    schema: Arc<FeatureSchema>,
}

impl FeatureAdapter {
    /// Create an adapter for a model's schema
    pub fn new(schema: Arc<FeatureSchema>) -> Self {
        Self { schema }
    }

    /// Map a raw input to the feature vector the model expects.
    ///
    /// Emits every column the form can produce; alignment then keeps
    /// exactly the schema's columns in the schema's order, so the same
    /// adapter serves artifacts trained on either the demographic
    /// six-column schema or the richer contract/payment/internet one.
    pub fn feature_vector(&self, input: &RawInput) -> Result<FeatureVector> {
        input.validate()?;

        let mut columns: Vec<(&str, f64)> = Vec::with_capacity(13);

        // Numeric pass-through
        columns.push(("tenure", f64::from(input.tenure)));
        columns.push(("MonthlyCharges", input.monthly_charges));
        columns.push(("TotalCharges", input.total_charges));

        // Binary categoricals. SeniorCitizen was numeric 0/1 in the
        // training data, so its column carries no _Yes suffix.
        columns.push(("SeniorCitizen", input.senior_citizen.indicator()));
        columns.push(("Partner_Yes", input.partner.indicator()));
        columns.push(("Dependents_Yes", input.dependents.indicator()));

        // One-hot indicators; the reference level sets none of them
        for name in Contract::COLUMNS {
            columns.push((name, indicator(input.contract.column(), name)));
        }
        for name in PaymentMethod::COLUMNS {
            columns.push((name, indicator(input.payment_method.column(), name)));
        }
        for name in InternetService::COLUMNS {
            columns.push((name, indicator(input.internet_service.column(), name)));
        }

        Ok(FeatureVector::from_columns(&self.schema, &columns))
    }

    /// The schema this adapter aligns to
    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }
}

fn indicator(chosen: Option<&'static str>, column: &str) -> f64 {
    if chosen == Some(column) {
        1.0
    } else {
        0.0
    }
}
