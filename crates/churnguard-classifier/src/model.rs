//! Logistic-regression churn model
//!
//! Wraps a validated artifact and scores schema-aligned feature
//! vectors. Immutable after construction; shared read-only across
//! requests.

use crate::artifact::{ModelArtifact, ModelMetadata};
use crate::schema::{FeatureSchema, FeatureVector};
use churnguard_core::{ChurnLabel, Error, Result};
use std::path::Path;
use std::sync::Arc;

/// A loaded, immutable binary churn classifier
#[derive(Debug, Clone)]
pub struct ChurnModel {
    schema: Arc<FeatureSchema>,
    coefficients: Vec<f64>,
    intercept: f64,
    threshold: f64,
    metadata: ModelMetadata,
}

impl ChurnModel {
    /// Build a model from a validated artifact
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        artifact.validate()?;

        let metadata = ModelMetadata {
            name: artifact.name,
            version: artifact.version,
            num_features: artifact.feature_names.len(),
        };
        let schema = Arc::new(FeatureSchema::new(artifact.feature_names)?);

        Ok(Self {
            schema,
            coefficients: artifact.coefficients,
            intercept: artifact.intercept,
            threshold: artifact.threshold,
            metadata,
        })
    }

    /// Load a model from an artifact file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_artifact(ModelArtifact::from_path(path)?)
    }

    /// The ordered feature schema this model expects
    pub fn schema(&self) -> &Arc<FeatureSchema> {
        &self.schema
    }

    /// Model metadata for display
    pub fn metadata(&self) -> &ModelMetadata {
        &self.metadata
    }

    /// Decision threshold on the churn-class probability
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    fn score(&self, features: &FeatureVector) -> Result<f64> {
        // Vectors built against another model's schema are misaligned
        // even when the column count happens to match.
        if !Arc::ptr_eq(features.schema(), &self.schema) && *features.schema() != self.schema {
            return Err(Error::inference(format!(
                "feature vector schema does not match model '{}'",
                self.metadata.name
            )));
        }

        let z = features
            .values()
            .iter()
            .zip(&self.coefficients)
            .map(|(x, w)| x * w)
            .sum::<f64>()
            + self.intercept;
        Ok(z)
    }

    /// Probability pair `[p(no-churn), p(churn)]`; churn is class 1
    pub fn predict_proba(&self, features: &FeatureVector) -> Result<[f64; 2]> {
        let z = self.score(features)?;
        let p = sigmoid(z);
        Ok([1.0 - p, p])
    }

    /// Binary verdict: churn iff the churn-class probability reaches
    /// the decision threshold
    pub fn predict(&self, features: &FeatureVector) -> Result<ChurnLabel> {
        let proba = self.predict_proba(features)?;
        Ok(if proba[1] >= self.threshold {
            ChurnLabel::Churn
        } else {
            ChurnLabel::NoChurn
        })
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}
