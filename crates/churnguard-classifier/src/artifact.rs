//! Model artifact format and loading
//!
//! The artifact is a JSON document produced by the training pipeline:
//! the ordered feature schema, one coefficient per feature, an
//! intercept, and a decision threshold. It is loaded once per process
//! and validated before any inference runs.

use churnguard_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

fn default_version() -> String {
    "unversioned".to_string()
}

fn default_threshold() -> f64 {
    0.5
}

/// Serialized logistic-regression classifier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    /// Model name/identifier
    pub name: String,

    /// Model version
    #[serde(default = "default_version")]
    pub version: String,

    /// Ordered feature schema the model was trained on
    pub feature_names: Vec<String>,

    /// One coefficient per feature, in schema order
    pub coefficients: Vec<f64>,

    /// Intercept term
    pub intercept: f64,

    /// Decision threshold on the churn-class probability
    #[serde(default = "default_threshold")]
    pub threshold: f64,
}

impl ModelArtifact {
    /// Load and validate an artifact from a JSON file.
    ///
    /// A missing or unreadable file, malformed JSON, or a document
    /// failing validation all surface as a load error; the caller
    /// decides how to degrade (the CLI reports and keeps the process
    /// alive).
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::model_load(format!("failed to read '{}': {e}", path.display()))
        })?;

        let artifact: Self = serde_json::from_str(&content).map_err(|e| {
            Error::model_load(format!("failed to parse '{}': {e}", path.display()))
        })?;

        artifact.validate()?;
        info!(
            model = %artifact.name,
            version = %artifact.version,
            features = artifact.feature_names.len(),
            "loaded model artifact"
        );
        Ok(artifact)
    }

    /// Validate internal consistency: coefficient arity, finiteness,
    /// and a usable threshold. Schema uniqueness is checked when the
    /// `FeatureSchema` is built.
    pub fn validate(&self) -> Result<()> {
        if self.feature_names.is_empty() {
            return Err(Error::model_load(format!(
                "model '{}' declares no features",
                self.name
            )));
        }
        if self.coefficients.len() != self.feature_names.len() {
            return Err(Error::model_load(format!(
                "model '{}' has {} coefficients for {} features",
                self.name,
                self.coefficients.len(),
                self.feature_names.len()
            )));
        }
        if self.coefficients.iter().any(|c| !c.is_finite()) || !self.intercept.is_finite() {
            return Err(Error::model_load(format!(
                "model '{}' contains non-finite weights",
                self.name
            )));
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(Error::model_load(format!(
                "model '{}' threshold must be inside (0, 1), got {}",
                self.name, self.threshold
            )));
        }
        Ok(())
    }
}

/// Metadata describing a loaded model
#[derive(Debug, Clone, Serialize)]
pub struct ModelMetadata {
    /// Model name/identifier
    pub name: String,

    /// Model version
    pub version: String,

    /// Number of input features
    pub num_features: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> ModelArtifact {
        ModelArtifact {
            name: "churn-logreg".into(),
            version: "1.0.0".into(),
            feature_names: vec!["tenure".into(), "MonthlyCharges".into()],
            coefficients: vec![-0.05, 0.02],
            intercept: -0.3,
            threshold: 0.5,
        }
    }

    #[test]
    fn valid_artifact_passes() {
        assert!(artifact().validate().is_ok());
    }

    #[test]
    fn coefficient_arity_mismatch_is_a_load_error() {
        let mut bad = artifact();
        bad.coefficients.push(0.1);
        let err = bad.validate().unwrap_err();
        assert!(err.is_load_failure());
    }

    #[test]
    fn non_finite_weights_are_rejected() {
        let mut bad = artifact();
        bad.coefficients[0] = f64::NAN;
        assert!(bad.validate().is_err());

        let mut bad = artifact();
        bad.intercept = f64::INFINITY;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn degenerate_threshold_is_rejected() {
        for threshold in [0.0, 1.0, -0.2, 1.5] {
            let mut bad = artifact();
            bad.threshold = threshold;
            assert!(bad.validate().is_err());
        }
    }

    #[test]
    fn version_and_threshold_have_defaults() {
        let json = r#"{
            "name": "m",
            "feature_names": ["tenure"],
            "coefficients": [0.1],
            "intercept": 0.0
        }"#;
        let artifact: ModelArtifact = serde_json::from_str(json).unwrap();
        assert_eq!(artifact.version, "unversioned");
        assert_eq!(artifact.threshold, 0.5);
    }

    #[test]
    fn missing_file_is_a_load_error() {
        let err = ModelArtifact::from_path("/nonexistent/churn_model.json").unwrap_err();
        assert!(err.is_load_failure());
    }
}
