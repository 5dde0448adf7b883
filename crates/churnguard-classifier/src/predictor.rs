//! Load-once predictor handle
//!
//! Owns the loaded model and its feature adapter. Constructed once at
//! process startup and passed into request handling explicitly, so
//! "load once" lives in the caller's wiring rather than hidden global
//! state.

use crate::adapter::FeatureAdapter;
use crate::artifact::{ModelArtifact, ModelMetadata};
use crate::model::ChurnModel;
use crate::schema::FeatureSchema;
use churnguard_core::{Prediction, RawInput, Result};
use std::path::Path;
use std::sync::Arc;
use tracing::info;

/// A ready-to-serve churn predictor
#[derive(Debug, Clone)]
pub struct ChurnPredictor {
    model: ChurnModel,
    adapter: FeatureAdapter,
}

impl ChurnPredictor {
    /// Wire an adapter to a loaded model
    pub fn new(model: ChurnModel) -> Self {
        let adapter = FeatureAdapter::new(Arc::clone(model.schema()));
        Self { model, adapter }
    }

    /// Load the artifact at `path` and build a predictor
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let model = ChurnModel::load(path)?;
        info!(
            model = %model.metadata().name,
            threshold = model.threshold(),
            "churn predictor ready"
        );
        Ok(Self::new(model))
    }

    /// Build a predictor from an in-memory artifact
    pub fn from_artifact(artifact: ModelArtifact) -> Result<Self> {
        Ok(Self::new(ChurnModel::from_artifact(artifact)?))
    }

    /// Run the full pipeline for one request: validate, encode, align,
    /// score. Synchronous, side-effect free, idempotent.
    pub fn predict(&self, input: &RawInput) -> Result<Prediction> {
        let features = self.adapter.feature_vector(input)?;
        let proba = self.model.predict_proba(&features)?;
        let label = self.model.predict(&features)?;
        Ok(Prediction::new(label, proba[1]))
    }

    /// Metadata of the loaded model
    pub fn metadata(&self) -> &ModelMetadata {
        self.model.metadata()
    }

    /// The ordered feature schema in use
    pub fn schema(&self) -> &Arc<FeatureSchema> {
        self.model.schema()
    }

    /// Decision threshold of the loaded model
    pub fn threshold(&self) -> f64 {
        self.model.threshold()
    }
}
