//! ChurnGuard Classifier
//!
//! Model artifact loading, feature adaptation, and inference for the
//! ChurnGuard churn predictor.
//!
//! The pipeline for one request:
//! 1. `FeatureAdapter` validates a `RawInput` and encodes it
//!    (numeric pass-through, Yes/No -> 1/0, drop-first one-hot)
//! 2. the produced columns are aligned to the model's declared
//!    `FeatureSchema` (missing -> 0, extras dropped, schema order)
//! 3. `ChurnModel` scores the vector and thresholds the churn-class
//!    probability
//!
//! `ChurnPredictor` ties the three together behind a load-once handle.

pub mod adapter;
pub mod artifact;
pub mod model;
pub mod predictor;
pub mod schema;

pub use adapter::FeatureAdapter;
pub use artifact::{ModelArtifact, ModelMetadata};
pub use model::ChurnModel;
pub use predictor::ChurnPredictor;
pub use schema::{FeatureSchema, FeatureVector};

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::adapter::FeatureAdapter;
    pub use crate::artifact::{ModelArtifact, ModelMetadata};
    pub use crate::model::ChurnModel;
    pub use crate::predictor::ChurnPredictor;
    pub use crate::schema::{FeatureSchema, FeatureVector};
    pub use churnguard_core::prelude::*;
}
