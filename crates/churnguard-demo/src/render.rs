//! Verdict rendering

use churnguard_classifier::ModelMetadata;
use churnguard_core::Prediction;
use serde::Serialize;

/// Machine-readable prediction report for `--json` output
#[derive(Debug, Serialize)]
pub struct PredictionReport<'a> {
    pub label: churnguard_core::ChurnLabel,
    pub probability: f64,
    pub model: &'a str,
    pub version: &'a str,
}

impl<'a> PredictionReport<'a> {
    pub fn new(prediction: &Prediction, metadata: &'a ModelMetadata) -> Self {
        Self {
            label: prediction.label,
            probability: prediction.probability,
            model: &metadata.name,
            version: &metadata.version,
        }
    }
}

/// Human-readable verdict, probability to two decimals
pub fn render_prediction(prediction: &Prediction) -> String {
    let verdict = if prediction.label.is_churn() {
        "High Risk of Churn"
    } else {
        "Low Risk of Churn"
    };
    format!(
        "{verdict}\n  Probability: {:.2}",
        prediction.probability
    )
}
