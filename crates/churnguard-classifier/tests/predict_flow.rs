//! End-to-end predictor tests over on-disk artifacts

use churnguard_classifier::{ChurnPredictor, FeatureAdapter, ModelArtifact};
use churnguard_core::{ChurnLabel, Contract, Error, InternetService, RawInput, YesNo};
use std::path::PathBuf;
use std::sync::Arc;

/// The demographic six-column artifact the dashboard ships with
fn demographic_artifact() -> serde_json::Value {
    serde_json::json!({
        "name": "churn-logreg",
        "version": "1.0.0",
        "feature_names": [
            "SeniorCitizen", "tenure", "MonthlyCharges",
            "TotalCharges", "Partner_Yes", "Dependents_Yes"
        ],
        "coefficients": [0.31, -0.045, 0.012, -0.0002, -0.21, -0.17],
        "intercept": -0.8,
        "threshold": 0.5
    })
}

/// The richer contract/payment/internet artifact variant
fn service_artifact() -> serde_json::Value {
    serde_json::json!({
        "name": "churn-logreg-service",
        "version": "1.0.0",
        "feature_names": [
            "tenure", "MonthlyCharges", "TotalCharges",
            "Contract_One year", "Contract_Two year",
            "PaymentMethod_Credit card (automatic)",
            "PaymentMethod_Electronic check",
            "PaymentMethod_Mailed check",
            "InternetService_Fiber optic", "InternetService_No"
        ],
        "coefficients": [-0.04, 0.01, -0.0001, -0.6, -1.2, -0.1, 0.4, 0.05, 0.7, -0.5],
        "intercept": -0.3,
        "threshold": 0.5
    })
}

fn write_artifact(dir: &tempfile::TempDir, value: &serde_json::Value) -> PathBuf {
    let path = dir.path().join("churn_model.json");
    std::fs::write(&path, serde_json::to_string_pretty(value).unwrap()).unwrap();
    path
}

#[test]
fn scenario_from_the_dashboard_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(&dir, &demographic_artifact());
    let predictor = ChurnPredictor::load(&path).unwrap();

    let input = RawInput {
        tenure: 12,
        monthly_charges: 70.0,
        total_charges: 1000.0,
        senior_citizen: YesNo::No,
        partner: YesNo::Yes,
        dependents: YesNo::No,
        ..RawInput::default()
    };

    // Feature vector matches the trained schema, key for key, in order
    let adapter = FeatureAdapter::new(Arc::clone(predictor.schema()));
    let vector = adapter.feature_vector(&input).unwrap();
    let pairs: Vec<_> = vector.iter().collect();
    assert_eq!(
        pairs,
        vec![
            ("SeniorCitizen", 0.0),
            ("tenure", 12.0),
            ("MonthlyCharges", 70.0),
            ("TotalCharges", 1000.0),
            ("Partner_Yes", 1.0),
            ("Dependents_Yes", 0.0),
        ]
    );

    let prediction = predictor.predict(&input).unwrap();
    assert!((0.0..=1.0).contains(&prediction.probability));
    // High risk iff the label is churn
    assert_eq!(
        prediction.label.is_churn(),
        prediction.probability >= predictor.threshold()
    );
}

#[test]
fn prediction_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(&dir, &demographic_artifact());
    let predictor = ChurnPredictor::load(&path).unwrap();

    let input = RawInput::default();
    let first = predictor.predict(&input).unwrap();
    let second = predictor.predict(&input).unwrap();
    assert_eq!(first, second);
}

#[test]
fn service_schema_artifact_uses_one_hot_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(&dir, &service_artifact());
    let predictor = ChurnPredictor::load(&path).unwrap();
    assert_eq!(predictor.schema().len(), 10);

    // Fiber optic carries a positive weight in this artifact, a two
    // year contract a strongly negative one.
    let risky = RawInput {
        internet_service: InternetService::FiberOptic,
        ..RawInput::default()
    };
    let safe = RawInput {
        contract: Contract::TwoYear,
        ..RawInput::default()
    };
    let p_risky = predictor.predict(&risky).unwrap().probability;
    let p_safe = predictor.predict(&safe).unwrap().probability;
    assert!(p_risky > p_safe);
}

#[test]
fn missing_artifact_is_reported_not_fatal() {
    let err = ChurnPredictor::load("/nonexistent/churn_model.json").unwrap_err();
    assert!(err.is_load_failure());
    assert!(err.to_string().contains("churn_model.json"));
}

#[test]
fn malformed_artifact_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("churn_model.json");
    std::fs::write(&path, "not json at all").unwrap();
    let err = ChurnPredictor::load(&path).unwrap_err();
    assert!(err.is_load_failure());
}

#[test]
fn coefficient_mismatch_is_a_load_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut value = demographic_artifact();
    value["coefficients"] = serde_json::json!([0.1, 0.2]);
    let path = write_artifact(&dir, &value);
    let err = ChurnPredictor::load(&path).unwrap_err();
    assert!(err.is_load_failure());
}

#[test]
fn bad_input_fails_the_request_and_the_session_survives() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(&dir, &demographic_artifact());
    let predictor = ChurnPredictor::load(&path).unwrap();

    let bad = RawInput {
        monthly_charges: 151.0,
        ..RawInput::default()
    };
    let err = predictor.predict(&bad).unwrap_err();
    assert!(matches!(err, Error::Input(_)));

    // Retry with a corrected input succeeds on the same predictor
    let good = RawInput::default();
    assert!(predictor.predict(&good).is_ok());
}

#[test]
fn artifact_from_memory_matches_artifact_from_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(&dir, &demographic_artifact());
    let from_disk = ChurnPredictor::load(&path).unwrap();
    let from_memory = ChurnPredictor::from_artifact(
        serde_json::from_value::<ModelArtifact>(demographic_artifact()).unwrap(),
    )
    .unwrap();

    let input = RawInput {
        tenure: 0,
        senior_citizen: YesNo::Yes,
        ..RawInput::default()
    };
    assert_eq!(
        from_disk.predict(&input).unwrap(),
        from_memory.predict(&input).unwrap()
    );
}

#[test]
fn boundary_inputs_predict_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_artifact(&dir, &demographic_artifact());
    let predictor = ChurnPredictor::load(&path).unwrap();

    for (tenure, monthly, total) in [(0, 0.0, 0.0), (72, 150.0, 10_000.0)] {
        let input = RawInput {
            tenure,
            monthly_charges: monthly,
            total_charges: total,
            ..RawInput::default()
        };
        let prediction = predictor.predict(&input).unwrap();
        assert!((0.0..=1.0).contains(&prediction.probability));
        assert!(matches!(
            prediction.label,
            ChurnLabel::Churn | ChurnLabel::NoChurn
        ));
    }
}
