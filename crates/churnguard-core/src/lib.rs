//! ChurnGuard Core
//!
//! Shared types and error handling for the ChurnGuard churn predictor.
//!
//! This crate provides:
//! - `RawInput` and the bounded categorical domains the form collects
//! - `ChurnLabel` and `Prediction` result types
//! - The error type shared by the classifier and the CLI

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{
    ChurnLabel, Contract, InternetService, PaymentMethod, Prediction, RawInput, YesNo,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        ChurnLabel, Contract, InternetService, PaymentMethod, Prediction, RawInput, YesNo,
    };
}
