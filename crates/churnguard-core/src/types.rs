//! Core types for ChurnGuard

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Maximum tenure in months accepted by the form
pub const TENURE_MAX: u32 = 72;

/// Maximum monthly charge in dollars accepted by the form
pub const MONTHLY_CHARGES_MAX: f64 = 150.0;

/// Maximum total charge in dollars accepted by the form
pub const TOTAL_CHARGES_MAX: f64 = 10_000.0;

/// A two-valued categorical answer ("Yes"/"No")
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    No,
    Yes,
}

impl YesNo {
    /// Indicator value the classifier was trained on: Yes -> 1, No -> 0
    pub fn indicator(self) -> f64 {
        match self {
            Self::Yes => 1.0,
            Self::No => 0.0,
        }
    }
}

impl Default for YesNo {
    fn default() -> Self {
        Self::No
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yes => write!(f, "Yes"),
            Self::No => write!(f, "No"),
        }
    }
}

impl FromStr for YesNo {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yes" => Ok(Self::Yes),
            "no" => Ok(Self::No),
            other => Err(format!("expected 'Yes' or 'No', got '{other}'")),
        }
    }
}

/// Contract type. "Month-to-month" is the reference level dropped
/// during training, so it carries no indicator column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Contract {
    #[serde(rename = "Month-to-month")]
    MonthToMonth,
    #[serde(rename = "One year")]
    OneYear,
    #[serde(rename = "Two year")]
    TwoYear,
}

impl Contract {
    /// Indicator columns for the non-reference levels, in training order
    pub const COLUMNS: [&'static str; 2] = ["Contract_One year", "Contract_Two year"];

    /// Indicator column this level sets, or None for the reference level
    pub fn column(self) -> Option<&'static str> {
        match self {
            Self::MonthToMonth => None,
            Self::OneYear => Some(Self::COLUMNS[0]),
            Self::TwoYear => Some(Self::COLUMNS[1]),
        }
    }
}

impl Default for Contract {
    fn default() -> Self {
        Self::MonthToMonth
    }
}

impl fmt::Display for Contract {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MonthToMonth => write!(f, "Month-to-month"),
            Self::OneYear => write!(f, "One year"),
            Self::TwoYear => write!(f, "Two year"),
        }
    }
}

impl FromStr for Contract {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "month-to-month" | "month to month" => Ok(Self::MonthToMonth),
            "one year" => Ok(Self::OneYear),
            "two year" => Ok(Self::TwoYear),
            other => Err(format!(
                "expected 'Month-to-month', 'One year', or 'Two year', got '{other}'"
            )),
        }
    }
}

/// Payment method. "Bank transfer (automatic)" is the reference level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentMethod {
    #[serde(rename = "Bank transfer (automatic)")]
    BankTransferAutomatic,
    #[serde(rename = "Credit card (automatic)")]
    CreditCardAutomatic,
    #[serde(rename = "Electronic check")]
    ElectronicCheck,
    #[serde(rename = "Mailed check")]
    MailedCheck,
}

impl PaymentMethod {
    /// Indicator columns for the non-reference levels, in training order
    pub const COLUMNS: [&'static str; 3] = [
        "PaymentMethod_Credit card (automatic)",
        "PaymentMethod_Electronic check",
        "PaymentMethod_Mailed check",
    ];

    /// Indicator column this level sets, or None for the reference level
    pub fn column(self) -> Option<&'static str> {
        match self {
            Self::BankTransferAutomatic => None,
            Self::CreditCardAutomatic => Some(Self::COLUMNS[0]),
            Self::ElectronicCheck => Some(Self::COLUMNS[1]),
            Self::MailedCheck => Some(Self::COLUMNS[2]),
        }
    }
}

impl Default for PaymentMethod {
    fn default() -> Self {
        Self::ElectronicCheck
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BankTransferAutomatic => write!(f, "Bank transfer (automatic)"),
            Self::CreditCardAutomatic => write!(f, "Credit card (automatic)"),
            Self::ElectronicCheck => write!(f, "Electronic check"),
            Self::MailedCheck => write!(f, "Mailed check"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bank transfer (automatic)" | "bank transfer" => Ok(Self::BankTransferAutomatic),
            "credit card (automatic)" | "credit card" => Ok(Self::CreditCardAutomatic),
            "electronic check" => Ok(Self::ElectronicCheck),
            "mailed check" => Ok(Self::MailedCheck),
            other => Err(format!(
                "expected 'Electronic check', 'Mailed check', 'Bank transfer (automatic)', \
                 or 'Credit card (automatic)', got '{other}'"
            )),
        }
    }
}

/// Internet service type. "DSL" is the reference level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InternetService {
    #[serde(rename = "DSL")]
    Dsl,
    #[serde(rename = "Fiber optic")]
    FiberOptic,
    #[serde(rename = "No")]
    No,
}

impl InternetService {
    /// Indicator columns for the non-reference levels, in training order
    pub const COLUMNS: [&'static str; 2] =
        ["InternetService_Fiber optic", "InternetService_No"];

    /// Indicator column this level sets, or None for the reference level
    pub fn column(self) -> Option<&'static str> {
        match self {
            Self::Dsl => None,
            Self::FiberOptic => Some(Self::COLUMNS[0]),
            Self::No => Some(Self::COLUMNS[1]),
        }
    }
}

impl Default for InternetService {
    fn default() -> Self {
        Self::Dsl
    }
}

impl fmt::Display for InternetService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dsl => write!(f, "DSL"),
            Self::FiberOptic => write!(f, "Fiber optic"),
            Self::No => write!(f, "No"),
        }
    }
}

impl FromStr for InternetService {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dsl" => Ok(Self::Dsl),
            "fiber optic" => Ok(Self::FiberOptic),
            "no" => Ok(Self::No),
            other => Err(format!(
                "expected 'DSL', 'Fiber optic', or 'No', got '{other}'"
            )),
        }
    }
}

/// One prediction request's worth of customer attributes
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInput {
    /// Tenure in months (0..=72)
    pub tenure: u32,

    /// Monthly charges in dollars (0.0..=150.0)
    pub monthly_charges: f64,

    /// Total charges in dollars (0.0..=10000.0)
    pub total_charges: f64,

    /// Whether the customer is a senior citizen
    pub senior_citizen: YesNo,

    /// Whether the customer has a partner
    pub partner: YesNo,

    /// Whether the customer has dependents
    pub dependents: YesNo,

    /// Contract type
    #[serde(default)]
    pub contract: Contract,

    /// Payment method
    #[serde(default)]
    pub payment_method: PaymentMethod,

    /// Internet service type
    #[serde(default)]
    pub internet_service: InternetService,
}

impl RawInput {
    /// Check every numeric field against its documented bounds.
    /// Boundary values are valid.
    pub fn validate(&self) -> Result<()> {
        if self.tenure > TENURE_MAX {
            return Err(Error::input(format!(
                "tenure must be between 0 and {TENURE_MAX} months, got {}",
                self.tenure
            )));
        }
        for (name, value, max) in [
            ("monthly charges", self.monthly_charges, MONTHLY_CHARGES_MAX),
            ("total charges", self.total_charges, TOTAL_CHARGES_MAX),
        ] {
            if !value.is_finite() || !(0.0..=max).contains(&value) {
                return Err(Error::input(format!(
                    "{name} must be between 0 and {max}, got {value}"
                )));
            }
        }
        Ok(())
    }
}

impl Default for RawInput {
    /// Form defaults: the values the dashboard widgets start at
    fn default() -> Self {
        Self {
            tenure: 12,
            monthly_charges: 70.0,
            total_charges: 1000.0,
            senior_citizen: YesNo::No,
            partner: YesNo::No,
            dependents: YesNo::No,
            contract: Contract::default(),
            payment_method: PaymentMethod::default(),
            internet_service: InternetService::default(),
        }
    }
}

/// Binary churn verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChurnLabel {
    NoChurn,
    Churn,
}

impl ChurnLabel {
    /// Numeric class index: no-churn -> 0, churn -> 1
    pub fn class_index(self) -> usize {
        match self {
            Self::NoChurn => 0,
            Self::Churn => 1,
        }
    }

    /// Whether this verdict flags the customer as high risk
    pub fn is_churn(self) -> bool {
        matches!(self, Self::Churn)
    }
}

impl fmt::Display for ChurnLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoChurn => write!(f, "no-churn"),
            Self::Churn => write!(f, "churn"),
        }
    }
}

/// Result of one prediction: verdict plus probability of the churn class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    /// Predicted label
    pub label: ChurnLabel,

    /// Probability of the positive (churn) class, in [0, 1]
    pub probability: f64,
}

impl Prediction {
    /// Create a new prediction
    pub fn new(label: ChurnLabel, probability: f64) -> Self {
        Self { label, probability }
    }
}
