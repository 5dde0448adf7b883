use churnguard_core::{Contract, InternetService, PaymentMethod, YesNo};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "churnguard")]
#[command(
    author,
    version,
    about = "Customer churn prediction from the command line"
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Predict churn risk for one customer
    Predict {
        /// Model artifact path (overrides the config file)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Config file path
        #[arg(long, default_value = "./churnguard.yaml")]
        config: PathBuf,

        /// Tenure in months (0-72)
        #[arg(long, default_value = "12")]
        tenure: u32,

        /// Monthly charges in dollars (0-150)
        #[arg(long, default_value = "70.0")]
        monthly_charges: f64,

        /// Total charges in dollars (0-10000)
        #[arg(long, default_value = "1000.0")]
        total_charges: f64,

        /// Senior citizen: Yes or No
        #[arg(long, default_value = "No", value_parser = parse_yes_no)]
        senior_citizen: YesNo,

        /// Has partner: Yes or No
        #[arg(long, default_value = "No", value_parser = parse_yes_no)]
        partner: YesNo,

        /// Has dependents: Yes or No
        #[arg(long, default_value = "No", value_parser = parse_yes_no)]
        dependents: YesNo,

        /// Contract: Month-to-month, One year, or Two year
        #[arg(long, default_value = "Month-to-month", value_parser = parse_contract)]
        contract: Contract,

        /// Payment method: Electronic check, Mailed check,
        /// Bank transfer (automatic), or Credit card (automatic)
        #[arg(long, default_value = "Electronic check", value_parser = parse_payment_method)]
        payment_method: PaymentMethod,

        /// Internet service: DSL, Fiber optic, or No
        #[arg(long, default_value = "DSL", value_parser = parse_internet_service)]
        internet_service: InternetService,

        /// Emit the result as JSON
        #[arg(long)]
        json: bool,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },

    /// Inspect a model artifact: metadata, threshold, feature schema
    Inspect {
        /// Model artifact path (overrides the config file)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Config file path
        #[arg(long, default_value = "./churnguard.yaml")]
        config: PathBuf,

        /// Emit the artifact summary as JSON
        #[arg(long)]
        json: bool,

        /// Enable verbose logging
        #[arg(short, long)]
        verbose: bool,
    },
}

fn parse_yes_no(s: &str) -> Result<YesNo, String> {
    s.parse()
}

fn parse_contract(s: &str) -> Result<Contract, String> {
    s.parse()
}

fn parse_payment_method(s: &str) -> Result<PaymentMethod, String> {
    s.parse()
}

fn parse_internet_service(s: &str) -> Result<InternetService, String> {
    s.parse()
}
