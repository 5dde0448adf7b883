use churnguard_classifier::ChurnPredictor;
use churnguard_core::RawInput;
use churnguard_demo::cli::{Cli, Commands};
use churnguard_demo::config::DemoConfig;
use churnguard_demo::render::{render_prediction, PredictionReport};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Predict {
            model,
            config,
            tenure,
            monthly_charges,
            total_charges,
            senior_citizen,
            partner,
            dependents,
            contract,
            payment_method,
            internet_service,
            json,
            verbose,
        } => {
            init_logging(verbose);

            let config = DemoConfig::load(&config, model)?;
            let predictor = load_or_report(&config);

            let input = RawInput {
                tenure,
                monthly_charges,
                total_charges,
                senior_citizen,
                partner,
                dependents,
                contract,
                payment_method,
                internet_service,
            };

            match predictor.predict(&input) {
                Ok(prediction) => {
                    if json {
                        let report = PredictionReport::new(&prediction, predictor.metadata());
                        println!("{}", serde_json::to_string_pretty(&report)?);
                    } else {
                        println!("{}", render_prediction(&prediction));
                    }
                }
                Err(e) => {
                    // A bad request is not fatal; report and let the
                    // user retry with corrected flags.
                    eprintln!("Prediction failed: {e}");
                    std::process::exit(1);
                }
            }
        }

        Commands::Inspect {
            model,
            config,
            json,
            verbose,
        } => {
            init_logging(verbose);

            let config = DemoConfig::load(&config, model)?;
            let predictor = load_or_report(&config);
            let metadata = predictor.metadata();

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "name": metadata.name,
                        "version": metadata.version,
                        "threshold": predictor.threshold(),
                        "feature_names": predictor.schema().names(),
                    }))?
                );
            } else {
                println!("Model:     {}", metadata.name);
                println!("Version:   {}", metadata.version);
                println!("Threshold: {}", predictor.threshold());
                println!("Features ({}):", metadata.num_features);
                for name in predictor.schema().names() {
                    println!("  {name}");
                }
            }
        }
    }

    Ok(())
}

/// Load the model or report a clear, non-panicking failure. With no
/// usable model the predict action is unavailable, so exit after the
/// message.
fn load_or_report(config: &DemoConfig) -> ChurnPredictor {
    match ChurnPredictor::load(&config.model_path) {
        Ok(predictor) => predictor,
        Err(e) => {
            eprintln!("Model failed to load: {e}");
            eprintln!(
                "Prediction is unavailable. Check that '{}' exists and is a valid artifact.",
                config.model_path.display()
            );
            std::process::exit(2);
        }
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}
