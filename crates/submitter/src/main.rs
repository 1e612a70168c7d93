use std::process::ExitCode;

use application_submitter::{ApplicationConfig, run};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Variables already in the environment win over the .env file.
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("Error: failed to load .env: {e}");
            return ExitCode::FAILURE;
        }
    }
    let config = ApplicationConfig::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.log_level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(&config).await {
        Ok(receipt) => {
            println!("Receipt: {receipt}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
