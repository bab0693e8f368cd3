use std::process::ExitCode;

use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use resmio_client::cli::run;
use resmio_client::{Cli, ClientConfig, ReservationClient};

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so stdout only carries the result
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("error")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ClientConfig::from_env();

    let outcome = run(&cli, Local::now().date_naive(), |facility| {
        ReservationClient::new(facility, &config)
    })
    .await;

    println!("{}", outcome.message);
    ExitCode::from(outcome.code)
}
