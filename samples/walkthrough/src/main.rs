//! Walkthrough Entry Point
//!
//! Parses the configuration, installs the tracing subscriber and prints the
//! selected demos to stdout.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use walkthrough::config::WalkthroughConfig;
use walkthrough::runner;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "walkthrough=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match WalkthroughConfig::parse().validate() {
        Ok(config) => config,
        Err(error) => {
            tracing::error!("Invalid configuration: {error}");
            return ExitCode::FAILURE;
        }
    };
    tracing::info!(demo = ?config.demo, "Starting walkthrough");

    runner::run(&config, &mut |line| println!("{line}"));

    ExitCode::SUCCESS
}
