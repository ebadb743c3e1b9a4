use anyhow::Result;
use awsenv_core::{CredentialStore, CredentialsConfig};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod error;
mod output;

use cli::Cli;
use error::AwsEnvError;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        e.print_diagnostic();
        std::process::exit(1);
    }

    Ok(())
}

fn init_tracing(verbose: u8) {
    // Check for RUST_LOG env var first, then fall back to verbosity flag
    let filter = if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::EnvFilter::from_default_env()
    } else {
        let level = match verbose {
            0 => "aws_env=warn,awsenv_core=warn",
            1 => "aws_env=info,awsenv_core=info",
            2 => "aws_env=debug,awsenv_core=debug",
            _ => "aws_env=trace,awsenv_core=trace",
        };
        tracing_subscriber::EnvFilter::new(level)
    };

    // stdout is reserved for eval-able output
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_thread_ids(false)
                .with_thread_names(false)
                .compact(),
        )
        .init();

    debug!("Tracing initialized with verbosity level: {}", verbose);
}

fn run(cli: &Cli) -> error::Result<()> {
    let config = CredentialsConfig::resolve(cli.credentials_file.as_deref())?;
    let path = config.display_path();
    debug!("Using credentials file: {}", path);

    let store = CredentialStore::load(&config)?;
    let mut stdout = std::io::stdout().lock();

    if cli.list {
        // just list the profiles and get out
        if store.is_empty() {
            return Err(AwsEnvError::NoProfiles { path });
        }
        output::write_names(&mut stdout, &store.sorted_names())?;
        return Ok(());
    }

    let profile = store
        .get(&cli.profile)
        .ok_or_else(|| AwsEnvError::ProfileNotFound {
            name: cli.profile.clone(),
            path: path.clone(),
        })?;

    info!("Exporting profile '{}' from {}", profile.name(), path);
    output::write_profile(&mut stdout, profile, &config.env_names, cli.export())?;
    Ok(())
}
