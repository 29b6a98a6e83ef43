use crate::cli::{Cli, describe};
use crate::error::CliError;
use clap::Parser;
use tracing_subscriber::Layer;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

mod cli;
mod error;

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let env_filter = tracing_subscriber::EnvFilter::from_default_env();
    let fmt_layer = tracing_subscriber::fmt::layer()
        .pretty()
        .with_filter(env_filter);
    tracing_subscriber::registry().with(fmt_layer).init();

    let cli = Cli::parse();

    match cli.into_settings() {
        Ok(settings) => {
            println!("🚀 Generation settings are valid!");
            println!("{}", describe(&settings));
        }
        Err(error) => {
            match error {
                CliError::InvalidLocation { location, reason } => {
                    eprintln!("😢 Invalid location detected: {location} ({reason})");
                }
                CliError::InvalidWorkingDirectory(path) => {
                    eprintln!("😢 Working directory cannot be used as input base: {path}");
                }
                CliError::GeneralIo(_) => {
                    eprintln!("😭 Unexpected IO error");
                }
                CliError::Settings(error) => {
                    eprintln!(
                        "😢 Missing {}: {}",
                        error.missing_field().field_name(),
                        error.missing_field()
                    );
                }
            }
            std::process::exit(1);
        }
    }

    Ok(())
}
