use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;

use commands::Session;

#[derive(Parser, Debug)]
#[command(name = "underfs")]
#[command(about = "underfs CLI - resolve and check under file system backends")]
#[command(version)]
struct Cli {
    /// Configuration file (flat TOML table of property names)
    #[arg(long, global = true, env = "UNDERFS_CONF")]
    conf: Option<PathBuf>,

    /// Override a property, e.g. -D fs.swift.simulation=true
    #[arg(short = 'D', value_name = "NAME=VALUE", global = true)]
    define: Vec<String>,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum LogFormat {
    Pretty,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Find the factory for a URI and construct its client
    Check {
        /// URI to resolve, e.g. swift://container/path
        uri: String,
    },

    /// List every property with its configured and override values
    Keys,
}

fn init_logging(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
    );
    let registry = tracing_subscriber::registry().with(filter);
    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_format);

    let session = Session::open(cli.conf.as_deref(), &cli.define)?;
    let mut stdout = std::io::stdout().lock();

    match cli.command {
        Commands::Check { uri } => {
            tracing::debug!("Checking {}", uri);
            commands::run_check(&session, &uri, &mut stdout)?;
        }
        Commands::Keys => {
            commands::run_keys(&session, &mut stdout)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_defines() {
        let cli = Cli::parse_from([
            "underfs",
            "-D",
            "fs.swift.user=alice",
            "-D",
            "fs.swift.simulation=true",
            "check",
            "swift://container",
        ]);
        assert_eq!(cli.define.len(), 2);
        assert_eq!(cli.log_format, LogFormat::Pretty);
        assert!(matches!(cli.command, Commands::Check { ref uri } if uri == "swift://container"));
    }

    #[test]
    fn test_parse_json_logging() {
        let cli = Cli::parse_from(["underfs", "keys", "--log-format", "json"]);
        assert_eq!(cli.log_format, LogFormat::Json);
        assert!(matches!(cli.command, Commands::Keys));
    }
}
