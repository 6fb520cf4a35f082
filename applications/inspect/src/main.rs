/// Cadence Inspect - command line access to stream details documents
use cadence_inspect::{describe, parse, read_input, strip};
use chrono::Utc;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "cadence-inspect")]
#[command(about = "Inspect Cadence stream details documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print uri, format and expiry state
    Show {
        /// Document path, or - for stdin
        #[arg(default_value = "-")]
        path: String,
    },
    /// Print the transmissible form, internal fields removed
    Strip {
        /// Document path, or - for stdin
        #[arg(default_value = "-")]
        path: String,
    },
    /// Check that a document is a valid transmissible form
    Validate {
        /// Document path, or - for stdin
        #[arg(default_value = "-")]
        path: String,
    },
}

fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cadence_inspect=info,cadence_stream=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Show { path } => {
            let details = parse(&read_input(&path)?)?;
            println!("{}", describe(&details, Utc::now()));
        }
        Commands::Strip { path } => {
            println!("{}", strip(&read_input(&path)?)?);
        }
        Commands::Validate { path } => {
            let details = parse(&read_input(&path)?)?;
            tracing::info!(uri = %details, "valid stream details");
            if details.is_expired() {
                tracing::warn!(uri = %details, "stream details are expired");
            }
            println!("ok: {details}");
        }
    }

    Ok(())
}
