//! Glosses the words of a text a learner is unlikely to know.
//!
//! ```bash
//! # JSON-lines service on stdin/stdout
//! echo '{"source_lang":"de","target_lang":"en","freqThreshold":5000,"show_all":false,"text":"Ich rufe dich an."}' | gloss serve
//!
//! # one-shot
//! gloss annotate --threshold 5000 "Der Hund bellt."
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use gloss_config::Config;
use gloss_core::AnnotationQuery;
use tokio::io::BufReader;
use tokio::signal;
use tracing_subscriber::EnvFilter;

pub mod handler;
pub mod server;
pub mod state;

use self::state::AppState;

#[derive(Parser)]
#[command(name = "gloss")]
#[command(version)]
#[command(about = "Dictionary glosses for language learners")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON config file (defaults come from the environment)
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    /// Directory holding dict/ and lang/
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Log as JSON
    #[arg(long, global = true)]
    json_logs: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Answer JSON requests read line by line from stdin
    Serve,

    /// Annotate one text and print the JSON response
    Annotate {
        text: String,

        #[arg(long, default_value = "de")]
        from: String,

        #[arg(long, default_value = "en")]
        to: String,

        /// Words ranked up to this are treated as known
        #[arg(long)]
        threshold: Option<u32>,

        /// Include placeholders and redundant meanings
        #[arg(long)]
        show_all: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::new(),
    };
    if let Some(data_dir) = cli.data_dir {
        config.data_dir = data_dir;
    }

    let state = Arc::new(AppState::load(config)?);

    match cli.command {
        Commands::Serve => {
            // Shutdown future (Ctrl+C)
            let shutdown = async {
                if let Err(e) = signal::ctrl_c().await {
                    tracing::error!("failed to listen for ctrl+c: {e}");
                    std::future::pending::<()>().await;
                }
            };

            let input = BufReader::new(tokio::io::stdin());
            server::run(state, input, tokio::io::stdout(), shutdown).await?;
        }
        Commands::Annotate {
            text,
            from,
            to,
            threshold,
            show_all,
        } => {
            let query = AnnotationQuery {
                source_lang: from,
                target_lang: to,
                freq_threshold: threshold.unwrap_or(state.config.freq_threshold),
                show_all,
                text,
            };
            let response = handler::annotate(&state.engine, query);
            println!("{}", serde_json::to_string_pretty(&response)?);
            if response.is_error() {
                anyhow::bail!("annotation failed");
            }
        }
    }

    Ok(())
}

/// Logs go to stderr; stdout carries responses
fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[cfg(test)]
mod tests;
