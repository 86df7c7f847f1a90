use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing::info;

use inkguard::config::Config;
use inkguard::integrity::prompt::evaluate_submission;
use inkguard::models::{AuthorId, SubmissionTelemetry};
use inkguard::output::terminal;
use inkguard::review::http::HttpReviewer;
use inkguard::review::traits::ManuscriptReviewer;
use inkguard::sanitize::{emoji, profile};

/// Inkguard: Zero-PII author display and submission integrity checks.
///
/// Turns internal author records into public-safe profiles and scores
/// manuscript submissions for pasted content.
#[derive(Parser)]
#[command(name = "inkguard", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sanitize author profiles from a JSON file (one object or an array)
    Sanitize {
        /// Path to the JSON file
        file: PathBuf,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Show the emoji avatar assigned to an author id
    Avatar {
        /// Author id (integers are treated as numeric ids)
        id: String,
    },

    /// Compute paste-ratio integrity metadata
    Integrity {
        /// Number of characters that were pasted
        #[arg(long)]
        paste_count: i64,

        /// Total characters in the submission
        #[arg(long)]
        total_characters: i64,
    },

    /// Print the reviewer prompt for a submission
    Prompt(SubmissionArgs),

    /// Send a submission to the configured reviewer
    Review(SubmissionArgs),

    /// Start the JSON API server
    #[cfg(feature = "web")]
    Serve {
        /// Port to listen on (default: INKGUARD_PORT or 8080)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (default: INKGUARD_BIND or 127.0.0.1)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[derive(Args)]
struct SubmissionArgs {
    /// Assignment text shown to the author
    #[arg(long)]
    task: String,

    /// Path to the manuscript text
    #[arg(long)]
    manuscript: PathBuf,

    /// Number of characters that were pasted
    #[arg(long, default_value = "0")]
    paste_count: i64,

    /// Total characters in the submission
    #[arg(long, default_value = "0")]
    total_characters: i64,
}

impl SubmissionArgs {
    fn load(&self) -> Result<SubmissionTelemetry> {
        let manuscript_text = std::fs::read_to_string(&self.manuscript)
            .with_context(|| format!("Failed to read {}", self.manuscript.display()))?;
        Ok(SubmissionTelemetry {
            task: self.task.clone(),
            manuscript_text,
            paste_count: self.paste_count,
            total_characters: self.total_characters,
        })
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("inkguard=info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Sanitize { file, json } => {
            let raw = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let profiles = profile::parse_profiles(&raw)?;
            let sanitized = profile::sanitize_profiles(&profiles, &config.avatar_pool);
            info!(total = sanitized.len(), "Sanitized profiles");

            if json {
                println!("{}", serde_json::to_string_pretty(&sanitized)?);
            } else {
                terminal::display_profiles(&sanitized);
            }
        }

        Commands::Avatar { id } => {
            let id = AuthorId::parse(&id);
            println!("{}", emoji::assign_emoji(&id, &config.avatar_pool));
        }

        Commands::Integrity {
            paste_count,
            total_characters,
        } => {
            let integrity = inkguard::integrity::score::calculate_integrity(
                paste_count,
                total_characters,
                &config.thresholds,
            );
            terminal::display_integrity(&integrity);
        }

        Commands::Prompt(args) => {
            let submission = args.load()?;
            let evaluation = evaluate_submission(&submission, &config.thresholds);
            println!("{}", evaluation.prompt);
        }

        Commands::Review(args) => {
            config.require_reviewer()?;
            let submission = args.load()?;
            let evaluation = evaluate_submission(&submission, &config.thresholds);
            terminal::display_integrity(&evaluation.integrity);

            println!("\n{}", "Requesting review...".dimmed());
            let reviewer = create_reviewer(&config);
            let feedback = reviewer.review(&evaluation.prompt).await?;
            terminal::display_feedback(&feedback);
        }

        #[cfg(feature = "web")]
        Commands::Serve { port, bind } => {
            let reviewer = if config.require_reviewer().is_ok() {
                Some(create_reviewer(&config))
            } else {
                info!("REVIEW_API_KEY not set; /api/review will return 503");
                None
            };
            let port = port.unwrap_or(config.port);
            let bind = bind.unwrap_or_else(|| config.bind.clone());
            inkguard::web::run_server(config, reviewer, port, &bind).await?;
        }
    }

    Ok(())
}

/// Create the reviewer client from configuration.
fn create_reviewer(config: &Config) -> Arc<dyn ManuscriptReviewer> {
    info!(model = %config.review_model, "Using HTTP manuscript reviewer");
    Arc::new(HttpReviewer::new(
        config.review_api_url.clone(),
        config.review_api_key.clone(),
        config.review_model.clone(),
    ))
}
