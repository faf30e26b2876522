mod console;
mod prompt;
mod tools;

use clap::{Parser, Subcommand};
use sprout_core::config;
use sprout_reminders::ReminderManager;
use sprout_triage::SymptomReport;
use std::sync::Arc;

#[derive(Parser)]
#[command(
    name = "sprout",
    version,
    about = "Sprout — pediatric post-discharge assistant toolkit"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive medication reminder console.
    Console,
    /// Evaluate reported symptoms once and print the assessment as JSON.
    Triage {
        /// Body temperature in °C.
        #[arg(long)]
        fever_c: Option<f64>,
        /// Pain on a 0-10 scale.
        #[arg(long)]
        pain: Option<u8>,
        /// Vomiting events in the last six hours.
        #[arg(long)]
        vomiting: Option<u32>,
        /// Whether breathing difficulty was reported.
        #[arg(long)]
        breathing: bool,
    },
    /// Print the guardian-facing system prompt.
    Prompt,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.assistant.log_level)),
        )
        .init();

    if !std::path::Path::new(&cli.config).exists() {
        tracing::info!("Config file not found at {}, using defaults", cli.config);
    }

    match cli.command {
        Commands::Console => {
            let notifier = Arc::new(console::ConsoleNotifier::new(cfg.reminders.banner));
            let manager = ReminderManager::new(notifier);
            console::run(manager, &cfg.assistant.name).await?;
        }
        Commands::Triage {
            fever_c,
            pain,
            vomiting,
            breathing,
        } => {
            let report = SymptomReport {
                fever_c,
                pain_0_10: pain,
                vomiting_events_6h: vomiting,
                breathing_difficulty: breathing.then_some(true),
            };
            let assessment = sprout_triage::evaluate(&report);
            println!("{}", serde_json::to_string_pretty(&assessment)?);
        }
        Commands::Prompt => {
            println!("{}", prompt::system_prompt());
        }
    }

    Ok(())
}
