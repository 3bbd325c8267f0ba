use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use mnemo_application::ConversationService;
use mnemo_core::config::AppConfig;
use mnemo_infrastructure::{JsonStoreCodec, MnemoPaths, TrainingLog, config_storage};

mod commands;
mod speech;

#[derive(Parser)]
#[command(name = "mnemo")]
#[command(about = "mnemo - a personal assistant with persistent conversation memory", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session
    Chat {
        /// Resume an existing conversation by id
        #[arg(long)]
        conversation: Option<String>,
        /// Speak responses through the speech collaborator
        #[arg(long)]
        speak: bool,
    },
    /// List stored conversations, most recent first
    List,
    /// Show the full history of one conversation
    Show {
        /// Conversation id
        id: String,
    },
}

/// Loads configuration and opens the conversation service on the
/// configured data directory.
fn open_service(config: &AppConfig) -> Result<Arc<ConversationService>> {
    let data_dir = match &config.data_dir {
        Some(dir) => dir.clone(),
        None => MnemoPaths::data_dir().context("resolving data directory")?,
    };

    let service = ConversationService::open(
        JsonStoreCodec::new(MnemoPaths::conversations_file(&data_dir)),
        TrainingLog::new(MnemoPaths::train_log_file(&data_dir)),
        config.title.clone(),
        config.memory_window,
    );
    Ok(Arc::new(service))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let config = config_storage::load_default().context("loading configuration")?;
    let service = open_service(&config)?;

    match cli.command {
        Commands::Chat {
            conversation,
            speak,
        } => commands::chat::run(service, &config, conversation, speak).await?,
        Commands::List => commands::list::run(service).await,
        Commands::Show { id } => commands::show::run(service, &id).await?,
    }

    Ok(())
}
