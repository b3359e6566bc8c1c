use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use jobdeck::config::Config;

mod cmd;

#[derive(Parser)]
#[command(name = "jobdeck")]
#[command(version, about = "Terminal admin dashboard for managing job postings")]
pub struct Cli {
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Skip confirmation prompts for mutating actions
    #[arg(long, global = true)]
    pub yes: bool,

    /// Override the job resource endpoint base URL
    #[arg(long, global = true)]
    pub api_base: Option<String>,

    /// Override the login endpoint URL
    #[arg(long, global = true)]
    pub login_url: Option<String>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive dashboard (the default)
    Dashboard,
    /// Log in and persist the session token
    Login {
        #[arg(short, long)]
        username: Option<String>,
    },
    /// Clear the persisted session token
    Logout,
    /// Show session and endpoint status
    Status,
    /// List job postings
    List,
    /// Create a new job posting
    Create,
    /// Edit an existing job posting
    Edit {
        /// Server-assigned id of the posting
        id: i64,
    },
    /// Delete a job posting
    Delete {
        /// Server-assigned id of the posting
        id: i64,
    },
    /// View or validate configuration
    Config {
        #[command(subcommand)]
        command: Option<ConfigCommands>,
    },
}

#[derive(Subcommand, Clone)]
pub enum ConfigCommands {
    /// Show resolved configuration
    Show,
    /// Write a config.toml seeded with the current endpoints
    Init,
    /// Validate configuration and show any warnings
    Validate,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "jobdeck=debug" } else { "jobdeck=warn" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = Config::load(
        cli.api_base.clone(),
        cli.login_url.clone(),
        cli.verbose,
        cli.yes,
    )?;

    match cli.command.unwrap_or(Commands::Dashboard) {
        Commands::Dashboard => cmd::cmd_dashboard(config).await?,
        Commands::Login { username } => cmd::cmd_login(&config, username.as_deref()).await?,
        Commands::Logout => cmd::cmd_logout(&config)?,
        Commands::Status => cmd::cmd_status(&config)?,
        Commands::List => cmd::cmd_list(&config).await?,
        Commands::Create => cmd::cmd_create(&config).await?,
        Commands::Edit { id } => cmd::cmd_edit(&config, id).await?,
        Commands::Delete { id } => cmd::cmd_delete(&config, id).await?,
        Commands::Config { command } => cmd::cmd_config(&config, command)?,
    }

    Ok(())
}
