mod api;
mod commands;
mod config;
mod form_host;
mod render;
mod session;
mod views;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::EventApi;
use crate::config::Config;
use crate::session::Session;

#[derive(Parser)]
#[command(name = "agenda")]
#[command(about = "Browse and edit your events: list, calendar and dashboard views")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the today/this-week counts and the recent events card
    Dashboard,
    /// Render a month of events
    Calendar {
        /// Month to render (YYYY-MM, defaults to the current month)
        #[arg(short, long)]
        month: Option<String>,

        /// Open entries and create events interactively
        #[arg(short, long)]
        interact: bool,
    },
    /// Paginated event listing
    List {
        /// Page to show (1-based)
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Browse pages and edit/delete interactively
        #[arg(short, long)]
        interact: bool,
    },
    /// Create a new event through the form
    New {
        /// Initial start instant (YYYY-MM-DD or YYYY-MM-DDTHH:MM)
        #[arg(short, long)]
        start: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let session = Session::new(config.api_url.clone(), config.token.clone());
    let api = EventApi::new(session);

    match cli.command {
        Commands::Dashboard => commands::dashboard::run(&api).await,
        Commands::Calendar { month, interact } => {
            commands::calendar::run(&api, month, interact).await
        }
        Commands::List { page, interact } => {
            commands::list::run(&api, page, config.page_size, interact).await
        }
        Commands::New { start } => commands::new::run(&api, start).await,
    }
}
