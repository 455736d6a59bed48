use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod board;
pub mod list;
pub mod prompt;
pub mod serve;
pub mod signup;
pub mod unregister;

use crate::core::{AppConfig, init_tracing};

#[derive(Subcommand)]
enum Command {
    /// Run the activities API server
    Serve {
        /// Set the server host address
        #[arg(long)]
        host: Option<String>,

        /// Set the server port
        #[arg(long)]
        port: Option<String>,
    },
    /// Fetch and print the activity board
    List {
        /// Print the board as HTML instead of text
        #[arg(long, action, default_value = "false")]
        html: bool,
    },
    /// Sign up for an activity
    Signup {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
    },
    /// Unregister a participant from an activity
    Unregister {
        #[arg(long)]
        activity: String,
        #[arg(long)]
        email: String,
        /// Skip the confirmation prompt
        #[arg(long, action, default_value = "false")]
        yes: bool,
    },
    /// Start an interactive board session
    Board {},
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Base URL of the activities API
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    let mut config = AppConfig::default();
    if let Some(api_url) = args.api_url {
        config.api_base_url = api_url.trim_end_matches('/').to_string();
    }

    // The server installs its own subscriber with HTTP tracing enabled
    if !matches!(args.command, Some(Command::Serve { .. }) | None) {
        init_tracing(format!("{}=info", env!("CARGO_CRATE_NAME")));
    }

    // Handle each sub command
    match args.command {
        Some(Command::Serve { host, port }) => {
            let host = host.unwrap_or(config.host.clone());
            let port = port.unwrap_or(config.port.clone());
            serve::run(host, port).await?;
        }
        Some(Command::List { html }) => {
            list::run(html, &config).await?;
        }
        Some(Command::Signup { activity, email }) => {
            signup::run(activity, email, &config).await?;
        }
        Some(Command::Unregister {
            activity,
            email,
            yes,
        }) => {
            unregister::run(activity, email, yes, &config).await?;
        }
        Some(Command::Board {}) => {
            board::run(&config).await?;
        }
        None => {}
    }

    Ok(())
}
