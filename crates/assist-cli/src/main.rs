mod cmd;
mod output;
mod root;

use anyhow::Context;
use assist_core::config::Config;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "assist",
    about = "Support-ticket assistant backend — demo tickets, canned replies, accept log and metrics",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root holding assist.yaml (default: search upward from cwd)
    #[arg(long, global = true, env = "ASSIST_ROOT")]
    root: Option<PathBuf>,

    /// Accept log file (overrides log.path in assist.yaml)
    #[arg(long, global = true, env = "ASSIST_LOG_PATH")]
    log_path: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve {
        /// Address to bind (default: server.host, 127.0.0.1)
        #[arg(long, env = "ASSIST_HOST")]
        host: Option<String>,

        /// Port to listen on (default: server.port, 5000; 0 = OS-assigned)
        #[arg(long, env = "ASSIST_PORT")]
        port: Option<u16>,

        /// Log every request at debug level
        #[arg(long, conflicts_with = "no_debug")]
        debug: bool,

        /// Turn off debug logging even if assist.yaml enables it
        #[arg(long)]
        no_debug: bool,
    },

    /// List the demo tickets
    Tickets,

    /// Show the canned reply for a ticket
    Suggest { ticket_id: String },

    /// Show recorded accept/edit decisions, oldest first
    Log,

    /// Compute acceptance and response-time metrics from the accept log
    Metrics {
        /// Number of suggestions displayed client-side
        #[arg(long, default_value = "0", allow_negative_numbers = true)]
        total_shown: i64,
    },
}

fn main() {
    let cli = Cli::parse();

    let root = root::resolve_root(cli.root.as_deref());
    let config = Config::load(&root);

    let default_level = match &cli.command {
        Commands::Serve {
            debug, no_debug, ..
        } => {
            let configured = config.as_ref().map(|c| c.server.debug).unwrap_or(false);
            if *debug || (configured && !*no_debug) {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            }
        }
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = config
        .context("failed to load assist.yaml")
        .and_then(|config| {
            let project = cmd::Project {
                root,
                config,
                log_path_override: cli.log_path,
            };
            match cli.command {
                Commands::Serve { host, port, .. } => cmd::serve::run(&project, host, port),
                Commands::Tickets => cmd::tickets::run(&project, cli.json),
                Commands::Suggest { ticket_id } => {
                    cmd::suggest::run(&project, &ticket_id, cli.json)
                }
                Commands::Log => cmd::log::run(&project, cli.json),
                Commands::Metrics { total_shown } => {
                    cmd::metrics::run(&project, total_shown, cli.json)
                }
            }
        });

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
