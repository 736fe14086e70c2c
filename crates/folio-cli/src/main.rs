mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::config::ConfigSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "folio",
    about = "Portfolio site: serve it, or inspect its projects and config",
    version,
    propagate_version = true
)]
struct Cli {
    /// Site root (default: nearest directory with folio.yaml, else cwd)
    #[arg(long, global = true, env = "FOLIO_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    /// Content store project id (overrides folio.yaml)
    #[arg(long, global = true, env = "FOLIO_SANITY_PROJECT")]
    project_id: Option<String>,

    /// Content store dataset (overrides folio.yaml)
    #[arg(long, global = true, env = "FOLIO_SANITY_DATASET")]
    dataset: Option<String>,

    /// Read projects from a local JSON export instead of the content store
    #[arg(long, global = true, env = "FOLIO_CONTENT_FILE")]
    content_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the site
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "3000")]
        port: u16,

        /// Don't open browser automatically
        #[arg(long)]
        no_open: bool,
    },

    /// List projects in display order
    Projects,

    /// Show one project
    Project { slug: String },

    /// Inspect and validate folio.yaml
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let site = cmd::Site {
        root: root::resolve_root(cli.root.as_deref()),
        project_id: cli.project_id,
        dataset: cli.dataset,
        content_file: cli.content_file,
    };

    let result = match cli.command {
        Commands::Serve { port, no_open } => cmd::serve::run(&site, port, no_open),
        Commands::Projects => cmd::projects::run(&site, cli.json),
        Commands::Project { slug } => cmd::project::run(&site, &slug, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&site, subcommand, cli.json),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
