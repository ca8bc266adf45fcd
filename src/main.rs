//! imagedash: container image update tracker CLI
//!
//! A front-end over the `imagedash` library: lists tracked images, shows
//! per-image resources, and prints graph layouts, against either the live
//! backend or a captured demo dump.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use imagedash::client::{ApiClient, DemoApiClient, ImageQuery, SortBy, SortOrder, TagOp};
use imagedash::config::{load_or_default, AppConfig};
use imagedash::{cli, cli::GraphKind};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "imagedash")]
#[command(version)]
#[command(about = "Container image update tracker CLI", long_about = None)]
#[command(after_help = "EXAMPLES:
    # List images matching a query against the live backend
    imagedash list --query mongo --sort reference

    # Everything the tracker knows about one image
    imagedash show ghcr.io/mongo/mongo:6.0.0

    # Print the dependency graph layout from a captured dump
    imagedash --demo demo-dump.json graph ghcr.io/mongo/mongo:6.0.0")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Replay a captured demo dump instead of calling the backend
    #[arg(long, global = true, env = "IMAGEDASH_DEMO_DUMP")]
    demo: Option<PathBuf>,

    /// Backend API base URL (overrides the config file)
    #[arg(long, global = true, env = "IMAGEDASH_API_BASE")]
    api_base: Option<String>,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `list` subcommand
#[derive(Parser)]
struct ListArgs {
    /// Free-text filter over reference and description
    #[arg(long)]
    query: Option<String>,

    /// Filter by tag; repeatable
    #[arg(short, long = "tag")]
    tags: Vec<String>,

    /// How multiple tags combine
    #[arg(long, default_value = "and")]
    tagop: TagOp,

    /// Sort key
    #[arg(long, default_value = "bump")]
    sort: SortBy,

    /// Sort direction
    #[arg(long, default_value = "asc")]
    order: SortOrder,

    /// Page to show (1-based)
    #[arg(short, long, default_value = "1")]
    page: usize,

    /// Images per page (defaults to the configured page size)
    #[arg(short, long)]
    limit: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// List tracked images
    List(ListArgs),

    /// Show one image's resources
    Show {
        /// Image reference
        reference: String,
    },

    /// Print a graph layout for one image
    Graph {
        /// Image reference
        reference: String,

        /// Lay out the latest workflow run's job graph
        #[arg(long, conflicts_with = "ancestry")]
        workflow: bool,

        /// Lay out ancestor chains on the branch grid
        #[arg(long)]
        ancestry: bool,
    },

    /// List the distinct tag vocabulary
    Tags,

    /// Schedule a rescan of an image
    Scan {
        /// Image reference
        reference: String,
    },

    /// Generate shell completions
    Completions {
        /// Target shell
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = Cli::command();
        generate(*shell, &mut cmd, "imagedash", &mut io::stdout());
        return Ok(());
    }

    let (mut config, _loaded_from) =
        load_or_default(cli.config.as_deref()).context("loading configuration")?;
    if let Some(api_base) = cli.api_base {
        config.api.base_url = api_base;
    }
    if let Some(dump) = cli.demo {
        config.demo.dump_path = Some(dump);
    }
    config
        .validate()
        .map_err(|e| anyhow::anyhow!(e))
        .context("validating configuration")?;

    let client = build_client(&config)?;

    match cli.command {
        Commands::List(args) => {
            let query = ImageQuery {
                query: args.query,
                tags: args.tags,
                tagop: args.tagop,
                sort: args.sort,
                order: args.order,
                page: args.page.saturating_sub(1),
                limit: Some(args.limit.unwrap_or(config.listing.page_size)),
            };
            cli::run_list(client.as_ref(), &query)?;
        }
        Commands::Show { reference } => cli::run_show(client.as_ref(), &reference)?,
        Commands::Graph {
            reference,
            workflow,
            ancestry,
        } => {
            let kind = if workflow {
                GraphKind::Workflow
            } else if ancestry {
                GraphKind::Ancestry
            } else {
                GraphKind::Dependencies
            };
            cli::run_graph(client.as_ref(), &reference, kind)?;
        }
        Commands::Tags => cli::run_tags(client.as_ref())?,
        Commands::Scan { reference } => cli::run_scan(client.as_ref(), &reference)?,
        Commands::Completions { .. } => unreachable!("handled above"),
    }

    Ok(())
}

/// Pick the client implementation: demo dump when configured, live otherwise.
fn build_client(config: &AppConfig) -> Result<Box<dyn ApiClient>> {
    if let Some(dump_path) = &config.demo.dump_path {
        let client = DemoApiClient::load(dump_path)
            .with_context(|| format!("loading demo dump {}", dump_path.display()))?;
        tracing::debug!("Using demo client");
        return Ok(Box::new(client));
    }

    #[cfg(feature = "live")]
    {
        let client = imagedash::client::HttpApiClient::new(imagedash::client::HttpClientConfig {
            api_base: config.api.base_url.clone(),
            timeout: std::time::Duration::from_secs(config.api.timeout_secs),
        })
        .context("creating HTTP client")?;
        Ok(Box::new(client))
    }

    #[cfg(not(feature = "live"))]
    {
        anyhow::bail!(
            "built without the `live` feature; pass --demo <dump> to use a captured dump"
        )
    }
}
