use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pkg_versions::config::Config;
use pkg_versions::report::builder::{list_groups, load_report};
use pkg_versions::report::render::{render_groups, render_json, render_text};
use pkg_versions::report::source::{HttpVersionsSource, VersionsSource};
use pkg_versions::report::types::VersionsDocument;
use pkg_versions::version::upstream::UpstreamNormalizer;
use pkg_versions::version::vercmp;

#[derive(Parser)]
#[command(name = "pkg-versions")]
#[command(version, about = "RPM version comparison and package version reports")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// JSON config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two versions, printing -1, 0 or 1
    Compare { a: String, b: String },
    /// Rewrite an upstream version into RPM form
    Normalize { version: String },
    /// Show the version report
    Report {
        /// Only packages of this group
        #[arg(short, long)]
        group: Option<String>,
        /// Location of versions.json
        #[arg(long)]
        url: Option<String>,
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
    /// List package groups
    Groups {
        /// Location of versions.json
        #[arg(long)]
        url: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn init_logging(verbose: bool) {
    let log_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();
}

fn load_config(path: Option<&PathBuf>, url: Option<String>) -> anyhow::Result<Config> {
    let config = match path {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };
    let config = config.with_env().with_url(url);
    debug!("Using versions document at {}", config.versions_json_url);
    Ok(config)
}

fn runtime() -> anyhow::Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

async fn fetch_document(source: &HttpVersionsSource) -> anyhow::Result<VersionsDocument> {
    source
        .fetch()
        .await
        .with_context(|| format!("Failed to fetch {}", source.url()))
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Command::Compare { a, b } => {
            println!("{}", vercmp(&a, &b));
            Ok(())
        }
        Command::Normalize { version } => {
            let normalized = UpstreamNormalizer::new().normalize(&version)?;
            println!("{normalized}");
            Ok(())
        }
        Command::Report { group, url, format } => {
            let config = load_config(cli.config.as_ref(), url)?;
            let source = HttpVersionsSource::new(&config)?;
            let report = runtime()?
                .block_on(load_report(&source, group.as_deref()))
                .with_context(|| format!("Failed to build report from {}", source.url()))?;

            match format {
                Format::Text => print!("{}", render_text(&report)),
                Format::Json => {
                    println!("{}", serde_json::to_string_pretty(&render_json(&report))?)
                }
            }
            Ok(())
        }
        Command::Groups { url } => {
            let config = load_config(cli.config.as_ref(), url)?;
            let source = HttpVersionsSource::new(&config)?;
            let doc = runtime()?.block_on(fetch_document(&source))?;

            print!("{}", render_groups(&list_groups(&doc)));
            Ok(())
        }
    }
}
