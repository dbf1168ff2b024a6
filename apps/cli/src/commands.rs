//! CLI definition, routing, and tracing setup.

use std::path::PathBuf;

use clap::Parser;
use color_eyre::eyre::Result;
use tocgen_core::{regenerate, rewrite_readme};
use tocgen_shared::{TocConfig, load_config, load_config_from};
use tracing::info;

// ---------------------------------------------------------------------------
// CLI structure
// ---------------------------------------------------------------------------

/// tocgen: rebuild the README table of contents from the chapter files.
#[derive(Parser, Debug)]
#[command(
    name = "tocgen",
    version,
    about = "Regenerate the README table of contents from chapter headings.",
    long_about = None,
)]
pub(crate) struct Cli {
    /// Directory holding the README, chapter files and optional tocgen.toml.
    #[arg(long, env = "TOCGEN_DIR", default_value = ".")]
    pub dir: PathBuf,

    /// Config file to use instead of <DIR>/tocgen.toml.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// README file name, relative to <DIR>.
    #[arg(long)]
    pub readme: Option<String>,

    /// Hosting URL template; `{}` is replaced by the chapter file name.
    #[arg(long)]
    pub base_url: Option<String>,

    /// Print the regenerated README to stdout instead of writing it.
    #[arg(long)]
    pub dry_run: bool,

    /// Log format: text (default) or json.
    #[arg(long, default_value = "text")]
    pub log_format: LogFormat,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Log output format.
#[derive(Clone, Debug, clap::ValueEnum)]
pub(crate) enum LogFormat {
    Text,
    Json,
}

// ---------------------------------------------------------------------------
// Tracing setup
// ---------------------------------------------------------------------------

/// Initialize tracing based on CLI flags. Logs go to stderr.
pub(crate) fn init_tracing(cli: &Cli) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter = match cli.verbose {
        0 => "tocgen=info",
        1 => "tocgen=debug",
        _ => "tocgen=trace",
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter));

    match cli.log_format {
        LogFormat::Text => {
            fmt()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        }
        LogFormat::Json => {
            fmt()
                .json()
                .with_env_filter(env_filter)
                .with_writer(std::io::stderr)
                .init();
        }
    }
}

// ---------------------------------------------------------------------------
// Command dispatch
// ---------------------------------------------------------------------------

/// Resolve configuration: flags over config file over defaults.
pub(crate) fn resolve_config(cli: &Cli) -> Result<TocConfig> {
    let mut config = match &cli.config {
        Some(path) => load_config_from(&cli.dir, path)?,
        None => load_config(&cli.dir)?,
    };

    if let Some(readme) = &cli.readme {
        config.readme = readme.clone();
    }
    if let Some(template) = &cli.base_url {
        config.base_url_template = template.clone();
    }

    config.validate()?;
    Ok(config)
}

/// Run the CLI command.
pub(crate) fn run(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;

    if cli.dry_run {
        let regen = regenerate(&config)?;
        info!(
            changed = regen.changed(),
            skipped = regen.toc.skipped.len(),
            "dry run, README not written"
        );
        println!("{}", regen.content);
        return Ok(());
    }

    let report = rewrite_readme(&config)?;
    if !report.skipped.is_empty() {
        eprintln!("Skipped missing chapters: {}", report.skipped.join(", "));
    }
    println!("{} updated", config.readme);
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
