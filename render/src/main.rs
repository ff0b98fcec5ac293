//! # leafcurl-render
//!
//! Pre-renders the landing page to a static `index.html`.
//!
//! The output is the same component tree the browser bundle mounts, rendered
//! with Leptos SSR, so the page reads fine with JavaScript disabled and the
//! wasm bundle (`--bundle`) only adds the interactive bits.
//!
//! ## Usage
//!
//! ```bash
//! # Built-in content, default output dist/index.html
//! leafcurl-render
//!
//! # Custom content, fail if a screenshot is missing
//! leafcurl-render --config site.toml --assets-dir landing/assets --strict
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use leafcurl_core::SiteConfig;
use leafcurl_core::config::DEFAULT_CONFIG_FILE;
use tracing::{error, info, warn};

#[derive(Parser, Debug)]
#[command(name = "leafcurl-render")]
#[command(about = "Pre-render the Leaf Curl Virus Detection landing page to static HTML")]
#[command(version)]
struct Args {
    /// Site configuration (TOML); a missing file means built-in content
    #[arg(long, default_value = DEFAULT_CONFIG_FILE)]
    config: PathBuf,

    /// Output HTML file
    #[arg(long, short, default_value = "dist/index.html")]
    out: PathBuf,

    /// Directory holding the logo, QR code and screenshots; enables asset checks
    #[arg(long)]
    assets_dir: Option<PathBuf>,

    /// Treat a missing asset as an error instead of a warning
    #[arg(long, requires = "assets_dir")]
    strict: bool,

    /// Module script for the wasm bundle, e.g. `leafcurl-landing.js`
    #[arg(long)]
    bundle: Option<String>,

    /// Print the resolved configuration as JSON and exit
    #[arg(long)]
    print_config: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn check_assets(config: &SiteConfig, dir: &Path, strict: bool) -> Result<()> {
    if strict {
        return config
            .require_assets(dir)
            .with_context(|| format!("asset check failed in {}", dir.display()));
    }

    let missing = config.missing_assets(dir);
    if !missing.is_empty() {
        warn!(
            count = missing.len(),
            dir = %dir.display(),
            "page references missing assets"
        );
    }
    Ok(())
}

fn run(args: Args) -> Result<()> {
    let config = SiteConfig::load_from_path(&args.config)
        .with_context(|| format!("loading config {}", args.config.display()))?;

    if args.print_config {
        println!("{}", serde_json::to_string_pretty(&config)?);
        return Ok(());
    }

    if let Some(dir) = &args.assets_dir {
        check_assets(&config, dir, args.strict)?;
    }

    let html = leafcurl_site::render_page(&config, args.bundle);

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    std::fs::write(&args.out, &html)
        .with_context(|| format!("writing {}", args.out.display()))?;

    info!(
        path = %args.out.display(),
        bytes = html.len(),
        screenshots = config.content.screenshots.len(),
        "landing page written"
    );
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
