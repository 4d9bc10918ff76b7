//! CLI for dlcache: download a URL into a directory unless already cached.

use anyhow::{Context, Result};
use clap::Parser;
use dlcache_core::config;
use dlcache_core::Downloader;
use std::path::PathBuf;

/// Download a URL once and keep it under a name derived from the URL.
#[derive(Debug, Parser)]
#[command(name = "dlcache")]
#[command(about = "Download a URL unless a file with its derived name already exists", long_about = None)]
pub struct Cli {
    /// HTTP/HTTPS URL to download.
    pub url: String,

    /// Directory to cache into (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Config file to use instead of ~/.config/dlcache/config.toml.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        Cli::parse().run()
    }

    pub fn run(self) -> Result<()> {
        let cfg = match &self.config {
            Some(path) => config::load_from(path)?,
            None => config::load_or_init()?,
        };
        tracing::debug!("loaded config: {:?}", cfg);

        let downloader = match self.dir {
            Some(dir) => Downloader::new(dir, cfg),
            None => Downloader::in_current_dir(cfg),
        };
        let filename = downloader
            .fetch_and_cache(&self.url)
            .with_context(|| format!("failed to fetch {}", self.url))?;
        println!("{filename}");
        Ok(())
    }
}
