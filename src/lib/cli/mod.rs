//! Command line surface: `build` (the default), `serve` and `check`.

use std::{net::SocketAddr, path::PathBuf};

use clap::{Args, Parser, Subcommand};
use color_eyre::{Section, eyre::eyre};
use itertools::Itertools;
use tracing::{info, warn};

use crate::{
    config::{DEFAULT_ADDR, ENV_ADDR, ENV_OUT, ENV_ROOT, OUTPUT_DIR},
    links::{LinkReport, audit},
    pages::Page,
    pipeline::{BuildOptions, BuildReport, build_at},
    server,
};

#[derive(Debug, Parser)]
#[command(name = "epibook", about = "Build and serve the EpiBook static pages")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
    #[command(flatten)]
    pub build: BuildArgs,
}

#[derive(Debug, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Render the pages and copy assets into the output directory.
    Build,
    /// Build, then serve the output over HTTP.
    Serve {
        #[arg(long, env = ENV_ADDR, default_value = DEFAULT_ADDR)]
        addr: SocketAddr,
    },
    /// Audit page links; fails when a link targets an undelivered page.
    Check,
}

#[derive(Args, Clone, Debug, PartialEq, Eq)]
pub struct BuildArgs {
    /// Site root holding `styles/` and `images/`.
    #[arg(long, global = true, env = ENV_ROOT, default_value = ".")]
    pub root: PathBuf,
    /// Output directory, relative to the root unless absolute.
    #[arg(long, global = true, env = ENV_OUT, default_value = OUTPUT_DIR)]
    pub out: PathBuf,
    /// Minify emitted HTML and CSS.
    #[arg(long, global = true)]
    pub minify: bool,
}

impl BuildArgs {
    pub fn options(&self) -> BuildOptions {
        BuildOptions {
            output_dir: self.out.clone(),
            minify: self.minify,
        }
    }

    pub fn run(&self) -> color_eyre::Result<BuildReport> {
        let report = build_at(&self.root, &self.options())
            .with_note(|| format!("While building into {}", self.out.display()))?;
        info!(
            pages = report.pages.len(),
            assets = report.assets.len(),
            missing = report.missing_assets.len(),
            dangling = report.links.dangling().count(),
            "build complete"
        );
        Ok(report)
    }
}

/// Audit every delivered page, failing on dangling targets.
pub fn check_links() -> color_eyre::Result<LinkReport> {
    let report = audit(&Page::ALL);
    for entry in report.entries() {
        info!(link = %entry, status = ?entry.status, "link");
    }
    if !report.is_clean() {
        let dangling = report.dangling().join(", ");
        warn!(%dangling, "dangling links");
        return Err(eyre!("Links to undelivered pages: {dangling}"));
    }
    Ok(report)
}

impl Cli {
    pub async fn run(self) -> color_eyre::Result<()> {
        match self.command.unwrap_or(Command::Build) {
            Command::Build => {
                self.build.run()?;
            }
            Command::Serve { addr } => {
                let report = self.build.run()?;
                let app = server::router(&report.pages, &report.output_dir);
                server::serve(app, addr).await?;
            }
            Command::Check => {
                check_links()?;
            }
        }
        Ok(())
    }
}
