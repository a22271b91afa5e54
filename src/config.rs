//! Command-line configuration

use crate::badge::DEFAULT_BADGE_PATH;
use crate::types::{GenerateConfig, DEFAULT_CANDIDATE_CEILING, DEFAULT_MAX_PER_CHAR, DEFAULT_MAX_VARIANTS};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// ENS look-alike generator & risk scorer (offline).
#[derive(Parser, Debug, Clone)]
#[command(name = "ensguard")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Generate ranked look-alike variants for LABEL
    Generate(GenerateArgs),
    /// Emit a small SVG badge advertising that look-alikes are monitored
    SvgBadge(BadgeArgs),
    /// Explain how ensguard scores and what to watch for
    Explain(ExplainArgs),
}

/// Arguments of the `generate` command.
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Label to protect, e.g. `vitalik`
    pub label: String,

    /// Maximum variants to output after scoring
    #[arg(long = "max", env = "ENSGUARD_MAX", default_value_t = DEFAULT_MAX_VARIANTS)]
    pub max: usize,

    /// Confusable alternatives tried per character
    #[arg(long, env = "ENSGUARD_MAX_PER_CHAR", default_value_t = DEFAULT_MAX_PER_CHAR)]
    pub max_per_char: usize,

    /// Write JSON output to file
    #[arg(long)]
    pub json: Option<PathBuf>,

    /// Write CSV output to file
    #[arg(long)]
    pub csv: Option<PathBuf>,

    /// Write plain-text watchlist
    #[arg(long)]
    pub txt: Option<PathBuf>,
}

impl GenerateArgs {
    pub fn generate_config(&self) -> GenerateConfig {
        GenerateConfig {
            max_variants: self.max,
            max_per_char: self.max_per_char,
            candidate_ceiling: DEFAULT_CANDIDATE_CEILING,
        }
    }
}

/// Arguments of the `svg-badge` command.
#[derive(Parser, Debug, Clone)]
pub struct BadgeArgs {
    /// Label shown on the badge
    pub label: String,

    /// Output path
    #[arg(long, default_value = DEFAULT_BADGE_PATH)]
    pub out: PathBuf,
}

/// Arguments of the `explain` command.
#[derive(Parser, Debug, Clone)]
pub struct ExplainArgs {
    /// Label to explain
    pub label: String,
}
