//! ensguard - generate & score look-alike variants of ENS labels and crypto handles
//!
//! Offline only: Unicode confusables, keyboard typos, omissions, duplications
//! and adjacent swaps, ranked by visual confusability and edit distance.

pub mod badge;
pub mod config;
pub mod error;
pub mod explain;
pub mod export;
pub mod label;
pub mod lookalike;
pub mod types;

// Re-export commonly used types
pub use config::{Commands, Config};
pub use error::{GuardError, Result};
pub use export::ExportFormat;
pub use label::LabelValidator;
pub use lookalike::{generate, Generator};
pub use types::{AsciiEncoding, GenerateConfig, ScoredVariant, VariantKind};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() -> Result<()> {
    // Load .env file if it exists
    dotenv::dotenv().ok();
    Ok(())
}
