//! Configuration for the `tiff-layout` command line tool.
//!
//! Options come from command-line arguments via clap, with environment
//! variable fallbacks under the `TIFF_LAYOUT_` prefix:
//!
//! - `TIFF_LAYOUT_OFFSET` - File offset of the first entry to decode
//! - `TIFF_LAYOUT_ENTRIES` - Number of consecutive entries (default: 1)
//! - `TIFF_LAYOUT_FORMAT` - Output format, `text` or `json` (default: text)

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::format::tiff::ENTRY_SIZE;

// =============================================================================
// Default Values
// =============================================================================

/// Default number of entries to decode.
pub const DEFAULT_ENTRIES: usize = 1;

/// Largest number of entries a single IFD can hold.
pub const MAX_ENTRIES: usize = u16::MAX as usize;

// =============================================================================
// CLI Arguments
// =============================================================================

/// Output format for decoded entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One descriptive line per entry
    #[default]
    Text,
    /// A JSON array of entry reports
    Json,
}

/// tiff-layout - Decode TIFF IFD entries.
///
/// Reads the file header to select the byte order, then decodes consecutive
/// 12-byte directory entries starting at a file offset.
#[derive(Parser, Debug, Clone)]
#[command(name = "tiff-layout")]
#[command(author, version, about, long_about = None)]
pub struct Config {
    /// TIFF file to read.
    pub file: PathBuf,

    /// File offset of the first entry to decode.
    ///
    /// Defaults to the first entry of the first IFD.
    #[arg(short, long, env = "TIFF_LAYOUT_OFFSET")]
    pub offset: Option<u64>,

    /// Number of consecutive entries to decode.
    #[arg(short = 'n', long, default_value_t = DEFAULT_ENTRIES, env = "TIFF_LAYOUT_ENTRIES")]
    pub entries: usize,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "TIFF_LAYOUT_FORMAT")]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl Config {
    /// Validate the configuration and return an error message if invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.entries == 0 {
            return Err("entries must be greater than 0".to_string());
        }
        if self.entries > MAX_ENTRIES {
            return Err(format!("entries must be at most {}", MAX_ENTRIES));
        }
        Ok(())
    }

    /// File offsets of the entries to decode, given the default start.
    ///
    /// Stops early at the first offset that would not fit in a `u64`.
    pub fn entry_offsets(&self, default_start: u64) -> impl Iterator<Item = u64> {
        let start = self.offset.unwrap_or(default_start);
        (0..self.entries as u64).map_while(move |i| {
            i.checked_mul(ENTRY_SIZE as u64)
                .and_then(|delta| start.checked_add(delta))
        })
    }
}

// =============================================================================
// Tests
// =============================================================================
