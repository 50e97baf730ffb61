//! # tiff-layout
//!
//! Decodes TIFF Image File Directory entries and exposes them as addressable
//! byte regions, so a byte-range annotator can navigate a TIFF file's layout.
//!
//! Each IFD entry is a 12-byte record that either carries its value inline or
//! points elsewhere in the file. Decoding an entry yields the [`Field`] itself
//! and, when the walker has more to do, a [`Target`]:
//!
//! - [`Offset`] when the values live out of line. `is_data` marks
//!   StripOffsets/TileOffsets arrays whose elements point at pixel data.
//! - [`Data`] when a single inline StripOffsets/TileOffsets value points
//!   straight at a pixel-data blob.
//!
//! ## Architecture
//!
//! - [`io`] - Byte sources and endian helpers
//! - [`mod@format`] - TIFF header, type/tag tables, and the entry decoder
//! - [`region`] - The region capability shared by fields and composite spans
//! - [`report`] - Text and JSON descriptions of decoded entries
//! - [`config`] - CLI configuration
//!
//! ## Example
//!
//! ```rust
//! use std::io::Cursor;
//! use tiff_layout::{decode, ByteOrder, Region};
//!
//! // StripOffsets, LONG, count 3, values at offset 200
//! let entry = [0x11, 0x01, 0x04, 0x00, 0x03, 0x00, 0x00, 0x00, 0xC8, 0x00, 0x00, 0x00];
//! let decoded = decode(&mut Cursor::new(entry), 10, ByteOrder::LittleEndian).unwrap();
//!
//! assert!(decoded.field.is_offset);
//! assert_eq!(decoded.offset().unwrap().to, 200);
//! assert!(decoded.offset().unwrap().is_data);
//! assert!(decoded.field.contains(21));
//! ```

pub mod config;
pub mod error;
pub mod format;
pub mod io;
pub mod region;
pub mod report;

// Re-export commonly used types
pub use config::{Config, OutputFormat};
pub use error::{FieldError, IoError, RegionError, TiffError};
pub use format::tiff::{
    decode, decode_at, value_name, ByteOrder, Data, Decoded, Field, FieldType, Offset, Target,
    TiffHeader, TiffTag, ENTRY_SIZE, IFD_COUNT_SIZE, TIFF_HEADER_SIZE,
};
pub use io::{ByteSource, FileSource, MemorySource};
pub use region::{same_region, Region, Section};
pub use report::{describe, to_json, EntryReport, TargetReport};
