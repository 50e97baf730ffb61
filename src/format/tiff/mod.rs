//! TIFF entry decoding.
//!
//! # Key Concepts
//!
//! - **Byte order**: TIFF files declare their endianness (II = little-endian, MM = big-endian)
//!   in the header. All multi-byte values must be read respecting this order.
//!
//! - **IFD (Image File Directory)**: A table of 12-byte entries describing image metadata.
//!
//! - **Inline vs offset values**: Small values are stored inline in the IFD entry,
//!   larger values are stored at an offset pointed to by the entry.
//!
//! - **Pixel data pointers**: StripOffsets and TileOffsets point at image data
//!   rather than at another structured array.

mod field;
mod parser;
mod tags;

pub use field::{decode, decode_at, Data, Decoded, Field, Offset, Target, ENTRY_SIZE};
pub use parser::{ByteOrder, TiffHeader, IFD_COUNT_SIZE, TIFF_HEADER_SIZE};
pub use tags::{value_name, FieldType, TiffTag};
