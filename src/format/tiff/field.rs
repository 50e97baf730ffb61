//! IFD entry decoding.
//!
//! # Entry Structure
//!
//! ```text
//! Bytes 0-1:  Tag ID
//! Bytes 2-3:  Field type
//! Bytes 4-7:  Count (number of values, not bytes)
//! Bytes 8-11: Value, or offset to the values when they do not fit
//! ```
//!
//! An entry whose values occupy more than 4 bytes stores a file offset in its
//! value field. The decoder reports that as an [`Offset`] the caller must
//! follow. StripOffsets and TileOffsets are special: their values are pointers
//! to pixel data, so a single inline value comes back as a [`Data`] span.

use std::io::{ErrorKind, Read};

use bytes::Bytes;
use tracing::{debug, trace};

use super::parser::ByteOrder;
use super::tags::{FieldType, TiffTag};
use crate::error::{FieldError, IoError, RegionError};
use crate::io::ByteSource;
use crate::region::{out_of_range, Region};

/// Size of a classic TIFF IFD entry in bytes.
pub const ENTRY_SIZE: usize = 12;

// =============================================================================
// Field
// =============================================================================

/// One decoded 12-byte IFD entry.
///
/// Occupies `[start, end)` in the file with `end == start + 12`. A field is a
/// leaf region: it cannot be split and every lookup inside it resolves to the
/// field itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// File offset of the first byte of the entry
    pub start: u64,

    /// File offset one past the last byte of the entry
    pub end: u64,

    /// The exact bytes the entry was decoded from
    pub raw: [u8; ENTRY_SIZE],

    /// Tag number
    pub id: u16,

    /// Raw type code
    pub dtype: u16,

    /// Type looked up from `dtype`
    pub field_type: FieldType,

    /// Number of values (not bytes)
    pub count: u32,

    /// Literal value, or an absolute file offset when `is_offset`
    pub value: u32,

    /// Whether the values live out of line at `value`
    pub is_offset: bool,

    /// Byte order the entry was decoded with
    pub byte_order: ByteOrder,
}

impl Field {
    /// Classify an entry's bytes.
    ///
    /// Returns the field together with the follow-up the caller must act on,
    /// if any. This is a pure function of its inputs.
    ///
    /// # Errors
    /// - `UnknownType` if the type code is not in the type table
    /// - `OffsetOverflow` if `start + 12` does not fit in a `u64`
    pub fn from_bytes(
        raw: &[u8; ENTRY_SIZE],
        start: u64,
        byte_order: ByteOrder,
    ) -> Result<Decoded, FieldError> {
        let id = byte_order.read_u16(&raw[0..2]);
        let dtype = byte_order.read_u16(&raw[2..4]);
        let count = byte_order.read_u32(&raw[4..8]);
        let value = byte_order.read_u32(&raw[8..12]);

        let field_type = FieldType::from_u16(dtype).ok_or(FieldError::UnknownType(dtype))?;
        let end = start
            .checked_add(ENTRY_SIZE as u64)
            .ok_or(FieldError::OffsetOverflow(start))?;
        let is_offset = !field_type.fits_inline(count);

        let field = Field {
            start,
            end,
            raw: *raw,
            id,
            dtype,
            field_type,
            count,
            value,
            is_offset,
            byte_order,
        };

        let pixel_data = TiffTag::points_to_pixel_data(id);
        let target = if is_offset {
            Some(Target::Offset(Offset {
                dtype,
                count,
                field_id: id,
                from: start,
                to: value as u64,
                is_data: pixel_data,
            }))
        } else if pixel_data {
            // A single inline strip/tile offset is itself the pixel data pointer
            Some(Target::Data(Data {
                start: value as u64,
            }))
        } else {
            None
        };

        trace!(start, id, dtype, count, value, is_offset, "decoded IFD entry");
        if let Some(target) = &target {
            debug!(start, id, ?target, "IFD entry has follow-up target");
        }

        Ok(Decoded { field, target })
    }

    /// Known tag for this entry, if any.
    pub fn tag(&self) -> Option<TiffTag> {
        TiffTag::from_u16(self.id)
    }

    /// Total size of the entry's values in bytes.
    #[inline]
    pub fn total_size(&self) -> u64 {
        self.field_type.total_size(self.count)
    }

    /// The raw 4-byte value field, in file byte order.
    #[inline]
    pub fn value_bytes(&self) -> &[u8] {
        &self.raw[8..12]
    }

    /// The bytes of the values when they are stored inline.
    ///
    /// Returns `None` when the value field holds an offset instead.
    pub fn inline_bytes(&self) -> Option<&[u8]> {
        if self.is_offset {
            return None;
        }
        Some(&self.value_bytes()[..self.total_size() as usize])
    }

    /// The first inline value as an unsigned integer.
    ///
    /// Inline values are left-justified in the value field, so a SHORT in a
    /// big-endian file occupies the first two bytes, not the last two.
    pub fn inline_u32(&self) -> Option<u32> {
        if self.is_offset || self.count == 0 {
            return None;
        }

        let bytes = self.value_bytes();
        match self.field_type {
            FieldType::Byte | FieldType::Undefined => Some(bytes[0] as u32),
            FieldType::Short => Some(self.byte_order.read_u16(bytes) as u32),
            FieldType::Long | FieldType::Ifd => Some(self.byte_order.read_u32(bytes)),
            _ => None,
        }
    }
}

impl Region for Field {
    fn start(&self) -> u64 {
        self.start
    }

    fn end(&self) -> u64 {
        self.end
    }

    fn label(&self) -> &'static str {
        "ifd_field"
    }

    fn find(&self, offset: u64) -> Result<&dyn Region, RegionError> {
        if !self.contains(offset) {
            return Err(out_of_range(self, offset));
        }
        Ok(self)
    }

    fn split(&mut self, _start: u64, _end: u64, _region: Box<dyn Region>) -> Result<(), RegionError> {
        Err(RegionError::Unsplittable {
            start: self.start,
            end: self.end,
        })
    }
}

// =============================================================================
// Follow-up Descriptors
// =============================================================================

/// Out-of-line values the caller must decode next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Offset {
    /// Type code of the values
    pub dtype: u16,

    /// Number of values
    pub count: u32,

    /// Tag of the owning entry
    pub field_id: u16,

    /// Start of the owning entry
    pub from: u64,

    /// Absolute file offset of the values
    pub to: u64,

    /// Whether the values are raw pixel data rather than a structured array
    pub is_data: bool,
}

impl Offset {
    /// Size of the out-of-line span in bytes.
    ///
    /// Returns `None` if `dtype` is not in the type table.
    pub fn byte_len(&self) -> Option<u64> {
        FieldType::from_u16(self.dtype).map(|field_type| field_type.total_size(self.count))
    }
}

/// A single pixel-data blob addressed directly by an inline value.
///
/// The blob's length is not part of the entry; the caller pairs it with the
/// matching byte count tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Data {
    /// Absolute file offset of the blob
    pub start: u64,
}

/// The follow-up produced by decoding an entry.
///
/// A decode yields at most one of these, never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// Values live out of line
    Offset(Offset),
    /// A single inline pixel-data pointer
    Data(Data),
}

/// Result of decoding one entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// The decoded entry
    pub field: Field,

    /// Follow-up for the caller, if any
    pub target: Option<Target>,
}

impl Decoded {
    /// The out-of-line follow-up, if one was produced.
    pub fn offset(&self) -> Option<&Offset> {
        match &self.target {
            Some(Target::Offset(offset)) => Some(offset),
            _ => None,
        }
    }

    /// The pixel-data follow-up, if one was produced.
    pub fn data(&self) -> Option<&Data> {
        match &self.target {
            Some(Target::Data(data)) => Some(data),
            _ => None,
        }
    }
}

// =============================================================================
// Decoding
// =============================================================================

/// Decode one entry from a reader already positioned at it.
///
/// Consumes exactly 12 bytes.
///
/// # Errors
/// - `ShortRead` if the reader ends before 12 bytes
/// - `Io` if the reader fails
/// - `UnknownType` if the type code is not in the type table
/// - `OffsetOverflow` if `start + 12` does not fit in a `u64`
pub fn decode<R: Read + ?Sized>(
    reader: &mut R,
    start: u64,
    byte_order: ByteOrder,
) -> Result<Decoded, FieldError> {
    let mut raw = [0u8; ENTRY_SIZE];
    let mut filled = 0;

    while filled < ENTRY_SIZE {
        match reader.read(&mut raw[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(FieldError::Io(e.into())),
        }
    }

    if filled < ENTRY_SIZE {
        return Err(FieldError::ShortRead {
            expected: ENTRY_SIZE,
            actual: filled,
        });
    }

    Field::from_bytes(&raw, start, byte_order)
}

/// Decode the entry at `start` with a positioned read.
///
/// A `start` at or past the end of the source has no bytes available and
/// fails with `ShortRead { actual: 0 }`, like a stream that is already at EOF.
///
/// # Errors
/// Same as [`decode`], with other source failures reported as `Io`.
pub fn decode_at<S: ByteSource + ?Sized>(
    source: &S,
    start: u64,
    byte_order: ByteOrder,
) -> Result<Decoded, FieldError> {
    let bytes = match source.read_at(start, ENTRY_SIZE) {
        Ok(bytes) => bytes,
        Err(IoError::RangeOutOfBounds { .. }) => Bytes::new(),
        Err(e) => return Err(e.into()),
    };
    let raw: &[u8; ENTRY_SIZE] = bytes[..].try_into().map_err(|_| FieldError::ShortRead {
        expected: ENTRY_SIZE,
        actual: bytes.len(),
    })?;

    Field::from_bytes(raw, start, byte_order)
}

// =============================================================================
// Tests
// =============================================================================
