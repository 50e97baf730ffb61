use thiserror::Error;

/// I/O errors that can occur when reading from a byte source
#[derive(Debug, Clone, Error)]
pub enum IoError {
    /// The underlying read reported an error
    #[error("Read error: {0}")]
    Read(String),

    /// Requested range starts beyond the end of the resource
    #[error("Range out of bounds: requested {requested} bytes at offset {offset}, size is {size}")]
    RangeOutOfBounds {
        offset: u64,
        requested: u64,
        size: u64,
    },
}

impl From<std::io::Error> for IoError {
    fn from(err: std::io::Error) -> Self {
        IoError::Read(err.to_string())
    }
}

/// Errors that can occur when decoding a single IFD entry
#[derive(Debug, Clone, Error)]
pub enum FieldError {
    /// Fewer bytes were available than an entry needs
    #[error("Short read for IFD entry: expected {expected} bytes, got {actual}")]
    ShortRead { expected: usize, actual: usize },

    /// The byte source failed while reading the entry
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Type code has no entry in the type-width table
    #[error("Unknown field type: {0}")]
    UnknownType(u16),

    /// An entry starting here would end past `u64::MAX`
    #[error("IFD entry offset {0} overflows")]
    OffsetOverflow(u64),
}

/// Errors returned by region queries.
///
/// None of these are fatal to a walk: they mean "this offset or range does not
/// belong here".
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegionError {
    /// Offset lies outside the region's `[start, end)` span
    #[error("Offset {offset} outside of region {start} to {end}")]
    OutOfRange { offset: u64, start: u64, end: u64 },

    /// Region is a leaf and cannot be split
    #[error("Region {start} to {end} can not be split")]
    Unsplittable { start: u64, end: u64 },

    /// Split requested for an empty or inverted range
    #[error("Empty split range {start} to {end}")]
    EmptyRange { start: u64, end: u64 },

    /// Inserted region does not cover the requested range
    #[error("Region {actual_start} to {actual_end} does not match split range {start} to {end}")]
    SpanMismatch {
        start: u64,
        end: u64,
        actual_start: u64,
        actual_end: u64,
    },

    /// Requested range partially overlaps an existing child
    #[error("Range {start} to {end} overlaps existing region {other_start} to {other_end}")]
    Overlap {
        start: u64,
        end: u64,
        other_start: u64,
        other_end: u64,
    },
}

/// Errors that can occur when reading a TIFF file's header and entries
#[derive(Debug, Clone, Error)]
pub enum TiffError {
    /// I/O error while reading the file
    #[error("I/O error: {0}")]
    Io(#[from] IoError),

    /// Entry decoding failed
    #[error("Field error: {0}")]
    Field(#[from] FieldError),

    /// Invalid TIFF magic bytes (not II or MM)
    #[error("Invalid TIFF magic bytes: expected 0x4949 (II) or 0x4D4D (MM), got 0x{0:04X}")]
    InvalidMagic(u16),

    /// Invalid TIFF version number
    #[error("Invalid TIFF version: expected 42, got {0}")]
    InvalidVersion(u16),

    /// BigTIFF uses 20-byte entries and is not handled by the 12-byte decoder
    #[error("BigTIFF files are not supported")]
    UnsupportedBigTiff,

    /// File is too small to contain a valid TIFF header
    #[error("File too small: need at least {required} bytes, got {actual}")]
    FileTooSmall { required: u64, actual: u64 },

    /// Invalid IFD offset (points outside file)
    #[error("Invalid IFD offset: {0}")]
    InvalidIfdOffset(u64),
}
