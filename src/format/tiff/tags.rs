//! TIFF tag and field type definitions.
//!
//! This module holds the fixed lookup tables used by entry decoding and by
//! reports:
//! - Field types and their element widths
//! - Tag IDs and their names
//! - Names for the enumerated values of a few well-known tags
//!
//! All tables are `match`-based constants, so they need no initialization and
//! are freely shared between threads.

// =============================================================================
// TIFF Field Types
// =============================================================================

/// TIFF field types that determine how values are encoded.
///
/// The element width decides whether an entry's value fits in the 4-byte
/// value field or lives at an offset elsewhere in the file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum FieldType {
    /// Unsigned 8-bit integer
    Byte = 1,

    /// 8-bit ASCII character, NUL terminated
    Ascii = 2,

    /// Unsigned 16-bit integer
    Short = 3,

    /// Unsigned 32-bit integer
    Long = 4,

    /// Two LONGs: numerator then denominator
    Rational = 5,

    /// Signed 8-bit integer
    SByte = 6,

    /// Undefined byte data
    Undefined = 7,

    /// Signed 16-bit integer
    SShort = 8,

    /// Signed 32-bit integer
    SLong = 9,

    /// Two SLONGs: numerator then denominator
    SRational = 10,

    /// IEEE single precision float
    Float = 11,

    /// IEEE double precision float
    Double = 12,

    /// 32-bit offset to a sub-IFD
    Ifd = 13,

    /// Unsigned 64-bit integer (BigTIFF)
    Long8 = 16,

    /// Signed 64-bit integer (BigTIFF)
    SLong8 = 17,

    /// 64-bit offset to a sub-IFD (BigTIFF)
    Ifd8 = 18,
}

impl FieldType {
    /// Maximum bytes that can be stored inline in a classic TIFF IFD entry.
    pub const INLINE_THRESHOLD: u64 = 4;

    /// Size of a single value of this type in bytes.
    #[inline]
    pub const fn size_in_bytes(self) -> usize {
        match self {
            FieldType::Byte | FieldType::Ascii | FieldType::SByte | FieldType::Undefined => 1,
            FieldType::Short | FieldType::SShort => 2,
            FieldType::Long | FieldType::SLong | FieldType::Float | FieldType::Ifd => 4,
            FieldType::Rational
            | FieldType::SRational
            | FieldType::Double
            | FieldType::Long8
            | FieldType::SLong8
            | FieldType::Ifd8 => 8,
        }
    }

    /// Create a FieldType from its numeric value.
    ///
    /// Returns `None` for unknown type values. Callers must treat that as a
    /// decode failure: there is no safe default width.
    pub fn from_u16(value: u16) -> Option<Self> {
        match value {
            1 => Some(FieldType::Byte),
            2 => Some(FieldType::Ascii),
            3 => Some(FieldType::Short),
            4 => Some(FieldType::Long),
            5 => Some(FieldType::Rational),
            6 => Some(FieldType::SByte),
            7 => Some(FieldType::Undefined),
            8 => Some(FieldType::SShort),
            9 => Some(FieldType::SLong),
            10 => Some(FieldType::SRational),
            11 => Some(FieldType::Float),
            12 => Some(FieldType::Double),
            13 => Some(FieldType::Ifd),
            16 => Some(FieldType::Long8),
            17 => Some(FieldType::SLong8),
            18 => Some(FieldType::Ifd8),
            _ => None,
        }
    }

    /// Get the numeric type code.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Total size of `count` values of this type.
    ///
    /// Computed in 64 bits so that no count can wrap around.
    #[inline]
    pub const fn total_size(self, count: u32) -> u64 {
        self.size_in_bytes() as u64 * count as u64
    }

    /// Check if `count` values of this type fit in the 4-byte value field.
    #[inline]
    pub const fn fits_inline(self, count: u32) -> bool {
        self.total_size(count) <= Self::INLINE_THRESHOLD
    }

    /// Get the TIFF name of the type.
    pub const fn name(self) -> &'static str {
        match self {
            FieldType::Byte => "BYTE",
            FieldType::Ascii => "ASCII",
            FieldType::Short => "SHORT",
            FieldType::Long => "LONG",
            FieldType::Rational => "RATIONAL",
            FieldType::SByte => "SBYTE",
            FieldType::Undefined => "UNDEFINED",
            FieldType::SShort => "SSHORT",
            FieldType::SLong => "SLONG",
            FieldType::SRational => "SRATIONAL",
            FieldType::Float => "FLOAT",
            FieldType::Double => "DOUBLE",
            FieldType::Ifd => "IFD",
            FieldType::Long8 => "LONG8",
            FieldType::SLong8 => "SLONG8",
            FieldType::Ifd8 => "IFD8",
        }
    }
}

// =============================================================================
// TIFF Tags
// =============================================================================

/// Well-known TIFF tag IDs.
///
/// Covers the TIFF 6.0 baseline and extension tags plus the common private
/// pointer tags. Tags not listed here are still decoded; they just have no
/// name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum TiffTag {
    // -------------------------------------------------------------------------
    // Basic Image Structure
    // -------------------------------------------------------------------------
    NewSubfileType = 254,
    SubfileType = 255,
    ImageWidth = 256,
    ImageLength = 257,
    BitsPerSample = 258,
    Compression = 259,
    PhotometricInterpretation = 262,
    Threshholding = 263,
    CellWidth = 264,
    CellLength = 265,
    FillOrder = 266,
    DocumentName = 269,
    ImageDescription = 270,
    Make = 271,
    Model = 272,
    Orientation = 274,
    SamplesPerPixel = 277,
    MinSampleValue = 280,
    MaxSampleValue = 281,
    PlanarConfiguration = 284,
    PageName = 285,
    XPosition = 286,
    YPosition = 287,
    FreeOffsets = 288,
    FreeByteCounts = 289,
    GrayResponseUnit = 290,
    GrayResponseCurve = 291,
    T4Options = 292,
    T6Options = 293,
    PageNumber = 297,
    TransferFunction = 301,
    Software = 305,
    DateTime = 306,
    Artist = 315,
    HostComputer = 316,
    Predictor = 317,
    WhitePoint = 318,
    PrimaryChromaticities = 319,
    ColorMap = 320,
    HalftoneHints = 321,
    InkSet = 332,
    InkNames = 333,
    NumberOfInks = 334,
    DotRange = 336,
    TargetPrinter = 337,
    ExtraSamples = 338,
    SampleFormat = 339,
    SMinSampleValue = 340,
    SMaxSampleValue = 341,
    TransferRange = 342,
    Copyright = 33432,

    // -------------------------------------------------------------------------
    // Strip Organization
    // -------------------------------------------------------------------------
    /// Byte offsets of strips; the targets are pixel data
    StripOffsets = 273,
    RowsPerStrip = 278,
    StripByteCounts = 279,

    // -------------------------------------------------------------------------
    // Tile Organization
    // -------------------------------------------------------------------------
    TileWidth = 322,
    TileLength = 323,
    /// Byte offsets of tiles; the targets are pixel data
    TileOffsets = 324,
    TileByteCounts = 325,

    // -------------------------------------------------------------------------
    // Sub-IFDs and Private Pointers
    // -------------------------------------------------------------------------
    SubIfds = 330,
    ExifIfd = 34665,
    GpsIfd = 34853,
    InteroperabilityIfd = 40965,

    // -------------------------------------------------------------------------
    // JPEG Handling
    // -------------------------------------------------------------------------
    JpegProc = 512,
    JpegInterchangeFormat = 513,
    JpegInterchangeFormatLength = 514,
    JpegRestartInterval = 515,
    JpegTables = 347,
    YCbCrCoefficients = 529,
    YCbCrSubSampling = 530,
    YCbCrPositioning = 531,
    ReferenceBlackWhite = 532,

    // -------------------------------------------------------------------------
    // Resolution
    // -------------------------------------------------------------------------
    XResolution = 282,
    YResolution = 283,
    ResolutionUnit = 296,

    // -------------------------------------------------------------------------
    // Embedded Metadata
    // -------------------------------------------------------------------------
    Xmp = 700,
    Iptc = 33723,
    Photoshop = 34377,
    IccProfile = 34675,
}

impl TiffTag {
    /// Create a TiffTag from its numeric value.
    ///
    /// Returns `None` for unrecognized tags. Unknown tags are not an error.
    pub fn from_u16(value: u16) -> Option<Self> {
        use TiffTag::*;

        let tag = match value {
            254 => NewSubfileType,
            255 => SubfileType,
            256 => ImageWidth,
            257 => ImageLength,
            258 => BitsPerSample,
            259 => Compression,
            262 => PhotometricInterpretation,
            263 => Threshholding,
            264 => CellWidth,
            265 => CellLength,
            266 => FillOrder,
            269 => DocumentName,
            270 => ImageDescription,
            271 => Make,
            272 => Model,
            273 => StripOffsets,
            274 => Orientation,
            277 => SamplesPerPixel,
            278 => RowsPerStrip,
            279 => StripByteCounts,
            280 => MinSampleValue,
            281 => MaxSampleValue,
            282 => XResolution,
            283 => YResolution,
            284 => PlanarConfiguration,
            285 => PageName,
            286 => XPosition,
            287 => YPosition,
            288 => FreeOffsets,
            289 => FreeByteCounts,
            290 => GrayResponseUnit,
            291 => GrayResponseCurve,
            292 => T4Options,
            293 => T6Options,
            296 => ResolutionUnit,
            297 => PageNumber,
            301 => TransferFunction,
            305 => Software,
            306 => DateTime,
            315 => Artist,
            316 => HostComputer,
            317 => Predictor,
            318 => WhitePoint,
            319 => PrimaryChromaticities,
            320 => ColorMap,
            321 => HalftoneHints,
            322 => TileWidth,
            323 => TileLength,
            324 => TileOffsets,
            325 => TileByteCounts,
            330 => SubIfds,
            332 => InkSet,
            333 => InkNames,
            334 => NumberOfInks,
            336 => DotRange,
            337 => TargetPrinter,
            338 => ExtraSamples,
            339 => SampleFormat,
            340 => SMinSampleValue,
            341 => SMaxSampleValue,
            342 => TransferRange,
            347 => JpegTables,
            512 => JpegProc,
            513 => JpegInterchangeFormat,
            514 => JpegInterchangeFormatLength,
            515 => JpegRestartInterval,
            529 => YCbCrCoefficients,
            530 => YCbCrSubSampling,
            531 => YCbCrPositioning,
            532 => ReferenceBlackWhite,
            700 => Xmp,
            33432 => Copyright,
            33723 => Iptc,
            34377 => Photoshop,
            34665 => ExifIfd,
            34675 => IccProfile,
            34853 => GpsIfd,
            40965 => InteroperabilityIfd,
            _ => return None,
        };
        Some(tag)
    }

    /// Get the numeric tag ID.
    #[inline]
    pub const fn as_u16(self) -> u16 {
        self as u16
    }

    /// Whether the tag's value points at raw pixel data.
    ///
    /// StripOffsets and TileOffsets hold absolute positions of image data,
    /// whether as a single inline value or as an out-of-line array.
    #[inline]
    pub const fn points_to_pixel_data(id: u16) -> bool {
        id == TiffTag::StripOffsets as u16 || id == TiffTag::TileOffsets as u16
    }

    /// Get the TIFF name of the tag.
    pub const fn name(self) -> &'static str {
        use TiffTag::*;

        match self {
            NewSubfileType => "NewSubfileType",
            SubfileType => "SubfileType",
            ImageWidth => "ImageWidth",
            ImageLength => "ImageLength",
            BitsPerSample => "BitsPerSample",
            Compression => "Compression",
            PhotometricInterpretation => "PhotometricInterpretation",
            Threshholding => "Threshholding",
            CellWidth => "CellWidth",
            CellLength => "CellLength",
            FillOrder => "FillOrder",
            DocumentName => "DocumentName",
            ImageDescription => "ImageDescription",
            Make => "Make",
            Model => "Model",
            StripOffsets => "StripOffsets",
            Orientation => "Orientation",
            SamplesPerPixel => "SamplesPerPixel",
            RowsPerStrip => "RowsPerStrip",
            StripByteCounts => "StripByteCounts",
            MinSampleValue => "MinSampleValue",
            MaxSampleValue => "MaxSampleValue",
            XResolution => "XResolution",
            YResolution => "YResolution",
            PlanarConfiguration => "PlanarConfiguration",
            PageName => "PageName",
            XPosition => "XPosition",
            YPosition => "YPosition",
            FreeOffsets => "FreeOffsets",
            FreeByteCounts => "FreeByteCounts",
            GrayResponseUnit => "GrayResponseUnit",
            GrayResponseCurve => "GrayResponseCurve",
            T4Options => "T4Options",
            T6Options => "T6Options",
            ResolutionUnit => "ResolutionUnit",
            PageNumber => "PageNumber",
            TransferFunction => "TransferFunction",
            Software => "Software",
            DateTime => "DateTime",
            Artist => "Artist",
            HostComputer => "HostComputer",
            Predictor => "Predictor",
            WhitePoint => "WhitePoint",
            PrimaryChromaticities => "PrimaryChromaticities",
            ColorMap => "ColorMap",
            HalftoneHints => "HalftoneHints",
            TileWidth => "TileWidth",
            TileLength => "TileLength",
            TileOffsets => "TileOffsets",
            TileByteCounts => "TileByteCounts",
            SubIfds => "SubIFDs",
            InkSet => "InkSet",
            InkNames => "InkNames",
            NumberOfInks => "NumberOfInks",
            DotRange => "DotRange",
            TargetPrinter => "TargetPrinter",
            ExtraSamples => "ExtraSamples",
            SampleFormat => "SampleFormat",
            SMinSampleValue => "SMinSampleValue",
            SMaxSampleValue => "SMaxSampleValue",
            TransferRange => "TransferRange",
            JpegTables => "JPEGTables",
            JpegProc => "JPEGProc",
            JpegInterchangeFormat => "JPEGInterchangeFormat",
            JpegInterchangeFormatLength => "JPEGInterchangeFormatLength",
            JpegRestartInterval => "JPEGRestartInterval",
            YCbCrCoefficients => "YCbCrCoefficients",
            YCbCrSubSampling => "YCbCrSubSampling",
            YCbCrPositioning => "YCbCrPositioning",
            ReferenceBlackWhite => "ReferenceBlackWhite",
            Xmp => "XMP",
            Copyright => "Copyright",
            Iptc => "IPTC",
            Photoshop => "Photoshop",
            ExifIfd => "ExifIFD",
            IccProfile => "ICCProfile",
            GpsIfd => "GPSIFD",
            InteroperabilityIfd => "InteroperabilityIFD",
        }
    }
}

// =============================================================================
// Value Names
// =============================================================================

/// Look up the name of an enumerated tag value.
///
/// Returns `None` if the tag has no enumerated values or the value is not one
/// of them.
pub fn value_name(tag: TiffTag, value: u32) -> Option<&'static str> {
    let name = match (tag, value) {
        (TiffTag::NewSubfileType, 0) => "full resolution image",
        (TiffTag::NewSubfileType, 1) => "reduced resolution image",
        (TiffTag::NewSubfileType, 2) => "single page of a multi-page image",
        (TiffTag::NewSubfileType, 4) => "transparency mask",

        (TiffTag::Compression, 1) => "no compression",
        (TiffTag::Compression, 2) => "CCITT modified Huffman RLE",
        (TiffTag::Compression, 3) => "CCITT Group 3 fax",
        (TiffTag::Compression, 4) => "CCITT Group 4 fax",
        (TiffTag::Compression, 5) => "LZW",
        (TiffTag::Compression, 6) => "old-style JPEG",
        (TiffTag::Compression, 7) => "JPEG",
        (TiffTag::Compression, 8) => "Adobe Deflate",
        (TiffTag::Compression, 32773) => "PackBits",
        (TiffTag::Compression, 32946) => "Deflate",
        (TiffTag::Compression, 33003) => "JPEG 2000",

        (TiffTag::PhotometricInterpretation, 0) => "WhiteIsZero",
        (TiffTag::PhotometricInterpretation, 1) => "BlackIsZero",
        (TiffTag::PhotometricInterpretation, 2) => "RGB",
        (TiffTag::PhotometricInterpretation, 3) => "palette color",
        (TiffTag::PhotometricInterpretation, 4) => "transparency mask",
        (TiffTag::PhotometricInterpretation, 5) => "CMYK",
        (TiffTag::PhotometricInterpretation, 6) => "YCbCr",
        (TiffTag::PhotometricInterpretation, 8) => "CIELab",

        (TiffTag::FillOrder, 1) => "most significant bit first",
        (TiffTag::FillOrder, 2) => "least significant bit first",

        (TiffTag::Orientation, 1) => "top left",
        (TiffTag::Orientation, 2) => "top right",
        (TiffTag::Orientation, 3) => "bottom right",
        (TiffTag::Orientation, 4) => "bottom left",
        (TiffTag::Orientation, 5) => "left top",
        (TiffTag::Orientation, 6) => "right top",
        (TiffTag::Orientation, 7) => "right bottom",
        (TiffTag::Orientation, 8) => "left bottom",

        (TiffTag::PlanarConfiguration, 1) => "chunky",
        (TiffTag::PlanarConfiguration, 2) => "planar",

        (TiffTag::ResolutionUnit, 1) => "no absolute unit",
        (TiffTag::ResolutionUnit, 2) => "inch",
        (TiffTag::ResolutionUnit, 3) => "centimeter",

        (TiffTag::Predictor, 1) => "no prediction",
        (TiffTag::Predictor, 2) => "horizontal differencing",
        (TiffTag::Predictor, 3) => "floating point",

        (TiffTag::ExtraSamples, 0) => "unspecified",
        (TiffTag::ExtraSamples, 1) => "associated alpha",
        (TiffTag::ExtraSamples, 2) => "unassociated alpha",

        (TiffTag::SampleFormat, 1) => "unsigned integer",
        (TiffTag::SampleFormat, 2) => "signed integer",
        (TiffTag::SampleFormat, 3) => "IEEE floating point",
        (TiffTag::SampleFormat, 4) => "undefined",

        _ => return None,
    };
    Some(name)
}

// =============================================================================
// Tests
// =============================================================================
