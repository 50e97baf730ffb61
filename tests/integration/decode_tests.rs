//! Entry decoding over whole files.
//!
//! Tests verify:
//! - Header byte order drives entry decoding for II and MM files
//! - Inline values, out-of-line arrays, and pixel-data pointers are classified
//! - Stream and positioned decoding agree
//! - Files on disk decode through FileSource
//! - Entries decode concurrently from a shared source

use std::io::{Cursor, Seek, SeekFrom};

use tiff_layout::{
    decode, decode_at, ByteOrder, ByteSource, Data, Decoded, EntryReport, FieldError, FieldType,
    FileSource, MemorySource, TargetReport, TiffError, TiffHeader, TiffTag,
};

use super::test_utils::{build_tiff, striped_tiff, BuiltTiff, EntrySpec};

fn decode_directory(source: &MemorySource, built: &BuiltTiff) -> Vec<Decoded> {
    let header = TiffHeader::read(source).unwrap();
    (0..built.entry_count)
        .map(|i| decode_at(source, built.entry_offset(i), header.byte_order).unwrap())
        .collect()
}

fn check_striped_directory(order: ByteOrder) {
    let (built, strips) = striped_tiff(order);
    let source = MemorySource::new(built.bytes.clone(), "striped.tif");

    let header = TiffHeader::read(&source).unwrap();
    assert_eq!(header.byte_order, order);
    assert_eq!(header.first_entry_offset(), built.entry_offset(0));

    let entries = decode_directory(&source, &built);
    assert_eq!(entries.len(), 9);

    // ImageWidth and ImageLength are inline SHORTs
    assert_eq!(entries[0].field.tag(), Some(TiffTag::ImageWidth));
    assert_eq!(entries[0].field.inline_u32(), Some(8));
    assert!(entries[0].target.is_none());
    assert_eq!(entries[1].field.inline_u32(), Some(6));

    // BitsPerSample: 3 SHORTs = 6 bytes, out of line
    let bits = entries[2].offset().unwrap();
    assert_eq!(bits.to, built.payload_offsets[2].unwrap());
    assert_eq!(bits.byte_len(), Some(6));
    assert!(!bits.is_data);

    // XResolution: one RATIONAL is 8 bytes
    let resolution = entries[4].offset().unwrap();
    assert_eq!(resolution.dtype, FieldType::Rational.as_u16());
    assert_eq!(resolution.to, built.payload_offsets[4].unwrap());

    // StripOffsets array: an offset to a table of pixel-data pointers
    let strip_offsets = entries[5].offset().unwrap();
    assert!(strip_offsets.is_data);
    assert_eq!(strip_offsets.field_id, 273);
    assert_eq!(strip_offsets.count, 3);
    assert_eq!(strip_offsets.from, built.entry_offset(5));

    let table = source.read_at(strip_offsets.to, 12).unwrap();
    let pointers: Vec<u64> = table
        .chunks(4)
        .map(|chunk| order.read_u32(chunk) as u64)
        .collect();
    assert_eq!(pointers, strips.to_vec());

    // StripByteCounts is out of line but not pixel data
    assert!(!entries[6].offset().unwrap().is_data);

    // ImageDescription: 4 ASCII bytes inline
    assert!(!entries[8].field.is_offset);
    assert_eq!(entries[8].field.inline_bytes(), Some(&b"abc\0"[..]));

    for entry in &entries {
        assert_eq!(entry.field.end - entry.field.start, 12);
        assert!(entry.offset().is_none() || entry.data().is_none());
        assert_eq!(
            entry.field.is_offset,
            entry.field.total_size() > 4,
            "tag {}",
            entry.field.id
        );
    }
}

// =============================================================================
// Byte Order Tests
// =============================================================================

#[test]
fn test_little_endian_directory() {
    check_striped_directory(ByteOrder::LittleEndian);
}

#[test]
fn test_big_endian_directory() {
    check_striped_directory(ByteOrder::BigEndian);
}

#[test]
fn test_byte_orders_decode_to_same_facts() {
    let (le, _) = striped_tiff(ByteOrder::LittleEndian);
    let (be, _) = striped_tiff(ByteOrder::BigEndian);

    let le_entries = decode_directory(&MemorySource::new(le.bytes.clone(), "le"), &le);
    let be_entries = decode_directory(&MemorySource::new(be.bytes.clone(), "be"), &be);

    for (a, b) in le_entries.iter().zip(&be_entries) {
        assert_eq!(a.field.id, b.field.id);
        assert_eq!(a.field.count, b.field.count);
        assert_eq!(a.field.inline_u32(), b.field.inline_u32());
        assert_eq!(a.target, b.target);
    }
}

// =============================================================================
// Pixel Data Pointer Tests
// =============================================================================

#[test]
fn test_single_strip_yields_data() {
    let entries = [
        EntrySpec::inline(256, 4, 1, 16),
        EntrySpec::inline(273, 4, 1, 118),
        EntrySpec::inline(279, 4, 1, 64),
    ];
    let built = build_tiff(ByteOrder::LittleEndian, &entries);
    let source = MemorySource::new(built.bytes.clone(), "single-strip.tif");

    let decoded = decode_directory(&source, &built);
    assert_eq!(decoded[1].data(), Some(&Data { start: 118 }));
    assert!(decoded[1].offset().is_none());
    assert!(decoded[0].target.is_none());
    assert!(decoded[2].target.is_none());
}

#[test]
fn test_tile_offsets_array_is_pixel_data() {
    let tiles: Vec<u8> = [1000u32, 2000, 3000, 4000]
        .iter()
        .flat_map(|v| v.to_be_bytes())
        .collect();
    let entries = [
        EntrySpec::inline(322, 3, 1, 256 << 16),
        EntrySpec::out_of_line(324, 4, 4, tiles),
    ];
    let built = build_tiff(ByteOrder::BigEndian, &entries);
    let source = MemorySource::new(built.bytes.clone(), "tiled.tif");

    let decoded = decode_directory(&source, &built);
    let offset = decoded[1].offset().unwrap();
    assert!(offset.is_data);
    assert_eq!(offset.byte_len(), Some(16));
    assert_eq!(offset.to, built.payload_offsets[1].unwrap());

    let report = EntryReport::from(&decoded[1]);
    assert_eq!(report.tag_name, Some("TileOffsets"));
    assert!(matches!(
        report.target,
        Some(TargetReport::Offset { is_data: true, .. })
    ));
}

// =============================================================================
// Stream Decoding Tests
// =============================================================================

#[test]
fn test_stream_decode_matches_positioned_decode() {
    let (built, _) = striped_tiff(ByteOrder::LittleEndian);
    let source = MemorySource::new(built.bytes.clone(), "striped.tif");
    let positioned = decode_directory(&source, &built);

    let mut cursor = Cursor::new(built.bytes.clone());
    cursor.seek(SeekFrom::Start(built.entry_offset(0))).unwrap();

    for (i, expected) in positioned.iter().enumerate() {
        let start = cursor.position();
        assert_eq!(start, built.entry_offset(i));
        let streamed = decode(&mut cursor, start, ByteOrder::LittleEndian).unwrap();
        assert_eq!(&streamed, expected);
    }

    // The next-IFD pointer follows the last entry
    assert_eq!(cursor.position() + 4, built.ifd_end());
}

#[test]
fn test_truncated_directory_reports_short_read() {
    let (built, _) = striped_tiff(ByteOrder::LittleEndian);
    let truncated = built.bytes[..built.entry_offset(3) as usize + 5].to_vec();
    let source = MemorySource::new(truncated, "truncated.tif");

    assert!(decode_at(&source, built.entry_offset(2), ByteOrder::LittleEndian).is_ok());
    let result = decode_at(&source, built.entry_offset(3), ByteOrder::LittleEndian);
    assert!(matches!(
        result,
        Err(FieldError::ShortRead {
            expected: 12,
            actual: 5
        })
    ));
}

#[test]
fn test_unknown_type_in_file() {
    let entries = [EntrySpec::inline(256, 14, 1, 1)];
    let built = build_tiff(ByteOrder::LittleEndian, &entries);
    let source = MemorySource::new(built.bytes.clone(), "bad-type.tif");

    let result = decode_at(&source, built.entry_offset(0), ByteOrder::LittleEndian);
    assert!(matches!(result, Err(FieldError::UnknownType(14))));
}

// =============================================================================
// FileSource Tests
// =============================================================================

#[test]
fn test_decode_from_file_on_disk() {
    let (built, strips) = striped_tiff(ByteOrder::BigEndian);
    let path = std::env::temp_dir().join(format!("tiff-layout-decode-{}.tif", std::process::id()));
    std::fs::write(&path, &built.bytes).unwrap();

    let source = FileSource::open(&path).unwrap();
    let header = TiffHeader::read(&source).unwrap();
    assert_eq!(header.byte_order, ByteOrder::BigEndian);

    let strip_entry = decode_at(&source, built.entry_offset(5), header.byte_order).unwrap();
    let offset = strip_entry.offset().unwrap();
    let table = source.read_at(offset.to, 12).unwrap();
    assert_eq!(ByteOrder::BigEndian.read_u32(&table[0..4]) as u64, strips[0]);

    std::fs::remove_file(&path).unwrap();
}

#[test]
fn test_bigtiff_header_rejected() {
    let mut bytes = b"II".to_vec();
    bytes.extend_from_slice(&43u16.to_le_bytes());
    bytes.extend_from_slice(&8u16.to_le_bytes());
    bytes.extend_from_slice(&[0u8; 26]);
    let source = MemorySource::new(bytes, "big.tif");

    assert!(matches!(
        TiffHeader::read(&source),
        Err(TiffError::UnsupportedBigTiff)
    ));
}

// =============================================================================
// Concurrency Tests
// =============================================================================

#[test]
fn test_concurrent_decoding() {
    let (built, _) = striped_tiff(ByteOrder::LittleEndian);
    let source = MemorySource::new(built.bytes.clone(), "striped.tif");
    let sequential = decode_directory(&source, &built);

    let parallel: Vec<Decoded> = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..built.entry_count)
            .map(|i| {
                let source = &source;
                let offset = built.entry_offset(i);
                scope.spawn(move || decode_at(source, offset, ByteOrder::LittleEndian).unwrap())
            })
            .collect();

        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert_eq!(parallel, sequential);
}
