//! Region navigation over a decoded file layout.
//!
//! Tests verify:
//! - Decoded fields slot into a directory section as leaves
//! - Offset and Data targets become addressable spans
//! - Lookups resolve to the innermost region
//! - Fields refuse to be split, even through a composite parent

use tiff_layout::{
    decode_at, same_region, ByteOrder, Decoded, Field, MemorySource, Region, RegionError, Section,
    Target, TiffHeader,
};

use super::test_utils::striped_tiff;

/// Build a region tree for the striped test file.
fn build_layout() -> (Section, Vec<Decoded>, [u64; 3]) {
    let (built, strips) = striped_tiff(ByteOrder::LittleEndian);
    let source = MemorySource::new(built.bytes.clone(), "striped.tif");
    let header = TiffHeader::read(&source).unwrap();

    let mut file = Section::new("file", 0, built.bytes.len() as u64);
    file.split(0, 8, Box::new(Section::new("header", 0, 8)))
        .unwrap();
    file.split(
        built.ifd_offset,
        built.ifd_end(),
        Box::new(Section::new("ifd", built.ifd_offset, built.ifd_end())),
    )
    .unwrap();

    let mut decoded = Vec::new();
    for i in 0..built.entry_count {
        let entry = decode_at(&source, built.entry_offset(i), header.byte_order).unwrap();
        let field = entry.field.clone();
        file.split(field.start, field.end, Box::new(field)).unwrap();

        if let Some(Target::Offset(offset)) = &entry.target {
            let len = offset.byte_len().unwrap();
            let label = if offset.is_data { "pixel_offsets" } else { "values" };
            file.split(
                offset.to,
                offset.to + len,
                Box::new(Section::new(label, offset.to, offset.to + len)),
            )
            .unwrap();
        }
        decoded.push(entry);
    }

    for &strip in &strips {
        file.split(strip, strip + 16, Box::new(Section::new("pixel_data", strip, strip + 16)))
            .unwrap();
    }

    (file, decoded, strips)
}

#[test]
fn test_layout_tree_shape() {
    let (file, decoded, _) = build_layout();

    // header, ifd, 5 value arrays, 3 strips
    assert_eq!(file.child_count(), 10);
    let labels: Vec<&str> = file.children().map(|c| c.label()).collect();
    assert_eq!(labels[0], "header");
    assert_eq!(labels[1], "ifd");
    assert_eq!(labels.iter().filter(|l| **l == "pixel_data").count(), 3);
    assert_eq!(labels.iter().filter(|l| **l == "pixel_offsets").count(), 1);

    let starts: Vec<u64> = file.children().map(|c| c.start()).collect();
    let mut sorted = starts.clone();
    sorted.sort_unstable();
    assert_eq!(starts, sorted);

    assert_eq!(decoded.len(), 9);
}

#[test]
fn test_find_resolves_innermost_region() {
    let (file, decoded, strips) = build_layout();

    // Every byte of every entry resolves to a field with that entry's span
    for entry in &decoded {
        for offset in entry.field.start..entry.field.end {
            let found = file.find(offset).unwrap();
            assert_eq!(found.label(), "ifd_field");
            assert_eq!(found.start(), entry.field.start);
            assert_eq!(found.end(), entry.field.end);
        }
    }

    // The entry count and next-IFD pointer belong to the directory itself
    assert_eq!(file.find(8).unwrap().label(), "ifd");
    assert_eq!(file.find(118).unwrap().label(), "ifd");

    assert_eq!(file.find(strips[1] + 3).unwrap().label(), "pixel_data");
    assert_eq!(file.find(2).unwrap().label(), "header");

    let strip_table = decoded[5].offset().unwrap().to;
    assert_eq!(file.find(strip_table).unwrap().label(), "pixel_offsets");

    assert!(matches!(
        file.find(10_000),
        Err(RegionError::OutOfRange { offset: 10_000, .. })
    ));
}

#[test]
fn test_split_into_field_is_refused() {
    let (mut file, decoded, _) = build_layout();
    let field = &decoded[0].field;

    // A range strictly inside the entry is delegated to the field, which refuses
    let result = file.split(
        field.start,
        field.start + 4,
        Box::new(Section::new("id_and_type", field.start, field.start + 4)),
    );
    assert_eq!(
        result.unwrap_err(),
        RegionError::Unsplittable {
            start: field.start,
            end: field.end
        }
    );

    // A range flush with the entry's end is not nested, so it collides instead
    let result = file.split(
        field.start + 8,
        field.end,
        Box::new(Section::new("value", field.start + 8, field.end)),
    );
    assert!(matches!(result, Err(RegionError::Overlap { .. })));
}

#[test]
fn test_field_identity_through_find() {
    let (built, _) = striped_tiff(ByteOrder::LittleEndian);
    let source = MemorySource::new(built.bytes.clone(), "striped.tif");
    let decoded = decode_at(&source, built.entry_offset(4), ByteOrder::LittleEndian).unwrap();
    let field: Field = decoded.field;

    let found = field.find(field.start + 11).unwrap();
    assert!(same_region(found, &field));
    assert!(field.contains_region(field.start, field.end - 1));
    assert!(!field.contains_region(field.start, field.end));
}
