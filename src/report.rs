//! Human-readable and JSON descriptions of decoded entries.
//!
//! This layer only consumes decoded facts and the lookup tables. Nothing in
//! the decoding core depends on it.

use serde::Serialize;

use crate::format::tiff::{value_name, Decoded, Field, FieldType, Target};

// =============================================================================
// Report Types
// =============================================================================

/// Serializable description of one decoded entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryReport {
    /// First byte of the entry
    pub start: u64,

    /// One past the last byte of the entry
    pub end: u64,

    /// Entry bytes as hex, in file order
    pub raw: String,

    /// Tag number
    pub tag_id: u16,

    /// Tag name, if the tag is known
    pub tag_name: Option<&'static str>,

    /// Type code
    pub type_id: u16,

    /// Type name
    pub type_name: &'static str,

    /// Number of values
    pub count: u32,

    /// Literal value or file offset
    pub value: u32,

    /// Whether `value` is a file offset
    pub is_offset: bool,

    /// Interpretation of an inline value, when one is available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,

    /// Follow-up the walker must act on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<TargetReport>,
}

/// Serializable form of a decode follow-up.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TargetReport {
    /// Values stored out of line
    Offset {
        to: u64,
        count: u32,
        byte_len: Option<u64>,
        is_data: bool,
    },
    /// Single pixel-data blob
    Data { start: u64 },
}

impl From<&Target> for TargetReport {
    fn from(target: &Target) -> Self {
        match target {
            Target::Offset(offset) => TargetReport::Offset {
                to: offset.to,
                count: offset.count,
                byte_len: offset.byte_len(),
                is_data: offset.is_data,
            },
            Target::Data(data) => TargetReport::Data { start: data.start },
        }
    }
}

impl From<&Decoded> for EntryReport {
    fn from(decoded: &Decoded) -> Self {
        let field = &decoded.field;

        EntryReport {
            start: field.start,
            end: field.end,
            raw: spaced_hex(&field.raw),
            tag_id: field.id,
            tag_name: field.tag().map(|tag| tag.name()),
            type_id: field.dtype,
            type_name: field.field_type.name(),
            count: field.count,
            value: field.value,
            is_offset: field.is_offset,
            meaning: meaning(field),
            target: decoded.target.as_ref().map(TargetReport::from),
        }
    }
}

// =============================================================================
// Interpretation
// =============================================================================

/// Interpret an inline value.
///
/// Enumerated tags get their value name; inline ASCII is decoded up to the
/// first NUL. Offsets have no inline meaning.
pub fn meaning(field: &Field) -> Option<String> {
    if field.is_offset {
        return None;
    }

    let lookup = field.tag().zip(field.inline_u32());
    if let Some(name) = lookup.and_then(|(tag, value)| value_name(tag, value)) {
        return Some(name.to_string());
    }

    if field.field_type == FieldType::Ascii {
        let bytes = field.inline_bytes()?;
        let text = bytes.split(|&b| b == 0).next().unwrap_or_default();
        return Some(String::from_utf8_lossy(text).into_owned());
    }

    None
}

/// Render one plain-text sentence describing an entry.
pub fn describe(decoded: &Decoded) -> String {
    let field = &decoded.field;
    let name = field
        .tag()
        .map(|tag| tag.name().to_string())
        .unwrap_or_else(|| format!("Unknown({})", field.id));
    let plural = if field.count == 1 { "" } else { "s" };

    let mut text = format!(
        "[{}..{}) {} {}: {} is {} {} value{}, the value shows {}",
        field.start,
        field.end,
        spaced_hex(&field.raw),
        field.id,
        name,
        field.count,
        field.field_type.name(),
        plural,
        field.value,
    );

    match (&decoded.target, meaning(field)) {
        (Some(Target::Offset(offset)), _) if offset.is_data => {
            text.push_str(" which is an offset to pixel data");
        }
        (Some(Target::Offset(_)), _) => text.push_str(" which is an offset"),
        (Some(Target::Data(_)), _) => text.push_str(" which points at pixel data"),
        (None, Some(meaning)) if field.field_type == FieldType::Ascii => {
            text.push_str(&format!(" which decodes to {:?}", meaning));
        }
        (None, Some(meaning)) => text.push_str(&format!(" which means {}", meaning)),
        (None, None) => {}
    }

    text
}

/// Render decoded entries as a pretty-printed JSON array of [`EntryReport`]s.
pub fn to_json(decoded: &[Decoded]) -> Result<String, serde_json::Error> {
    let reports: Vec<EntryReport> = decoded.iter().map(EntryReport::from).collect();
    serde_json::to_string_pretty(&reports)
}

fn spaced_hex(bytes: &[u8]) -> String {
    bytes
        .chunks(1)
        .map(hex::encode)
        .collect::<Vec<_>>()
        .join(" ")
}

// =============================================================================
// Tests
// =============================================================================
