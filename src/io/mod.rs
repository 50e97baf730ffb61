mod byte_source;
mod sources;

pub use byte_source::{read_u16_be, read_u16_le, read_u32_be, read_u32_le, ByteSource};
pub use sources::{FileSource, MemorySource};
