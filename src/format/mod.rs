//! Binary format decoders.
//!
//! Only classic TIFF is handled: its header selects the byte order, and its
//! directory entries are decoded one 12-byte record at a time.

pub mod tiff;
