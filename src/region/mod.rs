//! Addressable byte regions.
//!
//! An annotator walking a TIFF file describes it as a tree of regions: the
//! whole file, directory tables, pixel-data blobs, and the 12-byte entries
//! inside directories. Every kind answers the same queries so the walker can
//! check overlaps and descend without knowing what it is looking at.
//!
//! Two shapes implement [`Region`]:
//!
//! - **Leaves** such as [`Field`](crate::format::tiff::Field) are atomic.
//!   `find` resolves to the leaf itself and `split` always fails.
//! - **Composites** such as [`Section`] own child regions and can be split
//!   into smaller pieces.

mod section;

use std::fmt;

use crate::error::RegionError;

pub use section::Section;

/// Shared capability of every addressable region over its `[start, end)` span.
pub trait Region: fmt::Debug + Send + Sync {
    /// First byte of the region.
    fn start(&self) -> u64;

    /// One past the last byte of the region.
    fn end(&self) -> u64;

    /// Short name of the region kind.
    fn label(&self) -> &'static str;

    /// True iff `start <= offset < end`.
    fn contains(&self, offset: u64) -> bool {
        self.start() <= offset && offset < self.end()
    }

    /// True iff `[start, end)` sits strictly inside this region.
    ///
    /// The start bound may coincide with this region's start, but the end
    /// bound may touch neither this region's start nor its end. Sub-ranges
    /// flush with the end are therefore rejected.
    fn contains_region(&self, start: u64, end: u64) -> bool {
        self.start() <= start && start < self.end() && self.start() < end && end < self.end()
    }

    /// Resolve `offset` to the innermost region that covers it.
    fn find(&self, offset: u64) -> Result<&dyn Region, RegionError>;

    /// Carve `[start, end)` out of this region and hand it to `region`.
    fn split(&mut self, start: u64, end: u64, region: Box<dyn Region>) -> Result<(), RegionError>;

    /// Length of the region in bytes. An inverted span has length 0.
    fn len(&self) -> u64 {
        self.end().saturating_sub(self.start())
    }

    /// Whether the region covers no bytes.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Error for a lookup that falls outside `region`.
pub(crate) fn out_of_range(region: &dyn Region, offset: u64) -> RegionError {
    RegionError::OutOfRange {
        offset,
        start: region.start(),
        end: region.end(),
    }
}

/// Compare two region references by address.
///
/// `find` hands back borrowed trait objects, so identity is the only
/// meaningful equality.
pub fn same_region(a: &dyn Region, b: &dyn Region) -> bool {
    std::ptr::eq(
        a as *const dyn Region as *const (),
        b as *const dyn Region as *const (),
    )
}
