use tracing::trace;

use super::{out_of_range, Region};
use crate::error::RegionError;

/// A splittable region holding an ordered set of non-overlapping children.
///
/// Used for spans whose inner structure is discovered while walking: the whole
/// file, a directory table, an out-of-line value array. Bytes not covered by
/// any child belong to the section itself.
#[derive(Debug)]
pub struct Section {
    label: &'static str,
    start: u64,
    end: u64,
    children: Vec<Box<dyn Region>>,
}

impl Section {
    /// Create an empty section over `[start, end)`.
    pub fn new(label: &'static str, start: u64, end: u64) -> Self {
        Self {
            label,
            start,
            end,
            children: Vec::new(),
        }
    }

    /// Direct children, ordered by start offset.
    pub fn children(&self) -> impl Iterator<Item = &dyn Region> + '_ {
        self.children.iter().map(|child| child.as_ref())
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl Region for Section {
    fn start(&self) -> u64 {
        self.start
    }

    fn end(&self) -> u64 {
        self.end
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn find(&self, offset: u64) -> Result<&dyn Region, RegionError> {
        if !self.contains(offset) {
            return Err(out_of_range(self, offset));
        }

        match self.children.iter().find(|child| child.contains(offset)) {
            Some(child) => child.find(offset),
            None => Ok(self),
        }
    }

    fn split(&mut self, start: u64, end: u64, region: Box<dyn Region>) -> Result<(), RegionError> {
        if start >= end {
            return Err(RegionError::EmptyRange { start, end });
        }
        if start < self.start || end > self.end {
            let offset = if start < self.start { start } else { end };
            return Err(out_of_range(self, offset));
        }
        if region.start() != start || region.end() != end {
            return Err(RegionError::SpanMismatch {
                start,
                end,
                actual_start: region.start(),
                actual_end: region.end(),
            });
        }

        if let Some(child) = self
            .children
            .iter_mut()
            .find(|child| child.contains_region(start, end))
        {
            return child.split(start, end, region);
        }

        if let Some(other) = self
            .children
            .iter()
            .find(|child| child.start() < end && start < child.end())
        {
            return Err(RegionError::Overlap {
                start,
                end,
                other_start: other.start(),
                other_end: other.end(),
            });
        }

        trace!(
            section = self.label,
            child = region.label(),
            start,
            end,
            "split region"
        );

        let index = self.children.partition_point(|child| child.start() < start);
        self.children.insert(index, region);
        Ok(())
    }
}
