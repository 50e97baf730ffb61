use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::Path;
use std::sync::Mutex;

use bytes::Bytes;
use tracing::debug;

use super::ByteSource;
use crate::error::IoError;

// =============================================================================
// MemorySource
// =============================================================================

/// In-memory implementation of ByteSource.
///
/// Cloning is cheap: the underlying buffer is reference counted.
#[derive(Debug, Clone)]
pub struct MemorySource {
    data: Bytes,
    identifier: String,
}

impl MemorySource {
    /// Wrap a buffer, using `identifier` in log output.
    pub fn new(data: impl Into<Bytes>, identifier: impl Into<String>) -> Self {
        Self {
            data: data.into(),
            identifier: identifier.into(),
        }
    }
}

impl ByteSource for MemorySource {
    fn read_at(&self, offset: u64, len: usize) -> Result<Bytes, IoError> {
        let size = self.data.len() as u64;
        if offset > size {
            return Err(IoError::RangeOutOfBounds {
                offset,
                requested: len as u64,
                size,
            });
        }

        let start = offset as usize;
        let end = start.saturating_add(len).min(self.data.len());
        Ok(self.data.slice(start..end))
    }

    fn size(&self) -> u64 {
        self.data.len() as u64
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }
}

// =============================================================================
// FileSource
// =============================================================================

/// Local file implementation of ByteSource.
///
/// Seek and read happen under one lock, so concurrent callers see consistent
/// positioned reads while decoding still runs in parallel.
#[derive(Debug)]
pub struct FileSource {
    file: Mutex<File>,
    size: u64,
    identifier: String,
}

impl FileSource {
    /// Open a file for positioned reads.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, IoError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let size = file.metadata()?.len();
        let identifier = path.display().to_string();

        debug!(file = %identifier, size, "opened byte source");

        Ok(Self {
            file: Mutex::new(file),
            size,
            identifier,
        })
    }
}

impl ByteSource for FileSource {
    fn read_at(&self, offset: u64, len: usize) -> Result<Bytes, IoError> {
        if offset > self.size {
            return Err(IoError::RangeOutOfBounds {
                offset,
                requested: len as u64,
                size: self.size,
            });
        }

        let mut file = self
            .file
            .lock()
            .map_err(|_| IoError::Read(format!("{}: file lock poisoned", self.identifier)))?;

        file.seek(SeekFrom::Start(offset))?;

        let mut buf = Vec::with_capacity(len);
        (&mut *file).take(len as u64).read_to_end(&mut buf)?;

        Ok(Bytes::from(buf))
    }

    fn size(&self) -> u64 {
        self.size
    }

    fn identifier(&self) -> &str {
        &self.identifier
    }
}
