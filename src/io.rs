//! Bounded I/O for reading ciphertext files.
//!
//! Ciphertexts are small; anything above the configured ceiling is refused
//! before it is read into memory.

use crate::error::{CipherprintError, Result};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, warn};

/// Default ceiling for ciphertext files (2 MiB).
pub const DEFAULT_MAX_CIPHERTEXT_SIZE: u64 = 2 * 1024 * 1024;

/// Resource limits for I/O operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IOLimits {
    pub max_read_bytes: u64,
    pub max_file_size: u64,
}

impl Default for IOLimits {
    fn default() -> Self {
        Self {
            max_read_bytes: DEFAULT_MAX_CIPHERTEXT_SIZE,
            max_file_size: DEFAULT_MAX_CIPHERTEXT_SIZE,
        }
    }
}

/// A bounded reader that limits the amount of data read.
pub struct BoundedReader<R> {
    inner: R,
    bytes_read: u64,
    limit: u64,
}

impl<R: Read> BoundedReader<R> {
    pub fn new(reader: R, limit: u64) -> Self {
        Self {
            inner: reader,
            bytes_read: 0,
            limit,
        }
    }

    pub fn bytes_read(&self) -> u64 {
        self.bytes_read
    }
}

impl<R: Read> Read for BoundedReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.bytes_read >= self.limit {
            return Ok(0);
        }

        let remaining = self.limit - self.bytes_read;
        let max_to_read = std::cmp::min(buf.len() as u64, remaining) as usize;
        let n = self.inner.read(&mut buf[..max_to_read])?;
        self.bytes_read += n as u64;

        if self.bytes_read >= self.limit {
            warn!(limit = self.limit, "BoundedReader limit reached");
        }
        Ok(n)
    }
}

/// File reader that enforces [`IOLimits`].
pub struct SafeFileReader {
    file: File,
    size: u64,
    limits: IOLimits,
}

impl SafeFileReader {
    /// Open a file, refusing it if larger than `limits.max_file_size`.
    pub fn open<P: AsRef<Path>>(path: P, limits: IOLimits) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let size = file.metadata()?.len();

        debug!(
            path = %path.display(),
            size,
            max_file = limits.max_file_size,
            "opening ciphertext"
        );

        if size > limits.max_file_size {
            warn!(size, limit = limits.max_file_size, "ciphertext file too large");
            return Err(CipherprintError::InputTooLarge {
                size,
                limit: limits.max_file_size,
            });
        }

        Ok(Self { file, size, limits })
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    /// Read the whole file.
    ///
    /// Fails with [`CipherprintError::InputTooLarge`] rather than returning
    /// a prefix when the file holds more than `limits.max_read_bytes`,
    /// including when it grew after [`SafeFileReader::open`].
    pub fn read_all(&mut self) -> Result<Vec<u8>> {
        let limit = self.limits.max_read_bytes;
        if self.size > limit {
            warn!(size = self.size, limit, "ciphertext exceeds read limit");
            return Err(CipherprintError::InputTooLarge {
                size: self.size,
                limit,
            });
        }

        let mut data = Vec::with_capacity(self.size as usize);
        let read = {
            let mut reader = BoundedReader::new(&mut self.file, limit);
            reader.read_to_end(&mut data)?;
            reader.bytes_read()
        };

        if read >= limit {
            let mut extra = [0u8; 1];
            if self.file.read(&mut extra)? > 0 {
                warn!(read, limit, "ciphertext grew past read limit while reading");
                return Err(CipherprintError::InputTooLarge {
                    size: std::cmp::max(self.size, read + 1),
                    limit,
                });
            }
        }
        Ok(data)
    }
}

/// Read a ciphertext file under `limits`. Empty files are returned as-is.
pub fn read_ciphertext<P: AsRef<Path>>(path: P, limits: &IOLimits) -> Result<Vec<u8>> {
    SafeFileReader::open(path, *limits)?.read_all()
}
