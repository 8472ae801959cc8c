//! Trace files - persisting reference traces to disk.
//!
//! Two formats are understood:
//! - Binary: a [`TraceHeader`] followed by little-endian `u32` page ids,
//!   protected by a CRC32 of the body
//! - Text: whitespace-separated page ids, written one per line

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::common::{Error, PageId, Result};
use crate::trace::ReferenceTrace;

/// Metadata stored at the start of a binary trace file.
///
/// # Layout (16 bytes)
/// ```text
/// Offset  Size  Field
/// ------  ----  -----
/// 0       4     magic (b"PGTR")
/// 4       1     version
/// 5       3     reserved (zero)
/// 8       4     count (number of references, little-endian)
/// 12      4     checksum (CRC32 of the body, little-endian)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceHeader {
    /// Number of references in the body.
    pub count: u32,
    /// CRC32 of the body bytes.
    pub checksum: u32,
}

impl TraceHeader {
    /// Size of the header in bytes.
    pub const SIZE: usize = 16;

    pub const MAGIC: [u8; 4] = *b"PGTR";
    pub const VERSION: u8 = 1;

    pub const OFFSET_VERSION: usize = 4;
    pub const OFFSET_COUNT: usize = 8;
    pub const OFFSET_CHECKSUM: usize = 12;

    /// Check whether `data` starts with the trace magic.
    pub fn has_magic(data: &[u8]) -> bool {
        data.len() >= Self::MAGIC.len() && data[..Self::MAGIC.len()] == Self::MAGIC
    }

    /// Read a header from the beginning of a byte slice.
    ///
    /// # Errors
    /// Returns `Error::MalformedTrace` on a short buffer, wrong magic, or
    /// unknown version.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        if data.len() < Self::SIZE {
            return Err(Error::MalformedTrace(format!(
                "header needs {} bytes, got {}",
                Self::SIZE,
                data.len()
            )));
        }
        if !Self::has_magic(data) {
            return Err(Error::MalformedTrace("bad magic".into()));
        }
        let version = data[Self::OFFSET_VERSION];
        if version != Self::VERSION {
            return Err(Error::MalformedTrace(format!("unsupported version {}", version)));
        }

        Ok(Self {
            count: read_u32(data, Self::OFFSET_COUNT),
            checksum: read_u32(data, Self::OFFSET_CHECKSUM),
        })
    }

    /// Serialize the header.
    pub fn to_bytes(&self) -> [u8; Self::SIZE] {
        let mut data = [0u8; Self::SIZE];
        data[..Self::MAGIC.len()].copy_from_slice(&Self::MAGIC);
        data[Self::OFFSET_VERSION] = Self::VERSION;
        data[Self::OFFSET_COUNT..Self::OFFSET_COUNT + 4].copy_from_slice(&self.count.to_le_bytes());
        data[Self::OFFSET_CHECKSUM..Self::OFFSET_CHECKSUM + 4]
            .copy_from_slice(&self.checksum.to_le_bytes());
        data
    }
}

fn read_u32(data: &[u8], offset: usize) -> u32 {
    u32::from_le_bytes([
        data[offset],
        data[offset + 1],
        data[offset + 2],
        data[offset + 3],
    ])
}

/// Reads and writes trace files.
pub struct TraceFile;

impl TraceFile {
    /// Encode a trace in the binary format.
    pub fn encode(trace: &ReferenceTrace) -> Vec<u8> {
        let body: Vec<u8> = trace.iter().flat_map(|page| page.0.to_le_bytes()).collect();

        let header = TraceHeader {
            count: trace.len() as u32,
            checksum: crc32fast::hash(&body),
        };

        let mut data = Vec::with_capacity(TraceHeader::SIZE + body.len());
        data.extend_from_slice(&header.to_bytes());
        data.extend_from_slice(&body);
        data
    }

    /// Decode a binary trace, validating it against `max_pages`.
    ///
    /// # Errors
    /// - `Error::MalformedTrace` if the header is bad or the body length
    ///   does not match the count
    /// - `Error::ChecksumMismatch` if the body is corrupted
    /// - `Error::OutOfRangeReference` if an id exceeds `max_pages`
    pub fn decode(data: &[u8], max_pages: usize) -> Result<ReferenceTrace> {
        let header = TraceHeader::from_bytes(data)?;
        let body = &data[TraceHeader::SIZE..];

        let expected_len = header.count as usize * 4;
        if body.len() != expected_len {
            return Err(Error::MalformedTrace(format!(
                "body is {} bytes, header promises {}",
                body.len(),
                expected_len
            )));
        }

        let actual = crc32fast::hash(body);
        if actual != header.checksum {
            return Err(Error::ChecksumMismatch {
                expected: header.checksum,
                actual,
            });
        }

        let pages = body
            .chunks_exact(4)
            .map(|chunk| PageId::new(read_u32(chunk, 0)))
            .collect();
        ReferenceTrace::new(pages, max_pages)
    }

    /// Write `trace` to `path` in the binary format, replacing any file.
    ///
    /// # Errors
    /// Returns I/O errors from creating or writing the file.
    pub fn save<P: AsRef<Path>>(path: P, trace: &ReferenceTrace) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(&Self::encode(trace))?;
        file.sync_all()?;
        Ok(())
    }

    /// Write `trace` to `path` as one id per line.
    ///
    /// # Errors
    /// Returns I/O errors from writing the file.
    pub fn save_text<P: AsRef<Path>>(path: P, trace: &ReferenceTrace) -> Result<()> {
        fs::write(path, trace.to_text())?;
        Ok(())
    }

    /// Read a trace, detecting the binary format by its magic and falling
    /// back to text.
    ///
    /// # Errors
    /// Returns I/O errors, plus any decode or parse error for the detected
    /// format.
    pub fn load<P: AsRef<Path>>(path: P, max_pages: usize) -> Result<ReferenceTrace> {
        let data = fs::read(path)?;

        if TraceHeader::has_magic(&data) {
            Self::decode(&data, max_pages)
        } else {
            let text = std::str::from_utf8(&data)
                .map_err(|e| Error::MalformedTrace(format!("not UTF-8 text: {}", e)))?;
            ReferenceTrace::parse_text(text, max_pages)
        }
    }
}
