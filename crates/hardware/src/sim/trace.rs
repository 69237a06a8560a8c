//! Access trace reader.
//!
//! A trace is a text file with one access per line:
//!
//! ```text
//! R 1000
//! W 0x7ffe3c
//! ```
//!
//! The first token is a single operation character and the second an
//! unsigned hexadecimal address (the `0x` prefix is optional). Lines with the
//! wrong number of tokens, a multi-character operation or an unparseable
//! address are skipped and counted; they never reach the MMU. Operation
//! characters other than `R`/`W` are passed through and ignored by the MMU.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::common::{TraceError, VirtAddr};

/// One parsed trace line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TraceRecord {
    /// Operation character (`R`, `W`, or anything the MMU will ignore).
    pub op: char,
    /// Accessed virtual address.
    pub addr: VirtAddr,
}

impl TraceRecord {
    /// Parses a single trace line.
    ///
    /// Returns `None` for blank or malformed lines.
    pub fn parse(line: &str) -> Option<Self> {
        let mut tokens = line.split_whitespace();
        let (op_tok, addr_tok) = (tokens.next()?, tokens.next()?);
        if tokens.next().is_some() {
            return None;
        }

        let mut chars = op_tok.chars();
        let op = chars.next()?;
        if chars.next().is_some() {
            return None;
        }

        let digits = addr_tok
            .strip_prefix("0x")
            .or_else(|| addr_tok.strip_prefix("0X"))
            .unwrap_or(addr_tok);
        let addr = u64::from_str_radix(digits, 16).ok()?;

        Some(Self {
            op,
            addr: VirtAddr::new(addr),
        })
    }
}

/// Streaming reader over a trace.
///
/// Yields parsed records in file order; malformed lines are skipped and
/// counted. Only I/O failures surface as errors.
#[derive(Debug)]
pub struct TraceReader<R> {
    inner: R,
    buf: Vec<u8>,
    line_no: u64,
    skipped: u64,
}

impl TraceReader<BufReader<File>> {
    /// Opens a trace file.
    ///
    /// # Errors
    ///
    /// Returns [`TraceError::Open`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, TraceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| TraceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::new(BufReader::new(file)))
    }
}

impl<R: BufRead> TraceReader<R> {
    /// Wraps any buffered reader.
    pub const fn new(inner: R) -> Self {
        Self {
            inner,
            buf: Vec::new(),
            line_no: 0,
            skipped: 0,
        }
    }

    /// Number of non-blank lines skipped as malformed so far.
    pub const fn skipped(&self) -> u64 {
        self.skipped
    }

    /// Number of lines read so far.
    pub const fn lines_read(&self) -> u64 {
        self.line_no
    }
}

impl<R: BufRead> Iterator for TraceReader<R> {
    type Item = Result<TraceRecord, TraceError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            self.buf.clear();
            match self.inner.read_until(b'\n', &mut self.buf) {
                Ok(0) => return None,
                Ok(_) => {}
                Err(e) => return Some(Err(TraceError::Read(e))),
            }
            self.line_no += 1;

            let line = String::from_utf8_lossy(&self.buf);
            if line.trim().is_empty() {
                continue;
            }
            if let Some(record) = TraceRecord::parse(&line) {
                return Some(Ok(record));
            }
            self.skipped += 1;
            debug!(line = self.line_no, text = %line.trim_end(), "skipping malformed trace line");
        }
    }
}
