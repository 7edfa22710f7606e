/// Line-oriented record reader for taxonomy dumps
use super::format::RecordFormat;
use super::TaxonRecord;
use crate::{Result, TaxopruneError};
use std::io::BufRead;
use tracing::{debug, info};

/// Records between progress events unless configured otherwise.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 100_000;

/// Decodes [`TaxonRecord`]s from a buffered stream, one per line.
///
/// A line that cannot be decoded is fatal unless it is the unterminated last
/// line of the stream, in which case reading simply stops there.
pub struct RecordReader<R> {
    inner: R,
    format: RecordFormat,
    buf: Vec<u8>,
    line_number: usize,
    records_read: u64,
    progress_interval: u64,
    header_pending: bool,
    finished: bool,
}

impl<R: BufRead> RecordReader<R> {
    pub fn new(inner: R, format: RecordFormat) -> Self {
        Self {
            inner,
            format,
            buf: Vec::with_capacity(256),
            line_number: 0,
            records_read: 0,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
            header_pending: format.has_header(),
            finished: false,
        }
    }

    /// Emit a progress event every `interval` records (0 disables).
    pub fn with_progress_interval(mut self, interval: u64) -> Self {
        self.progress_interval = interval;
        self
    }

    /// 1-based number of the last physical line read (headers included).
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Read the next record, or `None` at end of input.
    pub fn next_record(&mut self) -> Result<Option<TaxonRecord>> {
        if self.finished {
            return Ok(None);
        }

        if self.header_pending {
            self.header_pending = false;
            if !self.fill_line()? {
                self.finished = true;
                return Ok(None);
            }
            debug!("Skipped header line");
        }

        if !self.fill_line()? {
            self.finished = true;
            return Ok(None);
        }

        let at_end = self.buf.last() != Some(&b'\n');
        let text = String::from_utf8_lossy(&self.buf);
        let line: &str = text.as_ref();
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);

        match self.format.decode(line) {
            Ok(record) => {
                self.records_read += 1;
                if self.progress_interval > 0 && self.records_read % self.progress_interval == 0 {
                    info!(
                        records = self.records_read,
                        line = self.line_number,
                        "Reading taxonomy records"
                    );
                }
                Ok(Some(record))
            }
            Err(e) if at_end => {
                debug!(
                    "Incomplete final line {} dropped ({})",
                    self.line_number, e
                );
                self.finished = true;
                Ok(None)
            }
            Err(e) => {
                self.finished = true;
                Err(TaxopruneError::MalformedLine {
                    line: self.line_number,
                    message: e.to_string(),
                })
            }
        }
    }

    fn fill_line(&mut self) -> Result<bool> {
        self.buf.clear();
        if self.inner.read_until(b'\n', &mut self.buf)? == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        Ok(true)
    }
}

impl<R: BufRead> Iterator for RecordReader<R> {
    type Item = Result<TaxonRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record().transpose()
    }
}
