//! Input readers that turn raw text into ordered row records

use crate::error::{common, PivotError, Result};
use crate::transpose::InputRecord;
use std::fs::File;
use std::io::{BufRead, BufReader, Cursor};
use std::path::{Path, PathBuf};

/// Source of table rows
pub trait InputReader {
    /// Produce every row of the table in order
    fn read_records(&mut self) -> Result<Vec<InputRecord>>;
}

/// Splits a text stream into 0-based sequential line records
///
/// Both `\n` and `\r\n` terminate a line and neither ends up in the
/// record text. A trailing line break does not start another record.
pub struct LineReader<R> {
    inner: R,
    path: Option<PathBuf>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, path: None }
    }
}

impl LineReader<BufReader<File>> {
    /// Open a file for reading
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|e| common::input_read_error(path).with_source(e))?;
        Ok(Self {
            inner: BufReader::new(file),
            path: Some(path.to_path_buf()),
        })
    }
}

impl LineReader<Cursor<String>> {
    /// Read from an in-memory text blob
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(Cursor::new(text.into()))
    }
}

impl<R: BufRead> InputReader for LineReader<R> {
    fn read_records(&mut self) -> Result<Vec<InputRecord>> {
        let path = self.path.as_deref();
        let mut records = Vec::new();
        for (index, line) in self.inner.by_ref().lines().enumerate() {
            let text = line.map_err(|e| match path {
                Some(path) => common::input_read_error(path).with_source(e),
                None => PivotError::from(e),
            })?;
            records.push(InputRecord { index, text });
        }
        tracing::debug!("Read {} rows", records.len());
        Ok(records)
    }
}

/// Reader over records that are already in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryReader {
    records: Vec<InputRecord>,
}

impl MemoryReader {
    pub fn new(records: Vec<InputRecord>) -> Self {
        Self { records }
    }

    /// Number plain lines from zero
    pub fn from_lines<S: AsRef<str>>(lines: &[S]) -> Self {
        Self::new(
            lines
                .iter()
                .enumerate()
                .map(|(index, line)| InputRecord::new(index, line.as_ref()))
                .collect(),
        )
    }
}

impl InputReader for MemoryReader {
    fn read_records(&mut self) -> Result<Vec<InputRecord>> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_line_reader_numbers_lines() {
        let mut reader = LineReader::from_text("a,b\nc,d\ne,f\n");
        let records = reader.read_records().unwrap();
        assert_eq!(
            records,
            vec![
                InputRecord::new(0, "a,b"),
                InputRecord::new(1, "c,d"),
                InputRecord::new(2, "e,f"),
            ]
        );
    }

    #[test]
    fn test_line_reader_strips_crlf() {
        let mut reader = LineReader::from_text("a,b\r\nc,d");
        let records = reader.read_records().unwrap();
        assert_eq!(records[0].text, "a,b");
        assert_eq!(records[1].text, "c,d");
    }

    #[test]
    fn test_line_reader_keeps_blank_interior_lines() {
        let mut reader = LineReader::from_text("a\n\nb");
        let texts: Vec<String> = reader
            .read_records()
            .unwrap()
            .into_iter()
            .map(|r| r.text)
            .collect();
        assert_eq!(texts, vec!["a", "", "b"]);
    }

    #[test]
    fn test_line_reader_empty_blob() {
        let mut reader = LineReader::from_text("");
        assert!(reader.read_records().unwrap().is_empty());
    }

    #[test]
    fn test_line_reader_open_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "x,y").unwrap();
        writeln!(file, "1,2").unwrap();

        let mut reader = LineReader::open(file.path()).unwrap();
        assert_eq!(reader.read_records().unwrap().len(), 2);
    }

    #[test]
    fn test_line_reader_open_missing_file() {
        let err = match LineReader::open("/definitely/not/here.csv") {
            Ok(_) => panic!("expected missing file to fail"),
            Err(e) => e,
        };
        assert_eq!(err.code(), crate::error::ErrorCode::IO_READ_FAILED);
    }

    #[test]
    fn test_memory_reader_from_lines() {
        let mut reader = MemoryReader::from_lines(&["h1,h2", "v1,v2"]);
        let records = reader.read_records().unwrap();
        assert_eq!(records[1], InputRecord::new(1, "v1,v2"));
        // Reading again yields the same rows
        assert_eq!(reader.read_records().unwrap(), records);
    }
}
