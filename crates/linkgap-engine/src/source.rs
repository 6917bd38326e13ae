use crate::{Error, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Anything that yields the lines of a log in order.
///
/// Opening is separate from reading so an unavailable input is reported as
/// [`Error::SourceUnavailable`] before any line is consumed.
pub trait LineSource {
    type Lines: Iterator<Item = io::Result<String>>;

    fn open(self) -> Result<Self::Lines>;
}

/// A log file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LineSource for FileSource {
    type Lines = LossyLines<BufReader<File>>;

    fn open(self) -> Result<Self::Lines> {
        let file = File::open(&self.path).map_err(|source| Error::SourceUnavailable {
            path: self.path.clone(),
            source,
        })?;
        Ok(LossyLines::new(BufReader::new(file)))
    }
}

/// Any buffered reader, e.g. stdin or an in-memory cursor.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    type Lines = LossyLines<R>;

    fn open(self) -> Result<Self::Lines> {
        Ok(LossyLines::new(self.reader))
    }
}

/// Lines already held in memory.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    lines: Vec<String>,
}

impl MemorySource {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            lines: lines.into_iter().map(Into::into).collect(),
        }
    }
}

impl LineSource for MemorySource {
    type Lines = std::iter::Map<std::vec::IntoIter<String>, fn(String) -> io::Result<String>>;

    fn open(self) -> Result<Self::Lines> {
        Ok(self
            .lines
            .into_iter()
            .map(Ok as fn(String) -> io::Result<String>))
    }
}

/// Line iterator that tolerates invalid UTF-8.
///
/// `BufRead::lines` fails the whole read on a single bad byte; log files
/// routinely contain such bytes inside messages, so they are replaced with
/// U+FFFD instead. `\n` and `\r\n` terminators are stripped.
#[derive(Debug)]
pub struct LossyLines<R> {
    reader: R,
    buf: Vec<u8>,
}

impl<R: BufRead> LossyLines<R> {
    fn new(reader: R) -> Self {
        Self {
            reader,
            buf: Vec::new(),
        }
    }
}

impl<R: BufRead> Iterator for LossyLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                if self.buf.last() == Some(&b'\n') {
                    self.buf.pop();
                    if self.buf.last() == Some(&b'\r') {
                        self.buf.pop();
                    }
                }
                Some(Ok(String::from_utf8_lossy(&self.buf).into_owned()))
            }
            Err(err) => Some(Err(err)),
        }
    }
}
