use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::marker::PhantomData;
use std::path::Path;

use tracing::{debug, trace};

use crate::error::{DumpError, Result};
use crate::model::Record;
use crate::parse::DumpLine;

/// Lazily parses a dump one line at a time. The first malformed or
/// unreadable line is yielded as an error and ends the iteration.
pub struct DumpReader<R, T> {
    lines: io::Lines<R>,
    line_number: usize,
    finished: bool,
    _sample: PhantomData<fn() -> T>,
}

impl<R: BufRead, T: DumpLine> DumpReader<R, T> {
    pub fn new(reader: R) -> DumpReader<R, T> {
        DumpReader {
            lines: reader.lines(),
            line_number: 0,
            finished: false,
            _sample: PhantomData,
        }
    }

    pub fn line_number(&self) -> usize {
        self.line_number
    }
}

impl<R: BufRead, T: DumpLine> Iterator for DumpReader<R, T> {
    type Item = Result<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let line = match self.lines.next() {
            Some(line) => line,
            None => {
                debug!(lines = self.line_number, "reached end of dump");
                self.finished = true;
                return None;
            }
        };
        self.line_number += 1;
        let line_number = self.line_number;

        let item = match line {
            Ok(line) => T::parse_line(&line).map_err(|source| {
                debug!(line_number, %source, "rejected line");
                DumpError::Malformed {
                    line_number,
                    line,
                    source,
                }
            }),
            Err(source) => Err(DumpError::Read {
                line_number,
                source,
            }),
        };

        match item {
            Ok(_) => trace!(line_number, "parsed line"),
            Err(_) => self.finished = true,
        }
        Some(item)
    }
}

pub fn open<T: DumpLine, P: AsRef<Path>>(path: P) -> Result<DumpReader<BufReader<File>, T>> {
    let path = path.as_ref();
    let open_error = |source: io::Error| DumpError::Open {
        path: path.to_path_buf(),
        source,
    };
    let file = File::open(path).map_err(open_error)?;

    // Directories open fine on Linux and only fail on the first read.
    let mut reader = BufReader::new(file);
    reader.fill_buf().map_err(open_error)?;
    debug!(path = %path.display(), "opened dump");

    Ok(DumpReader::new(reader))
}

pub fn run<P: AsRef<Path>>(path: P) -> Result<DumpReader<BufReader<File>, Record>> {
    open(path)
}
