use std::fmt::Display;
use std::io::Write;

use tracing::debug;

use crate::error::{DumpError, Result};
use crate::parse::DumpLine;

pub fn write_dump<W, I>(out: &mut W, items: I) -> Result<()>
where
    W: Write,
    I: IntoIterator,
    I::Item: Display,
{
    for item in items {
        writeln!(out, "{}", item).map_err(DumpError::Write)?;
    }
    Ok(())
}

/// Prints each sample as `[x, y, z]` lines and returns how many were printed.
pub fn print_dump<W, T, I>(out: &mut W, samples: I) -> Result<usize>
where
    W: Write,
    T: DumpLine,
    I: IntoIterator<Item = Result<T>>,
{
    let mut count = 0;
    for sample in samples {
        for v in sample?.vectors() {
            writeln!(out, "{:?}", v.to_array()).map_err(DumpError::Write)?;
        }
        count += 1;
    }
    debug!(count, "printed samples");
    Ok(count)
}
