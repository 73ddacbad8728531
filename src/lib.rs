//! Reader for the debug dumps written by the ray tracer.
//!
//! A lines dump holds one `x,y,z;x,y,z` position/normal pair per line, a
//! points dump one `x,y,z` point per line. [`run`] opens a lines dump and
//! yields its records lazily; [`open`] does the same for any [`DumpLine`].

extern crate nom;

mod error;
pub mod model;
mod parse;
mod reader;
mod writer;

pub use self::error::{DumpError, Field, ParseError, Result};
pub use self::model::{Point, Record};
pub use self::parse::{
    parse_point, parse_record, parse_vector, DumpLine, COORDINATE_SEPARATOR, FIELD_SEPARATOR,
};
pub use self::reader::{open, run, DumpReader};
pub use self::writer::{print_dump, write_dump};
