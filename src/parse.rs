use glam::DVec3;
use nom::bytes::complete::take_till1;
use nom::character::complete::multispace0;
use nom::combinator::{all_consuming, map_res};
use nom::sequence::delimited;
use nom::IResult;

use crate::error::{Field, ParseError};
use crate::model::*;

pub const FIELD_SEPARATOR: char = ';';
pub const COORDINATE_SEPARATOR: char = ',';

/*
    Coordinates
*/

// Whitespace around the literal is dropped; anything else left over is an error.
fn coordinate(input: &str) -> IResult<&str, f64> {
    all_consuming(delimited(
        multispace0,
        map_res(take_till1(|c: char| c.is_whitespace()), |s: &str| {
            s.parse::<f64>()
        }),
        multispace0,
    ))(input)
}

/*
    Vectors
*/

pub fn parse_vector(token: &str) -> Result<DVec3, ParseError> {
    let components: Vec<&str> = token.split(COORDINATE_SEPARATOR).collect();
    if components.len() < 3 {
        return Err(ParseError::MissingComponents {
            found: components.len(),
        });
    }

    let mut xyz = [0.0; 3];
    for (value, text) in xyz.iter_mut().zip(&components) {
        *value = match coordinate(text) {
            Ok((_, v)) => v,
            Err(_) => {
                return Err(ParseError::InvalidNumber {
                    text: text.to_string(),
                })
            }
        };
    }

    Ok(DVec3::from_array(xyz))
}

/*
    Records
*/

/// Parses a lines dump entry, `x,y,z;x,y,z`, into a position and a normal.
///
/// Only the first two `;`-separated fields are read. Anything after the
/// normal is ignored, so dumps with trailing annotation columns still load.
pub fn parse_record(line: &str) -> Result<Record, ParseError> {
    let mut fields = line.split(FIELD_SEPARATOR);
    let (position, normal) = match (fields.next(), fields.next()) {
        (Some(position), Some(normal)) => (position, normal),
        // `split` always yields at least one field, so a short line has exactly one.
        _ => return Err(ParseError::MissingFields { found: 1 }),
    };

    Ok(Record {
        position: parse_field(position, Field::Position)?,
        normal: parse_field(normal, Field::Normal)?,
    })
}

fn parse_field(token: &str, field: Field) -> Result<DVec3, ParseError> {
    parse_vector(token).map_err(|source| ParseError::InvalidVector {
        field,
        source: Box::new(source),
    })
}

pub fn parse_point(line: &str) -> Result<Point, ParseError> {
    parse_vector(line).map(Point)
}

/// A sample type that occupies one line of a dump.
pub trait DumpLine: Sized {
    type Vectors: IntoIterator<Item = DVec3>;

    fn parse_line(line: &str) -> Result<Self, ParseError>;

    /// The three-number groups printed for this sample, in order.
    fn vectors(&self) -> Self::Vectors;
}

impl DumpLine for Record {
    type Vectors = [DVec3; 2];

    fn parse_line(line: &str) -> Result<Self, ParseError> {
        parse_record(line)
    }

    fn vectors(&self) -> [DVec3; 2] {
        [self.position, self.normal]
    }
}

impl DumpLine for Point {
    type Vectors = [DVec3; 1];

    fn parse_line(line: &str) -> Result<Self, ParseError> {
        parse_point(line)
    }

    fn vectors(&self) -> [DVec3; 1] {
        [self.0]
    }
}
