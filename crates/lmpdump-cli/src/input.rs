use nalgebra::Point3;
use std::io::{self, BufRead};
use thiserror::Error;

/// Errors raised while parsing a particle listing.
#[derive(Debug, Error)]
pub enum InputError {
    #[error("Failed to read line {line}: {source}")]
    Read {
        line: usize,
        #[source]
        source: io::Error,
    },

    #[error("Line {line}: expected 4 fields (type x y z), found {found}")]
    FieldCount { line: usize, found: usize },

    #[error("Line {line}: invalid atom type '{value}': {source}")]
    InvalidType {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },

    #[error("Line {line}: invalid coordinate '{value}': {source}")]
    InvalidCoordinate {
        line: usize,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },
}

/// Parses a plain-text particle listing into parallel type/position vectors.
///
/// One particle per line as `type x y z`, whitespace-separated. Blank lines
/// and lines starting with `#` are skipped; a trailing `#` comment on a data
/// line is stripped before parsing.
pub fn read_particles(
    reader: impl BufRead,
) -> Result<(Vec<u32>, Vec<Point3<f64>>), InputError> {
    let mut atom_types = Vec::new();
    let mut positions = Vec::new();

    for (line_num, line_res) in reader.lines().enumerate() {
        let line_num = line_num + 1;
        let line = line_res.map_err(|source| InputError::Read {
            line: line_num,
            source,
        })?;

        let data = line.split('#').next().unwrap_or("").trim();
        if data.is_empty() {
            continue;
        }

        let fields: Vec<&str> = data.split_whitespace().collect();
        if fields.len() != 4 {
            return Err(InputError::FieldCount {
                line: line_num,
                found: fields.len(),
            });
        }

        let atom_type: u32 = fields[0].parse().map_err(|source| InputError::InvalidType {
            line: line_num,
            value: fields[0].to_string(),
            source,
        })?;

        let mut coords = [0.0f64; 3];
        for (slot, field) in coords.iter_mut().zip(&fields[1..]) {
            *slot = field
                .parse()
                .map_err(|source| InputError::InvalidCoordinate {
                    line: line_num,
                    value: field.to_string(),
                    source,
                })?;
        }

        atom_types.push(atom_type);
        positions.push(Point3::new(coords[0], coords[1], coords[2]));
    }

    Ok((atom_types, positions))
}
