//! HTR segment-rotation reader.
//!
//! An HTR file is a sequence of `[Section]` blocks. Each segment block
//! (`[R.Thigh]`, `[L.Foot]`, ...) starts with a column header whose leading
//! `#` is dropped, followed by one row per frame. Only the `Rx Ry Rz`
//! rotation columns are read.

use std::collections::BTreeMap;
use std::path::Path;

use gait_types::{AngleSet, AngleSignal, GaitError, Segment, Side};
use tracing::debug;

use crate::error::{IoError, IoResult, read_text};

const FORMAT: &str = "htr";
const ROTATION: [&str; 3] = ["Rx", "Ry", "Rz"];

/// Normalises a section name, `R.Thigh` to `R_Thigh`.
#[must_use]
pub fn normalize_segment_name(name: &str) -> String {
    name.trim().replace('.', "_")
}

/// Parses the rotation columns of every section named in `segments`.
///
/// Section names are compared after normalisation and the returned map is
/// keyed by the normalised name. Sections not requested are skipped.
///
/// # Errors
///
/// Returns [`IoError::MissingColumn`] if a requested section lacks a rotation
/// column and [`IoError::InvalidContent`] for a non-numeric value.
pub fn parse_htr(text: &str, segments: &[String]) -> IoResult<BTreeMap<String, Vec<[f64; 3]>>> {
    let mut out = BTreeMap::new();
    let mut current: Option<Section> = None;

    for (number, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if let Some(name) = section_name(trimmed) {
            if let Some(done) = current.take() {
                out.insert(done.name, done.rows);
            }
            let name = normalize_segment_name(name);
            if segments.contains(&name) {
                current = Some(Section::new(name));
            }
            continue;
        }
        let Some(section) = current.as_mut() else {
            continue;
        };
        match section.columns {
            None => section.read_header(trimmed)?,
            Some(columns) => section.rows.push(read_row(trimmed, columns, number + 1)?),
        }
    }
    if let Some(done) = current {
        out.insert(done.name, done.rows);
    }

    debug!(sections = out.len(), "HTR parsed");
    Ok(out)
}

/// Reads the thigh, shank and foot rotations of both sides.
///
/// # Errors
///
/// Returns [`GaitError::MissingSegment`] if a segment has no section, besides
/// the errors of [`parse_htr`].
///
/// # Example
///
/// ```no_run
/// use gait_io::load_angles;
///
/// let angles = load_angles("walk_dynamic.htr").unwrap();
/// ```
pub fn load_angles<P: AsRef<Path>>(path: P) -> IoResult<AngleSet> {
    angles_from_htr(&read_text(path.as_ref())?)
}

/// Builds an [`AngleSet`] from HTR text.
///
/// # Errors
///
/// See [`load_angles`].
pub fn angles_from_htr(text: &str) -> IoResult<AngleSet> {
    let labels: Vec<String> = Side::BOTH
        .into_iter()
        .flat_map(|side| Segment::ALL.map(|segment| segment.label(side)))
        .collect();
    let mut sections = parse_htr(text, &labels)?;

    let mut angles = AngleSet::default();
    for side in Side::BOTH {
        for segment in Segment::ALL {
            let label = segment.label(side);
            let samples = sections
                .remove(&label)
                .ok_or_else(|| GaitError::MissingSegment(label))?;
            angles.insert(side, segment, AngleSignal::new(samples));
        }
    }
    Ok(angles)
}

struct Section {
    name: String,
    columns: Option<[usize; 3]>,
    rows: Vec<[f64; 3]>,
}

impl Section {
    const fn new(name: String) -> Self {
        Self {
            name,
            columns: None,
            rows: Vec::new(),
        }
    }

    fn read_header(&mut self, line: &str) -> IoResult<()> {
        let header: Vec<&str> = line.trim_start_matches('#').split_whitespace().collect();
        let mut columns = [0; 3];
        for (slot, name) in columns.iter_mut().zip(ROTATION) {
            *slot = header
                .iter()
                .position(|h| *h == name)
                .ok_or_else(|| IoError::missing_column(FORMAT, format!("{name} in {}", self.name)))?;
        }
        self.columns = Some(columns);
        Ok(())
    }
}

fn section_name(line: &str) -> Option<&str> {
    line.strip_prefix('[')?.split(']').next()
}

fn read_row(line: &str, columns: [usize; 3], number: usize) -> IoResult<[f64; 3]> {
    let cells: Vec<&str> = line.split_whitespace().collect();
    let mut row = [0.0; 3];
    for (value, index) in row.iter_mut().zip(columns) {
        *value = cells
            .get(index)
            .and_then(|cell| cell.parse().ok())
            .ok_or_else(|| {
                IoError::invalid_content(
                    FORMAT,
                    format!("line {number}: expected a number in column {}", index + 1),
                )
            })?;
    }
    Ok(row)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn section(name: &str, offset: f64) -> String {
        format!(
            "[{name}]\n#Fr\tTx\tTy\tTz\tRx\tRy\tRz\tSF\n\
             1\t0\t0\t0\t{a}\t{b}\t{c}\t1\n\
             2\t0\t0\t0\t{d}\t{b}\t{c}\t1\n",
            a = offset,
            b = offset + 1.0,
            c = offset + 2.0,
            d = offset + 0.5,
        )
    }

    fn file() -> String {
        let mut text = String::from(
            "[Header]\nFileType htr\n[SegmentNames&Hierarchy]\nR.Thigh\tPelvis\n[BasePosition]\nR.Thigh\t0 0 0\n",
        );
        for (name, offset) in [
            ("R.Thigh", 0.0),
            ("L.Thigh", 10.0),
            ("R.Shank", 20.0),
            ("L.Shank", 30.0),
            ("R.Foot", 40.0),
            ("L.Foot", 50.0),
        ] {
            text.push_str(&section(name, offset));
        }
        text.push_str("[EndOfFile]\n");
        text
    }

    #[test]
    fn normalizes_names() {
        assert_eq!(normalize_segment_name("R.Thigh"), "R_Thigh");
    }

    #[test]
    fn reads_requested_sections() {
        let sections = parse_htr(&file(), &["L_Shank".to_string()]).unwrap();
        assert_eq!(sections.len(), 1);
        let rows = &sections["L_Shank"];
        assert_eq!(rows.len(), 2);
        assert_relative_eq!(rows[0][0], 30.0);
        assert_relative_eq!(rows[1][0], 30.5);
        assert_relative_eq!(rows[1][2], 32.0);
    }

    #[test]
    fn builds_all_six_signals() {
        let angles = angles_from_htr(&file()).unwrap();
        assert_relative_eq!(angles.get(Side::Right, Segment::Foot).samples()[0][1], 41.0);
        assert_eq!(angles.get(Side::Left, Segment::Thigh).len(), 2);
    }

    #[test]
    fn missing_segment_is_configuration_error() {
        let text = file().replace("[L.Foot]", "[L.Toe]");
        let err = angles_from_htr(&text).unwrap_err();
        assert!(err.is_configuration());
        assert!(err.to_string().contains("L_Foot"));
    }

    #[test]
    fn missing_rotation_column() {
        let text = section("R.Thigh", 0.0).replace("Rz", "Qz");
        let err = parse_htr(&text, &["R_Thigh".to_string()]).unwrap_err();
        assert!(matches!(err, IoError::MissingColumn { .. }));
    }
}
