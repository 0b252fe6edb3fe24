//! TRC marker-trajectory reader.
//!
//! A TRC file is tab separated. Its first four lines are metadata and marker
//! names; line 5 holds the coordinate labels (`X1 Y1 Z1 X2 ...`) under the
//! `Frame#` and `Time` columns. Data rows follow, possibly after blank lines.
//! A label that repeats is suffixed with its occurrence count, so a second
//! `X3` becomes `X3.1`.

use std::collections::HashMap;
use std::path::Path;

use gait_types::{BiomechanicalModel, FrameTimes, GaitError, MarkerSet, SideMap, Trajectory};
use nalgebra::Point3;
use tracing::{debug, warn};

use crate::error::{IoError, IoResult, read_text};

const FORMAT: &str = "trc";
const LABEL_LINE: usize = 4;

/// Numeric marker columns of a TRC file, one row per kept frame.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerTable {
    labels: Vec<String>,
    rows: Vec<Vec<f64>>,
    kept: Vec<usize>,
    data_rows: usize,
}

impl MarkerTable {
    /// Unique column labels; the first two are `Frame` and `Time`.
    #[must_use]
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no row survived parsing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Indices of the kept frames among all data rows of the file.
    #[must_use]
    pub fn kept_rows(&self) -> &[usize] {
        &self.kept
    }

    /// Number of data rows in the file, kept or dropped.
    #[must_use]
    pub const fn data_rows(&self) -> usize {
        self.data_rows
    }

    /// Returns true if any data row was dropped.
    #[must_use]
    pub fn has_gaps(&self) -> bool {
        self.kept.len() != self.data_rows
    }

    /// Values of the column labelled `label`.
    #[must_use]
    pub fn column(&self, label: &str) -> Option<Vec<f64>> {
        let index = self.labels.iter().position(|l| l == label)?;
        Some(self.rows.iter().map(|row| row[index]).collect())
    }

    /// Per-frame timestamps from the `Time` column.
    #[must_use]
    pub fn times(&self) -> FrameTimes {
        FrameTimes::new(self.rows.iter().map(|row| row[1]).collect())
    }

    /// Assembles a trajectory from three coordinate columns.
    ///
    /// # Errors
    ///
    /// Returns [`GaitError::MissingMarker`] naming the first absent column.
    pub fn trajectory(&self, name: &str, labels: [&str; 3]) -> IoResult<Trajectory> {
        let [x, y, z] = labels.map(|label| {
            self.column(label)
                .ok_or_else(|| GaitError::MissingMarker(format!("{name} ({label})")))
        });
        let (x, y, z) = (x?, y?, z?);
        let points = x
            .iter()
            .zip(&y)
            .zip(&z)
            .map(|((&x, &y), &z)| Point3::new(x, y, z))
            .collect();
        Ok(Trajectory::new(name, points))
    }

    /// Builds the marker set a model reads from this table.
    ///
    /// # Errors
    ///
    /// Returns [`GaitError::MissingMarker`] if a model column is absent.
    pub fn marker_set(&self, model: &BiomechanicalModel) -> IoResult<MarkerSet> {
        let labels = model.markers();
        let per_side = |name: &str, columns: &SideMap<[&'static str; 3]>| -> IoResult<SideMap<Trajectory>> {
            Ok(SideMap::new(
                self.trajectory(&format!("L{name}"), columns.left)?,
                self.trajectory(&format!("R{name}"), columns.right)?,
            ))
        };
        Ok(MarkerSet {
            heel: per_side("Heel", &labels.heel)?,
            toe: per_side("Toe", &labels.toe)?,
            ankle: per_side("AnkleJC", &labels.ankle)?,
            pelvis: self.trajectory("pelvis", labels.pelvis)?,
        })
    }
}

/// Parses TRC text, keeping the first `column_limit` columns.
///
/// Rows with a missing or non-numeric value in a kept column are dropped;
/// [`MarkerTable::kept_rows`] records which data rows survived.
///
/// # Errors
///
/// Returns [`IoError::InvalidContent`] when the label line is missing or
/// fewer than three columns are kept.
pub fn parse_trc(text: &str, column_limit: usize) -> IoResult<MarkerTable> {
    let mut lines = text.lines();
    let header = lines
        .nth(LABEL_LINE)
        .ok_or_else(|| IoError::invalid_content(FORMAT, "file ends before the coordinate labels"))?;

    let labels = unique_labels(header, column_limit);
    if labels.len() < 3 {
        return Err(IoError::invalid_content(
            FORMAT,
            format!("expected frame, time and coordinate columns, found {}", labels.len()),
        ));
    }

    let mut rows = Vec::new();
    let mut kept = Vec::new();
    let mut data_rows = 0usize;
    for (index, line) in lines.filter(|l| !l.trim().is_empty()).enumerate() {
        data_rows += 1;
        let row: Option<Vec<f64>> = line
            .split('\t')
            .take(labels.len())
            .map(|cell| cell.trim().parse::<f64>().ok())
            .collect();
        if let Some(values) = row.filter(|v| v.len() == labels.len()) {
            rows.push(values);
            kept.push(index);
        }
    }
    let dropped = data_rows - rows.len();
    if dropped > 0 {
        warn!(dropped, kept = rows.len(), "Dropped incomplete TRC rows");
    }
    debug!(columns = labels.len(), frames = rows.len(), "TRC parsed");

    Ok(MarkerTable {
        labels,
        rows,
        kept,
        data_rows,
    })
}

/// Reads a TRC file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
///
/// # Example
///
/// ```no_run
/// use gait_io::load_trc;
/// use gait_types::BiomechanicalModel;
///
/// let model = BiomechanicalModel::cgm23();
/// let table = load_trc("walk_dynamic.trc", model.column_limit()).unwrap();
/// let markers = table.marker_set(&model).unwrap();
/// println!("{} frames", markers.frame_count());
/// ```
pub fn load_trc<P: AsRef<Path>>(path: P, column_limit: usize) -> IoResult<MarkerTable> {
    parse_trc(&read_text(path.as_ref())?, column_limit)
}

fn unique_labels(header: &str, column_limit: usize) -> Vec<String> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    header
        .split('\t')
        .take(column_limit)
        .enumerate()
        .map(|(i, cell)| {
            let base = match (i, cell.trim()) {
                (0, _) => "Frame".to_string(),
                (1, _) => "Time".to_string(),
                (_, "") => format!("column{i}"),
                (_, label) => label.to_string(),
            };
            let count = seen.entry(base.clone()).or_insert(0);
            let label = if *count == 0 {
                base
            } else {
                format!("{base}.{count}")
            };
            *count += 1;
            label
        })
        .collect()
}
