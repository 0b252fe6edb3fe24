//! Force-plate text reader.
//!
//! The file may open with `key: value` metadata lines (`=` and `,` also
//! separate key and value). A key mentioning `rate` gives the sample rate.
//! The first line naming all of `Fx Fy Fz COPx COPy` is the column header,
//! in any order and case. Data rows are comma, tab or space separated.

use std::path::Path;

use gait_types::{ForceRecording, ForceSample};
use tracing::{debug, warn};

use crate::error::{IoError, IoResult, read_text};

const FORMAT: &str = "force";
const CHANNELS: [&str; 5] = ["fx", "fy", "fz", "copx", "copy"];

/// Parses a force-plate recording.
///
/// Rows with a missing or non-numeric channel are skipped with a warning.
///
/// # Errors
///
/// Returns [`IoError::MissingColumn`] when no line names every channel.
///
/// # Example
///
/// ```
/// use gait_io::parse_force;
///
/// let text = "Sample Rate: 1000 Hz\nFx,Fy,Fz,COPx,COPy\n1,2,650,0.1,0.2\n";
/// let recording = parse_force(text).unwrap();
/// assert_eq!(recording.header_rate, Some(1000.0));
/// assert_eq!(recording.len(), 1);
/// ```
pub fn parse_force(text: &str) -> IoResult<ForceRecording> {
    let mut lines = text.lines().enumerate();
    let mut header_rate = None;
    let mut columns = None;

    for (_, line) in lines.by_ref() {
        if let Some(found) = channel_columns(line) {
            columns = Some(found);
            break;
        }
        if let Some(rate) = metadata_rate(line) {
            header_rate = Some(rate);
        }
    }
    let columns = columns.ok_or_else(|| IoError::missing_column(FORMAT, CHANNELS.join(" ")))?;

    let mut samples = Vec::new();
    let mut skipped = 0usize;
    for (number, line) in lines.filter(|(_, l)| !l.trim().is_empty()) {
        match read_sample(line, columns) {
            Some(sample) => samples.push(sample),
            None => {
                debug!(line = number + 1, "Skipping force row");
                skipped += 1;
            }
        }
    }
    if skipped > 0 {
        warn!(skipped, kept = samples.len(), "Skipped malformed force rows");
    }
    debug!(samples = samples.len(), ?header_rate, "Force recording parsed");

    Ok(ForceRecording::new(header_rate, samples))
}

/// Reads a force-plate recording.
///
/// # Errors
///
/// Returns an error if the file cannot be read or has no channel header.
pub fn load_force<P: AsRef<Path>>(path: P) -> IoResult<ForceRecording> {
    parse_force(&read_text(path.as_ref())?)
}

fn cells(line: &str) -> Vec<&str> {
    let separated: Vec<&str> = if line.contains(',') {
        line.split(',').collect()
    } else if line.contains('\t') {
        line.split('\t').collect()
    } else {
        line.split_whitespace().collect()
    };
    separated.into_iter().map(str::trim).collect()
}

fn channel_columns(line: &str) -> Option<[usize; 5]> {
    let names: Vec<String> = cells(line).iter().map(|c| c.to_ascii_lowercase()).collect();
    let mut columns = [0; 5];
    for (slot, channel) in columns.iter_mut().zip(CHANNELS) {
        *slot = names.iter().position(|n| n == channel)?;
    }
    Some(columns)
}

fn metadata_rate(line: &str) -> Option<f64> {
    let (key, value) = line.split_once([':', '=', ','])?;
    if !key.to_ascii_lowercase().contains("rate") {
        return None;
    }
    value.split_whitespace().next()?.parse().ok()
}

fn read_sample(line: &str, columns: [usize; 5]) -> Option<ForceSample> {
    let cells = cells(line);
    let value = |i: usize| -> Option<f64> { cells.get(columns[i])?.parse().ok() };
    Some(ForceSample::new(
        [value(0)?, value(1)?, value(2)?],
        [value(3)?, value(4)?],
    ))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn header_in_any_order() {
        let text = "rate=2000\n\nFz\tCOPy\tFx\tCOPx\tFy\n700\t0.2\t1\t0.1\t2\n";
        let recording = parse_force(text).unwrap();
        assert_eq!(recording.header_rate, Some(2000.0));
        let sample = recording.samples[0];
        assert_relative_eq!(sample.fz(), 700.0);
        assert_relative_eq!(sample.fy(), 2.0);
        assert_relative_eq!(sample.cop[0], 0.1);
    }

    #[test]
    fn missing_rate_stays_unset() {
        let text = "Subject: S01\nfx fy fz copx copy\n0 0 10 0 0\n0 0 30 0 0\n";
        let recording = parse_force(text).unwrap();
        assert_eq!(recording.header_rate, None);
        assert_eq!(recording.len(), 2);
    }

    #[test]
    fn malformed_rows_are_skipped() {
        let text = "Fx,Fy,Fz,COPx,COPy\n1,2,3,4,5\n1,2,,4,5\nnan-ish,2,3,4,5\n6,7,8,9,10\n";
        let recording = parse_force(text).unwrap();
        assert_eq!(recording.len(), 2);
        assert_relative_eq!(recording.samples[1].fx(), 6.0);
    }

    #[test]
    fn no_header_is_an_error() {
        let err = parse_force("Rate: 1000\n1,2,3\n").unwrap_err();
        assert!(matches!(err, IoError::MissingColumn { .. }));
    }
}
