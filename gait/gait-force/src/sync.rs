//! Force-plate synchronization of one trial.

use gait_types::{EventSet, ForceRecording, ForceSample, FrameTimes, RateSource, SideMap};
use tracing::{debug, info, warn};

use crate::clock::ClockMap;
use crate::contact::{contact_onset, contact_side, suppress_unloaded};
use crate::error::{ForceError, ForceResult};
use crate::params::ForceParams;
use crate::stance::{ForceCycle, StanceWindow, stance_window};

/// Extracts the representative stance cycle of a trial.
///
/// The force-plate clock is aligned to the camera clock through the ratio
/// of their rates. The side that struck most recently before contact onset
/// owns the plate; the first of its strides with a toe-off and a loaded
/// window becomes the force cycle. Windows of the other side are not
/// considered.
///
/// # Errors
///
/// Every failure is a reason for reporting the force data as absent:
/// an empty recording, no camera rate, no contact, no preceding heel-strike
/// or no acceptable window on the contact side.
pub fn synchronize(
    recording: &ForceRecording,
    heel_strikes: &SideMap<EventSet>,
    toe_offs: &SideMap<EventSet>,
    times: &FrameTimes,
    params: &ForceParams,
) -> ForceResult<ForceCycle> {
    params.validate()?;
    if recording.is_empty() {
        return Err(ForceError::EmptyRecording);
    }

    let sample_rate = recording.sample_rate(params.default_rate_hz);
    if sample_rate.source == RateSource::Default {
        warn!(header = ?recording.header_rate, default_hz = sample_rate.hz, "Force sample rate unavailable, using default");
    }
    let camera_hz = times.frame_rate().ok_or(ForceError::NoCameraRate)?;
    let clock = ClockMap::new(sample_rate.hz, camera_hz)?;

    let samples = suppress_unloaded(&recording.samples, params.threshold);
    let fz: Vec<f64> = samples.iter().map(ForceSample::fz).collect();

    let onset = contact_onset(&fz, params.onset, params.threshold).ok_or(ForceError::NoContact)?;
    let onset_frame = clock.to_frame(onset);
    let side = contact_side(onset_frame, heel_strikes).ok_or(ForceError::NoContactSide { frame: onset_frame })?;
    debug!(onset, onset_frame, %side, ratio = clock.ratio(), "Plate contact");

    let window = first_window(&fz, &clock, &heel_strikes[side], &toe_offs[side], params)
        .ok_or(ForceError::NoValidWindow { side })?;
    let cycle = ForceCycle::extract(&samples, window, side, &clock, sample_rate, params.points);

    info!(
        %side,
        start = window.start,
        end = window.end,
        toe_off_percent = cycle.toe_off_percent,
        rate_source = ?sample_rate.source,
        "Force cycle extracted"
    );
    Ok(cycle)
}

fn first_window(
    fz: &[f64],
    clock: &ClockMap,
    heel_strikes: &EventSet,
    toe_offs: &EventSet,
    params: &ForceParams,
) -> Option<StanceWindow> {
    heel_strikes.strides().find_map(|(start, end)| {
        let Some(toe_off) = toe_offs.first_between(start, end) else {
            debug!(start, end, "Stride has no toe-off");
            return None;
        };
        stance_window(fz, clock, (start, end), toe_off, params)
            .inspect_err(|err| debug!(error = %err, "Skipping stance window"))
            .ok()
    })
}
