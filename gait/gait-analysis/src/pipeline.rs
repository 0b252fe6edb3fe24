//! The trial analysis pipeline.

use gait_cycles::{aggregate_sides, segment_trial, summarize_sides};
use gait_events::{GaitEvents, classify_phases, detect_events, select_axis, toe_off_percentages};
use gait_force::{ForceParams, synchronize};
use gait_spatiotemporal::{compute_spatiotemporal, global_summary};
use gait_types::{GaitResult, SideMap};
use tracing::{info, warn};

use crate::input::{ForceInput, TrialInput};
use crate::params::AnalysisParams;
use crate::report::{ForceData, TrialReport};

/// Analyses one trial.
///
/// Stages run in dependency order: walking axis, events, phases, stride
/// segmentation, curves and kinematics, spatiotemporal and global metrics,
/// then force-plate synchronization. The function reads only its arguments,
/// so identical inputs give identical reports.
///
/// A side with fewer than two heel-strikes yields empty results for that
/// side. Force problems make the force output absent.
///
/// # Errors
///
/// Returns a configuration error, before any computation, if `params` are
/// invalid or the inputs do not share one frame index.
pub fn analyze_trial(input: &TrialInput, params: &AnalysisParams) -> GaitResult<TrialReport> {
    params.validate()?;
    let frames = input.validate()?;

    let axis = select_axis(&input.markers.pelvis);
    let events = detect_events(&input.markers, axis, &params.events);
    let phases = classify_phases(&events, params.events.phase_strategy);
    let toe_off = SideMap::from_fn(|side| {
        toe_off_percentages(
            &events.heel_strikes[side],
            &events.toe_offs[side],
            params.events.decimals,
        )
    });

    let ensembles = segment_trial(&input.angles, &events.heel_strikes, &params.cycles)?;
    let curves = aggregate_sides(&ensembles);
    let kinematics = summarize_sides(&ensembles, params.cycles.decimals);

    let spatiotemporal = compute_spatiotemporal(
        &input.markers.ankle,
        &events.heel_strikes,
        &phases,
        &input.times,
        &params.spatiotemporal,
    );
    let global = global_summary(
        &input.markers.pelvis,
        events.total_heel_strikes(),
        &spatiotemporal,
        &input.times,
        &params.spatiotemporal,
    );

    let force = force_data(input, &events, &params.force);

    info!(
        model = input.model.name(),
        frames,
        %axis,
        force = force.cycle().is_some(),
        "Trial analysed"
    );
    Ok(TrialReport {
        model: input.model.name().to_string(),
        frames,
        axis,
        events,
        phases,
        toe_off,
        ensembles,
        curves,
        kinematics,
        spatiotemporal,
        global,
        force,
    })
}

fn force_data(input: &TrialInput, events: &GaitEvents, params: &ForceParams) -> ForceData {
    let recording = match &input.force {
        ForceInput::None => return ForceData::absent("no force file", None),
        ForceInput::Unreadable { reason } => return ForceData::absent(reason.as_str(), None),
        ForceInput::Recording(recording) => recording,
    };
    let rate = recording.sample_rate(params.default_rate_hz);
    match synchronize(recording, &events.heel_strikes, &events.toe_offs, &input.times, params) {
        Ok(cycle) => ForceData::Present(cycle),
        Err(err) => {
            warn!(error = %err, "No force cycle");
            ForceData::absent(err.to_string(), Some(rate))
        }
    }
}
