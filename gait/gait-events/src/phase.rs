//! Per-cycle stance, swing and double-support percentages.
//!
//! A cycle runs from one ipsilateral heel-strike to the next. Inside it the
//! foot first shares ground contact with the contralateral foot (double
//! support 1, ended by the contralateral toe-off), then stands alone, then
//! shares contact again (double support 2, from the contralateral
//! heel-strike to the ipsilateral toe-off), and finally swings until the
//! next heel-strike.
//!
//! Two strategies are provided:
//!
//! - [`PhaseStrategy::Timeline`] reads every boundary from the tagged events
//!   that actually fall inside the stride.
//! - [`PhaseStrategy::GlobalAlignment`] picks one of four fixed index
//!   alignments from whichever stream holds the earliest event, and applies
//!   it to every cycle of the side.

use gait_types::{EventSet, GaitError, GaitResult, MeanStd, Side, SideMap};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::detect::GaitEvents;
use crate::params::PhaseStrategy;
use crate::timeline::{EventKind, Timeline};

/// Phase percentages of one ipsilateral cycle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PhaseCycle {
    /// Heel-strike frame opening the cycle.
    pub start_frame: usize,
    /// Heel-strike frame closing the cycle.
    pub end_frame: usize,
    /// Cycle duration in frames.
    pub duration_frames: usize,
    /// Swing phase, percent of cycle.
    pub swing_percent: f64,
    /// Stance phase, percent of cycle.
    pub stance_percent: f64,
    /// Initial double support, percent of cycle.
    pub double_support_1_percent: f64,
    /// Terminal double support, percent of cycle.
    pub double_support_2_percent: f64,
    /// Ipsilateral toe-off position, percent of cycle.
    pub toe_off_percent: f64,
}

impl PhaseCycle {
    /// Total double support of the cycle.
    #[must_use]
    pub fn double_support_percent(&self) -> f64 {
        self.double_support_1_percent + self.double_support_2_percent
    }

    /// Builds a cycle from signed phase durations in frames.
    fn from_durations(
        start_frame: usize,
        end_frame: usize,
        swing: i64,
        double_support_1: i64,
        double_support_2: i64,
        toe_off: i64,
    ) -> GaitResult<Self> {
        let duration_frames = end_frame.saturating_sub(start_frame);
        if duration_frames == 0 {
            return Err(GaitError::degenerate(format!(
                "zero-length cycle at frame {start_frame}"
            )));
        }

        #[allow(clippy::cast_precision_loss)]
        let percent = |frames: i64| frames as f64 / duration_frames as f64 * 100.0;

        let swing_percent = percent(swing);
        Ok(Self {
            start_frame,
            end_frame,
            duration_frames,
            swing_percent,
            stance_percent: 100.0 - swing_percent,
            double_support_1_percent: percent(double_support_1),
            double_support_2_percent: percent(double_support_2),
            toe_off_percent: percent(toe_off),
        })
    }
}

/// Phase records of one side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SidePhases {
    /// Accepted cycles, in stride order.
    pub cycles: Vec<PhaseCycle>,
    /// Strides skipped because a boundary event was missing or the window
    /// had zero length.
    pub degenerate_cycles: usize,
}

impl SidePhases {
    /// Mean and population std of a per-cycle quantity.
    ///
    /// Returns `None` when the side has no accepted cycles.
    #[must_use]
    pub fn summarize(&self, value: impl Fn(&PhaseCycle) -> f64) -> Option<MeanStd> {
        let values: Vec<f64> = self.cycles.iter().map(value).collect();
        MeanStd::population(&values)
    }

    fn push(&mut self, side: Side, result: GaitResult<PhaseCycle>) {
        match result {
            Ok(cycle) => self.cycles.push(cycle),
            Err(err) => {
                debug!(%side, error = %err, "Skipping phase cycle");
                self.degenerate_cycles += 1;
            }
        }
    }
}

/// Classifies the phases of every cycle on both sides.
#[must_use]
pub fn classify_phases(events: &GaitEvents, strategy: PhaseStrategy) -> SideMap<SidePhases> {
    match strategy {
        PhaseStrategy::Timeline => {
            let timeline = Timeline::merge(events);
            SideMap::from_fn(|side| timeline_phases(&timeline, &events.heel_strikes[side], side))
        }
        PhaseStrategy::GlobalAlignment => SideMap::from_fn(|side| {
            let other = side.opposite();
            aligned_phases(
                side,
                &events.heel_strikes[side],
                &events.toe_offs[side],
                &events.heel_strikes[other],
                &events.toe_offs[other],
            )
        }),
    }
}

/// Classifies each stride of `side` from the events found inside it.
///
/// Within `[HS_i, HS_i+1)` the ipsilateral toe-off is the first one after
/// `HS_i`; the contralateral toe-off is the first, and the contralateral
/// heel-strike the last, of their kind before that toe-off.
#[must_use]
pub fn timeline_phases(timeline: &Timeline, heel_strikes: &EventSet, side: Side) -> SidePhases {
    let mut phases = SidePhases::default();

    for (start, end) in heel_strikes.strides() {
        phases.push(side, timeline_cycle(timeline, side, start, end));
    }

    phases
}

fn timeline_cycle(timeline: &Timeline, side: Side, start: usize, end: usize) -> GaitResult<PhaseCycle> {
    let other = side.opposite();
    let missing = |what: &str| GaitError::degenerate(format!("no {what} in stride {start}..{end}"));

    let toe_off = timeline
        .between(start, end)
        .iter()
        .find(|e| e.is(side, EventKind::ToeOff))
        .map(|e| e.frame)
        .ok_or_else(|| missing("toe-off"))?;

    let before_toe_off = timeline.between(start, toe_off);
    let contra_toe_off = before_toe_off
        .iter()
        .find(|e| e.is(other, EventKind::ToeOff))
        .map(|e| e.frame)
        .ok_or_else(|| missing("contralateral toe-off"))?;
    let contra_heel_strike = before_toe_off
        .iter()
        .rev()
        .find(|e| e.is(other, EventKind::HeelStrike))
        .map(|e| e.frame)
        .ok_or_else(|| missing("contralateral heel-strike"))?;

    PhaseCycle::from_durations(
        start,
        end,
        signed(end, toe_off),
        signed(contra_toe_off, start),
        signed(toe_off, contra_heel_strike),
        signed(toe_off, start),
    )
}

/// Index alignment between the four event streams of one side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alignment {
    /// The ipsilateral heel-strike comes first.
    HeelStrike,
    /// The ipsilateral toe-off comes first.
    ToeOff,
    /// The contralateral heel-strike comes first.
    ContraHeelStrike,
    /// The contralateral toe-off comes first.
    ContraToeOff,
}

impl Alignment {
    /// Picks the alignment from the stream holding the earliest event.
    ///
    /// Streams are compared in the order ipsilateral heel-strike, ipsilateral
    /// toe-off, contralateral heel-strike, contralateral toe-off; the first
    /// one holding the minimum wins. Returns `None` if any stream is empty.
    #[must_use]
    pub fn select(hs: &EventSet, to: &EventSet, hsc: &EventSet, toc: &EventSet) -> Option<Self> {
        let candidates = [
            (Self::HeelStrike, hs.first()?),
            (Self::ToeOff, to.first()?),
            (Self::ContraHeelStrike, hsc.first()?),
            (Self::ContraToeOff, toc.first()?),
        ];
        candidates
            .into_iter()
            .reduce(|best, next| if next.1 < best.1 { next } else { best })
            .map(|(alignment, _)| alignment)
    }
}

/// Classifies cycles with a single alignment chosen for the whole side.
///
/// Cycle count is `min(len(HS), len(TO), len(HSc), len(TOc)) - 1`. Cycles
/// whose aligned index runs past the end of a stream are skipped and
/// counted as degenerate.
#[must_use]
pub fn aligned_phases(
    side: Side,
    hs: &EventSet,
    to: &EventSet,
    hsc: &EventSet,
    toc: &EventSet,
) -> SidePhases {
    let mut phases = SidePhases::default();
    let Some(alignment) = Alignment::select(hs, to, hsc, toc) else {
        return phases;
    };
    debug!(%side, ?alignment, "Phase alignment selected");

    let cycles = [hs.len(), to.len(), hsc.len(), toc.len()]
        .into_iter()
        .min()
        .unwrap_or(0)
        .saturating_sub(1);

    let streams = [hs, to, hsc, toc];
    for i in 0..cycles {
        phases.push(side, aligned_cycle(alignment, streams, i));
    }

    phases
}

fn aligned_cycle(alignment: Alignment, [hs, to, hsc, toc]: [&EventSet; 4], i: usize) -> GaitResult<PhaseCycle> {
    let at = |set: &EventSet, index: usize| {
        set.get(index)
            .ok_or_else(|| GaitError::degenerate(format!("cycle {i} runs past the last event")))
    };
    let (start, end) = (at(hs, i)?, at(hs, i + 1)?);

    let (swing, ds1, ds2, toe_off) = match alignment {
        Alignment::HeelStrike => (
            signed(end, at(to, i)?),
            signed(at(toc, i)?, start),
            signed(at(to, i)?, at(hsc, i)?),
            signed(at(to, i)?, start),
        ),
        Alignment::ToeOff => (
            signed(start, at(to, i)?),
            signed(at(toc, i)?, start),
            signed(at(to, i + 1)?, at(hsc, i)?),
            signed(at(to, i + 1)?, start),
        ),
        Alignment::ContraToeOff => (
            signed(start, at(to, i)?),
            signed(at(toc, i + 1)?, start),
            signed(at(to, i)?, at(hsc, i)?),
            signed(at(to, i + 1)?, start),
        ),
        Alignment::ContraHeelStrike => (
            signed(start, at(to, i)?),
            signed(at(toc, i)?, start),
            signed(at(to, i)?, at(hsc, i)?),
            signed(at(to, i + 1)?, start),
        ),
    };
    PhaseCycle::from_durations(start, end, swing, ds1, ds2, toe_off)
}

#[allow(clippy::cast_possible_wrap)]
fn signed(later: usize, earlier: usize) -> i64 {
    later as i64 - earlier as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn set(frames: &[usize]) -> EventSet {
        EventSet::from_frames(frames.to_vec()).unwrap()
    }

    /// Left strikes at 25 + 100k, right at 75 + 100k, toe-offs 60 frames
    /// after each strike on the same side.
    fn regular_events() -> GaitEvents {
        GaitEvents {
            heel_strikes: SideMap::new(set(&[25, 125, 225, 325]), set(&[75, 175, 275, 375])),
            toe_offs: SideMap::new(set(&[85, 185, 285, 385]), set(&[35, 135, 235, 335, 435])),
        }
    }

    #[test]
    fn timeline_regular_walk() {
        let phases = classify_phases(&regular_events(), PhaseStrategy::Timeline);
        let left = &phases.left;
        assert_eq!(left.cycles.len(), 3);
        assert_eq!(left.degenerate_cycles, 0);

        let cycle = left.cycles[0];
        assert_eq!((cycle.start_frame, cycle.end_frame, cycle.duration_frames), (25, 125, 100));
        assert_relative_eq!(cycle.swing_percent, 40.0);
        assert_relative_eq!(cycle.stance_percent, 60.0);
        assert_relative_eq!(cycle.double_support_1_percent, 10.0);
        assert_relative_eq!(cycle.double_support_2_percent, 10.0);
        assert_relative_eq!(cycle.double_support_percent(), 20.0);
        assert_relative_eq!(cycle.toe_off_percent, 60.0);
    }

    #[test]
    fn strategies_agree_on_regular_walk() {
        let events = regular_events();
        let timeline = classify_phases(&events, PhaseStrategy::Timeline);
        let aligned = classify_phases(&events, PhaseStrategy::GlobalAlignment);

        for side in Side::BOTH {
            let n = timeline[side].cycles.len().min(aligned[side].cycles.len());
            assert!(n > 0);
            for (a, b) in timeline[side].cycles.iter().zip(&aligned[side].cycles).take(n) {
                assert_relative_eq!(a.swing_percent, b.swing_percent);
                assert_relative_eq!(a.double_support_1_percent, b.double_support_1_percent);
                assert_relative_eq!(a.double_support_2_percent, b.double_support_2_percent);
            }
        }
    }

    #[test]
    fn missing_toe_off_is_degenerate() {
        let events = GaitEvents {
            heel_strikes: SideMap::new(set(&[25, 125, 225]), set(&[75, 175])),
            toe_offs: SideMap::new(set(&[185]), set(&[35, 135])),
        };
        let phases = classify_phases(&events, PhaseStrategy::Timeline);
        assert_eq!(phases.left.cycles.len(), 1);
        assert_eq!(phases.left.cycles[0].start_frame, 125);
        assert_eq!(phases.left.degenerate_cycles, 1);
    }

    #[test]
    fn single_heel_strike_yields_nothing() {
        let events = GaitEvents {
            heel_strikes: SideMap::new(set(&[25]), set(&[75])),
            toe_offs: SideMap::new(set(&[85]), set(&[35])),
        };
        let phases = classify_phases(&events, PhaseStrategy::Timeline);
        assert!(phases.left.cycles.is_empty());
        assert_eq!(phases.left.degenerate_cycles, 0);
        assert!(phases.left.summarize(|c| c.swing_percent).is_none());
    }

    #[test]
    fn alignment_selection() {
        let e = regular_events();
        let (l, r) = (Side::Left, Side::Right);
        let select = |s: Side| {
            Alignment::select(
                &e.heel_strikes[s],
                &e.toe_offs[s],
                &e.heel_strikes[s.opposite()],
                &e.toe_offs[s.opposite()],
            )
        };
        assert_eq!(select(l), Some(Alignment::HeelStrike));
        assert_eq!(select(r), Some(Alignment::ContraHeelStrike));
        assert_eq!(Alignment::select(&set(&[5]), &EventSet::empty(), &set(&[1]), &set(&[2])), None);
    }

    #[test]
    fn alignment_tie_prefers_earlier_stream() {
        let a = Alignment::select(&set(&[10]), &set(&[10]), &set(&[10]), &set(&[10]));
        assert_eq!(a, Some(Alignment::HeelStrike));
        let a = Alignment::select(&set(&[20]), &set(&[10]), &set(&[30]), &set(&[10]));
        assert_eq!(a, Some(Alignment::ToeOff));
    }

    #[test]
    fn contra_heel_strike_alignment_reads_previous_toe_off() {
        // Right side of the regular walk: left heel-strike at 25 comes first.
        let e = regular_events();
        let phases = aligned_phases(
            Side::Right,
            &e.heel_strikes.right,
            &e.toe_offs.right,
            &e.heel_strikes.left,
            &e.toe_offs.left,
        );
        let cycle = phases.cycles[0];
        // swing = HS[0] - TO[0] = 75 - 35, over the 100-frame stride.
        assert_relative_eq!(cycle.swing_percent, 40.0);
        // toe-off = TO[1] - HS[0] = 135 - 75.
        assert_relative_eq!(cycle.toe_off_percent, 60.0);
        assert_relative_eq!(cycle.double_support_1_percent, 10.0);
        assert_relative_eq!(cycle.double_support_2_percent, 10.0);
    }

    #[test]
    fn summary_uses_population_std() {
        let phases = SidePhases {
            cycles: vec![
                PhaseCycle::from_durations(0, 100, 40, 10, 10, 60).unwrap(),
                PhaseCycle::from_durations(100, 200, 44, 10, 10, 56).unwrap(),
            ],
            degenerate_cycles: 0,
        };
        let swing = phases.summarize(|c| c.swing_percent).unwrap();
        assert_relative_eq!(swing.mean, 42.0);
        assert_relative_eq!(swing.std, 2.0);
    }
}
