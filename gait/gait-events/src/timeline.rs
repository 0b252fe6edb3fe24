//! Chronologically merged, side-tagged event timeline.

use gait_types::{EventSet, Side, SideMap};
use serde::{Deserialize, Serialize};

use crate::detect::GaitEvents;

/// Kind of gait event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    /// Initial foot contact.
    HeelStrike,
    /// Foot leaving the ground.
    ToeOff,
}

/// One event tagged with its side and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaggedEvent {
    /// Frame index.
    pub frame: usize,
    /// Side the event belongs to.
    pub side: Side,
    /// Event kind.
    pub kind: EventKind,
}

impl TaggedEvent {
    /// Returns true if the event is of `kind` on `side`.
    #[must_use]
    pub fn is(&self, side: Side, kind: EventKind) -> bool {
        self.side == side && self.kind == kind
    }
}

/// All events of a trial in chronological order.
///
/// Events on the same frame are ordered heel-strike before toe-off, then
/// left before right.
///
/// # Example
///
/// ```
/// use gait_events::{EventKind, Timeline};
/// use gait_types::{EventSet, Side, SideMap};
///
/// let hs = SideMap::new(
///     EventSet::from_frames(vec![25, 125]).unwrap(),
///     EventSet::from_frames(vec![75]).unwrap(),
/// );
/// let timeline = Timeline::from_heel_strikes(&hs);
/// let sides: Vec<Side> = timeline.events().iter().map(|e| e.side).collect();
/// assert_eq!(sides, vec![Side::Left, Side::Right, Side::Left]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Timeline {
    events: Vec<TaggedEvent>,
}

impl Timeline {
    /// Merges heel-strikes and toe-offs of both sides.
    #[must_use]
    pub fn merge(events: &GaitEvents) -> Self {
        let mut timeline = Self::default();
        timeline.extend(&events.heel_strikes, EventKind::HeelStrike);
        timeline.extend(&events.toe_offs, EventKind::ToeOff);
        timeline.sort();
        timeline
    }

    /// Merges the heel-strikes of both sides.
    #[must_use]
    pub fn from_heel_strikes(heel_strikes: &SideMap<EventSet>) -> Self {
        let mut timeline = Self::default();
        timeline.extend(heel_strikes, EventKind::HeelStrike);
        timeline.sort();
        timeline
    }

    fn extend(&mut self, sets: &SideMap<EventSet>, kind: EventKind) {
        for (side, set) in sets.iter() {
            self.events.extend(
                set.frames()
                    .iter()
                    .map(|&frame| TaggedEvent { frame, side, kind }),
            );
        }
    }

    fn sort(&mut self) {
        self.events.sort_by_key(|e| (e.frame, e.kind, e.side));
    }

    /// Events in chronological order.
    #[must_use]
    pub fn events(&self) -> &[TaggedEvent] {
        &self.events
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns true if the timeline holds no events.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Events strictly inside `(after, before)`.
    #[must_use]
    pub fn between(&self, after: usize, before: usize) -> &[TaggedEvent] {
        let lo = self.events.partition_point(|e| e.frame <= after);
        let hi = self.events.partition_point(|e| e.frame < before).max(lo);
        &self.events[lo..hi]
    }
}
