//! Gait event sequences.

use serde::{Deserialize, Serialize};

use crate::error::{GaitError, GaitResult};

/// An ascending sequence of frame indices marking heel-strikes or toe-offs
/// for one side.
///
/// Frames are strictly increasing. An event set is created once from the full
/// trial and never mutated afterwards.
///
/// # Example
///
/// ```
/// use gait_types::EventSet;
///
/// let hs = EventSet::from_frames(vec![25, 125, 225]).unwrap();
/// let strides: Vec<(usize, usize)> = hs.strides().collect();
/// assert_eq!(strides, vec![(25, 125), (125, 225)]);
///
/// assert!(EventSet::from_frames(vec![10, 10]).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<usize>", into = "Vec<usize>")]
pub struct EventSet {
    frames: Vec<usize>,
}

impl EventSet {
    /// Creates an event set, checking that frames are strictly increasing.
    ///
    /// # Errors
    ///
    /// Returns [`GaitError::UnorderedEvents`] at the first frame that does not
    /// exceed its predecessor.
    pub fn from_frames(frames: Vec<usize>) -> GaitResult<Self> {
        if let Some(pair) = frames.windows(2).find(|w| w[1] <= w[0]) {
            return Err(GaitError::UnorderedEvents {
                frame: pair[1],
                previous: pair[0],
            });
        }
        Ok(Self { frames })
    }

    /// An empty event set.
    #[must_use]
    pub const fn empty() -> Self {
        Self { frames: Vec::new() }
    }

    /// Event frames.
    #[must_use]
    pub fn frames(&self) -> &[usize] {
        &self.frames
    }

    /// Number of events.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Returns true if no event was detected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Earliest event.
    #[must_use]
    pub fn first(&self) -> Option<usize> {
        self.frames.first().copied()
    }

    /// Latest event.
    #[must_use]
    pub fn last(&self) -> Option<usize> {
        self.frames.last().copied()
    }

    /// Event at position `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<usize> {
        self.frames.get(index).copied()
    }

    /// Number of complete cycles bounded by consecutive events.
    #[must_use]
    pub fn cycle_count(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    /// Consecutive `(start, end)` event pairs.
    pub fn strides(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.frames.windows(2).map(|w| (w[0], w[1]))
    }

    /// The most recent event at or before `frame`.
    #[must_use]
    pub fn last_at_or_before(&self, frame: usize) -> Option<usize> {
        let idx = self.frames.partition_point(|&f| f <= frame);
        idx.checked_sub(1).map(|i| self.frames[i])
    }

    /// The first event strictly inside `(after, before)`.
    #[must_use]
    pub fn first_between(&self, after: usize, before: usize) -> Option<usize> {
        let idx = self.frames.partition_point(|&f| f <= after);
        self.frames.get(idx).copied().filter(|&f| f < before)
    }
}

impl TryFrom<Vec<usize>> for EventSet {
    type Error = GaitError;

    fn try_from(frames: Vec<usize>) -> GaitResult<Self> {
        Self::from_frames(frames)
    }
}

impl From<EventSet> for Vec<usize> {
    fn from(events: EventSet) -> Self {
        events.frames
    }
}
