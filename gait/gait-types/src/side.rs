//! Sides, joints, segments, anatomical planes and horizontal axes.

use std::fmt;
use std::ops::{Index, IndexMut};

use serde::{Deserialize, Serialize};

/// Body side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// Left limb.
    Left,
    /// Right limb.
    Right,
}

impl Side {
    /// Both sides, left first.
    pub const BOTH: [Self; 2] = [Self::Left, Self::Right];

    /// Returns the other side.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    /// Single-letter prefix used by segment labels (`L`, `R`).
    #[must_use]
    pub const fn prefix(self) -> &'static str {
        match self {
            Self::Left => "L",
            Self::Right => "R",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => f.write_str("left"),
            Self::Right => f.write_str("right"),
        }
    }
}

/// Lower-limb joint whose angle is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Joint {
    /// Hip, measured from the thigh segment.
    Hip,
    /// Knee, measured from the shank segment.
    Knee,
    /// Ankle, measured from the foot segment.
    Ankle,
}

impl Joint {
    /// All joints in proximal-to-distal order.
    pub const ALL: [Self; 3] = [Self::Hip, Self::Knee, Self::Ankle];

    /// The body segment whose rotation represents this joint.
    #[must_use]
    pub const fn segment(self) -> Segment {
        match self {
            Self::Hip => Segment::Thigh,
            Self::Knee => Segment::Shank,
            Self::Ankle => Segment::Foot,
        }
    }
}

impl fmt::Display for Joint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hip => f.write_str("hip"),
            Self::Knee => f.write_str("knee"),
            Self::Ankle => f.write_str("ankle"),
        }
    }
}

/// Lower-limb body segment carrying a rotation signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Segment {
    /// Thigh.
    Thigh,
    /// Shank.
    Shank,
    /// Foot.
    Foot,
}

impl Segment {
    /// All segments in proximal-to-distal order.
    pub const ALL: [Self; 3] = [Self::Thigh, Self::Shank, Self::Foot];

    /// Segment name as it appears in rotation files (`Thigh`).
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Thigh => "Thigh",
            Self::Shank => "Shank",
            Self::Foot => "Foot",
        }
    }

    /// Side-qualified label, e.g. `R_Thigh`.
    #[must_use]
    pub fn label(self, side: Side) -> String {
        format!("{}_{}", side.prefix(), self.name())
    }
}

/// Anatomical plane of a rotation component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Plane {
    /// Flexion / extension.
    Sagittal,
    /// Abduction / adduction.
    Frontal,
    /// Internal / external rotation.
    Transverse,
}

impl Plane {
    /// All planes in column order.
    pub const ALL: [Self; 3] = [Self::Sagittal, Self::Frontal, Self::Transverse];

    /// Column index of this plane in a 3-column angle sample.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Sagittal => 0,
            Self::Frontal => 1,
            Self::Transverse => 2,
        }
    }
}

/// Horizontal laboratory axis a trial may walk along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Laboratory X axis.
    X,
    /// Laboratory Y axis.
    Y,
}

impl Axis {
    /// Component index in a 3D position.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::X => 0,
            Self::Y => 1,
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::X => f.write_str("X"),
            Self::Y => f.write_str("Y"),
        }
    }
}

/// A pair of values, one per side.
///
/// # Example
///
/// ```
/// use gait_types::{Side, SideMap};
///
/// let counts = SideMap::new(4, 5);
/// assert_eq!(counts[Side::Right], 5);
/// assert_eq!(counts.map(|c| c * 2)[Side::Left], 8);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideMap<T> {
    /// Left-side value.
    pub left: T,
    /// Right-side value.
    pub right: T,
}

impl<T> SideMap<T> {
    /// Creates a map from its left and right values.
    #[must_use]
    pub const fn new(left: T, right: T) -> Self {
        Self { left, right }
    }

    /// Builds a map by evaluating `f` for each side, left first.
    pub fn from_fn(mut f: impl FnMut(Side) -> T) -> Self {
        let left = f(Side::Left);
        let right = f(Side::Right);
        Self { left, right }
    }

    /// Returns the value for `side`.
    #[must_use]
    pub const fn get(&self, side: Side) -> &T {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    /// Applies `f` to both values.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> SideMap<U> {
        SideMap {
            left: f(self.left),
            right: f(self.right),
        }
    }

    /// Applies `f` to references of both values.
    pub fn map_ref<U>(&self, mut f: impl FnMut(Side, &T) -> U) -> SideMap<U> {
        SideMap {
            left: f(Side::Left, &self.left),
            right: f(Side::Right, &self.right),
        }
    }

    /// Iterates over `(side, value)` pairs, left first.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        [(Side::Left, &self.left), (Side::Right, &self.right)].into_iter()
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &T {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut T {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn side_opposite() {
        assert_eq!(Side::Left.opposite(), Side::Right);
        assert_eq!(Side::Right.opposite(), Side::Left);
    }

    #[test]
    fn joint_segments() {
        assert_eq!(Joint::Hip.segment(), Segment::Thigh);
        assert_eq!(Joint::Knee.segment(), Segment::Shank);
        assert_eq!(Joint::Ankle.segment(), Segment::Foot);
    }

    #[test]
    fn segment_labels() {
        assert_eq!(Segment::Thigh.label(Side::Right), "R_Thigh");
        assert_eq!(Segment::Foot.label(Side::Left), "L_Foot");
    }

    #[test]
    fn plane_indices() {
        let indices: Vec<usize> = Plane::ALL.iter().map(|p| p.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn side_map_index_mut() {
        let mut map = SideMap::new(Vec::new(), Vec::new());
        map[Side::Right].push(3);
        assert!(map.left.is_empty());
        assert_eq!(map.right, vec![3]);
    }

    #[test]
    fn side_map_from_fn_order() {
        let mut calls = Vec::new();
        let map = SideMap::from_fn(|side| {
            calls.push(side);
            side.prefix()
        });
        assert_eq!(calls, vec![Side::Left, Side::Right]);
        assert_eq!(map.right, "R");
    }

    #[test]
    fn side_serializes_lowercase() {
        let json = serde_json::to_string(&Side::Left).unwrap();
        assert_eq!(json, "\"left\"");
    }
}
