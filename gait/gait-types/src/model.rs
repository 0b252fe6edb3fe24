//! Biomechanical model tables.
//!
//! A model fixes which marker-file columns hold each required marker and how
//! the raw segment rotations must be sign-corrected so that flexion,
//! adduction and internal rotation are positive on both sides. Models are
//! immutable values passed explicitly to the stages that need them.

use crate::error::{GaitError, GaitResult};
use crate::side::{Segment, Side, SideMap};

/// Marker-file column labels (`X`, `Y`, `Z`) for every marker the pipeline reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MarkerLabels {
    /// Heel markers.
    pub heel: SideMap<[&'static str; 3]>,
    /// Toe markers.
    pub toe: SideMap<[&'static str; 3]>,
    /// Ankle joint centres.
    pub ankle: SideMap<[&'static str; 3]>,
    /// Pelvis marker.
    pub pelvis: [&'static str; 3],
}

/// An immutable biomechanical model configuration.
///
/// # Example
///
/// ```
/// use gait_types::{BiomechanicalModel, Segment, Side};
///
/// let model = BiomechanicalModel::from_name("cgm23").unwrap();
/// assert_eq!(model.column_limit(), 104);
/// assert_eq!(model.correction(Side::Right, Segment::Foot), [-1.0, -1.0, -1.0]);
///
/// assert!(BiomechanicalModel::from_name("unknown").is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct BiomechanicalModel {
    name: &'static str,
    markers: MarkerLabels,
    corrections: SideMap<[[f64; 3]; 3]>,
    column_limit: usize,
}

impl BiomechanicalModel {
    /// Names of the built-in models.
    pub const NAMES: [&'static str; 2] = ["cgm23", "elenhayes"];

    /// Resolves a built-in model by name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns [`GaitError::UnknownModel`] for any other name.
    pub fn from_name(name: &str) -> GaitResult<Self> {
        match name.trim().to_ascii_lowercase().as_str() {
            "cgm23" => Ok(Self::cgm23()),
            "elenhayes" => Ok(Self::elenhayes()),
            _ => Err(GaitError::UnknownModel(name.to_string())),
        }
    }

    /// Conventional Gait Model 2.3 marker set.
    #[must_use]
    pub fn cgm23() -> Self {
        Self {
            name: "cgm23",
            markers: MarkerLabels {
                heel: SideMap::new(["X13", "Y13", "Z13"], ["X23", "Y23", "Z23"]),
                toe: SideMap::new(["X14", "Y14", "Z14"], ["X24", "Y24", "Z24"]),
                ankle: SideMap::new(["X9.1", "Y9.1", "Z9.1"], ["X8.1", "Y8.1", "Z8.1"]),
                pelvis: ["X3.1", "Y3.1", "Z3.1"],
            },
            corrections: SideMap::new(
                [[-1.0, 1.0, -1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, 1.0]],
                [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, -1.0]],
            ),
            column_limit: 104,
        }
    }

    /// Helen Hayes marker set.
    #[must_use]
    pub fn elenhayes() -> Self {
        Self {
            name: "elenhayes",
            markers: MarkerLabels {
                heel: SideMap::new(["X14", "Y14", "Z14"], ["X8", "Y8", "Z8"]),
                toe: SideMap::new(["X15", "Y15", "Z15"], ["X9", "Y9", "Z9"]),
                ankle: SideMap::new(["X8.1", "Y8.1", "Z8.1"], ["X7.1", "Y7.1", "Z7.1"]),
                pelvis: ["X2.1", "Y2.1", "Z2.1"],
            },
            corrections: SideMap::new(
                [[-1.0, 1.0, 1.0], [1.0, 1.0, -1.0], [-1.0, 1.0, 1.0]],
                [[-1.0, -1.0, 1.0], [1.0, -1.0, 1.0], [-1.0, -1.0, -1.0]],
            ),
            column_limit: 87,
        }
    }

    /// Model name.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Marker column labels.
    #[must_use]
    pub const fn markers(&self) -> &MarkerLabels {
        &self.markers
    }

    /// Number of leading marker-file columns that belong to the model.
    #[must_use]
    pub const fn column_limit(&self) -> usize {
        self.column_limit
    }

    /// Sign-correction vector for `segment` on `side`.
    #[must_use]
    pub fn correction(&self, side: Side, segment: Segment) -> [f64; 3] {
        let slot = match segment {
            Segment::Thigh => 0,
            Segment::Shank => 1,
            Segment::Foot => 2,
        };
        self.corrections[side][slot]
    }
}
