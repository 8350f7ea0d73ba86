use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    coordinate::Coordinate,
    rotation::{RotationDegree, rotate_by},
};

/// A coordinate list together with its three rotations.
///
/// `Display` prints each list in brackets, one per line:
///
/// ```text
/// [H1, G2, F3, E4, D5, C6, B7, A8],
/// [A1, B2, C3, D4, E5, F6, G7, H8],
/// [A8, B7, C6, D5, E4, F3, G2, H1],
/// [H8, G7, F6, E5, D4, C3, B2, A1]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationReport {
    pub original: Vec<Coordinate>,
    pub rotated_90: Vec<Coordinate>,
    pub rotated_180: Vec<Coordinate>,
    pub rotated_270: Vec<Coordinate>,
}

impl RotationReport {
    #[must_use]
    pub fn new(original: Vec<Coordinate>) -> Self {
        let rotated_90 = rotate_by(&original, RotationDegree::Deg90);
        let rotated_180 = rotate_by(&original, RotationDegree::Deg180);
        let rotated_270 = rotate_by(&original, RotationDegree::Deg270);
        Self {
            original,
            rotated_90,
            rotated_180,
            rotated_270,
        }
    }

    #[must_use]
    pub fn rotated(&self, degree: RotationDegree) -> &[Coordinate] {
        match degree {
            RotationDegree::Deg90 => &self.rotated_90,
            RotationDegree::Deg180 => &self.rotated_180,
            RotationDegree::Deg270 => &self.rotated_270,
        }
    }
}

/// Formats coordinates as `[A1, B2, ...]`.
#[must_use]
pub fn format_coordinate_list(coordinates: &[Coordinate]) -> String {
    let joined = coordinates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}

impl fmt::Display for RotationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{},\n{},\n{},\n{}",
            format_coordinate_list(&self.original),
            format_coordinate_list(&self.rotated_90),
            format_coordinate_list(&self.rotated_180),
            format_coordinate_list(&self.rotated_270),
        )
    }
}
