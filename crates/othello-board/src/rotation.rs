use std::fmt;

use crate::coordinate::{Coordinate, GridIndex, MAX_INDEX};

/// Clockwise rotation of the whole board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RotationDegree {
    Deg90,
    Deg180,
    Deg270,
}

impl RotationDegree {
    pub const ALL: [Self; 3] = [Self::Deg90, Self::Deg180, Self::Deg270];

    #[must_use]
    pub const fn degrees(self) -> i32 {
        match self {
            Self::Deg90 => 90,
            Self::Deg180 => 180,
            Self::Deg270 => 270,
        }
    }

    /// Maps a grid index to where it lands after this rotation.
    #[must_use]
    pub const fn apply(self, index: GridIndex) -> GridIndex {
        let (row, col) = (index.row(), index.col());
        let (row, col) = match self {
            Self::Deg90 => (col, MAX_INDEX - row),
            Self::Deg180 => (MAX_INDEX - row, MAX_INDEX - col),
            Self::Deg270 => (MAX_INDEX - col, row),
        };
        GridIndex::from_parts(row, col)
    }
}

impl fmt::Display for RotationDegree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.degrees())
    }
}

/// Returned when a rotation amount is not 90, 180, or 270.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid rotation degree {degree}, must be 90, 180, or 270")]
pub struct InvalidRotationDegree {
    degree: i32,
}

impl InvalidRotationDegree {
    #[must_use]
    pub fn degree(&self) -> i32 {
        self.degree
    }
}

impl TryFrom<i32> for RotationDegree {
    type Error = InvalidRotationDegree;

    fn try_from(degree: i32) -> Result<Self, Self::Error> {
        match degree {
            90 => Ok(Self::Deg90),
            180 => Ok(Self::Deg180),
            270 => Ok(Self::Deg270),
            _ => Err(InvalidRotationDegree { degree }),
        }
    }
}

impl Coordinate {
    /// Returns the cell this coordinate moves to when the board is rotated.
    #[must_use]
    pub const fn rotated(self, degree: RotationDegree) -> Self {
        degree.apply(GridIndex::from_coordinate(self)).to_coordinate()
    }
}

/// Rotates each coordinate by `degree` clockwise.
///
/// `output[i]` is the rotation of `coordinates[i]`. Fails without producing
/// any output when `degree` is not 90, 180, or 270.
///
/// # Example
///
/// ```
/// use othello_board::{Coordinate, rotate};
///
/// let coords: Vec<Coordinate> = ["A8", "H8"].iter().map(|s| s.parse().unwrap()).collect();
/// let rotated = rotate(&coords, 90).unwrap();
/// assert_eq!(rotated[0].to_string(), "H8");
/// assert_eq!(rotated[1].to_string(), "H1");
///
/// assert!(rotate(&coords, 45).is_err());
/// ```
pub fn rotate(
    coordinates: &[Coordinate],
    degree: i32,
) -> Result<Vec<Coordinate>, InvalidRotationDegree> {
    let degree = RotationDegree::try_from(degree)?;
    Ok(rotate_by(coordinates, degree))
}

/// Typed counterpart of [`rotate`] that cannot fail.
#[must_use]
pub fn rotate_by(coordinates: &[Coordinate], degree: RotationDegree) -> Vec<Coordinate> {
    coordinates.iter().map(|c| c.rotated(degree)).collect()
}
