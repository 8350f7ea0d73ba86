use std::iter;

use serde::{Deserialize, Serialize};

use crate::{
    coordinate::{BOARD_SIZE, Coordinate, GridIndex},
    rotation::RotationDegree,
};

/// Set of board cells packed into a `u64`.
///
/// Bit `row * 8 + col` corresponds to [`GridIndex`] `(row, col)`, so bit 0 is
/// `A8` and bit 63 is `H1`. Each byte holds one row of the board.
///
/// Symmetries are computed with delta-swap bit tricks instead of per-cell
/// arithmetic, and agree with [`Coordinate::rotated`] cell by cell.
///
/// # Example
///
/// ```
/// use othello_board::{CellMask, Coordinate, RotationDegree};
///
/// let a8: Coordinate = "A8".parse().unwrap();
/// let mask = CellMask::from_coordinates(&[a8]);
/// let rotated = mask.rotated(RotationDegree::Deg90);
/// assert!(rotated.contains("H8".parse().unwrap()));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellMask {
    bits: u64,
}

impl Serialize for CellMask {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        // Format: 16 hex digits, e.g. "0000001008000000"
        serializer.serialize_str(&format!("{:016x}", self.bits))
    }
}

impl<'de> Deserialize<'de> for CellMask {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        let bits = u64::from_str_radix(&s, 16)
            .map_err(|e| serde::de::Error::custom(format!("invalid cell mask: {s} ({e})")))?;
        Ok(Self { bits })
    }
}

impl FromIterator<Coordinate> for CellMask {
    fn from_iter<T: IntoIterator<Item = Coordinate>>(iter: T) -> Self {
        let mut mask = Self::EMPTY;
        for coord in iter {
            mask.insert(coord);
        }
        mask
    }
}

impl CellMask {
    pub const EMPTY: Self = Self { bits: 0 };
    pub const FULL: Self = Self { bits: u64::MAX };

    #[must_use]
    pub const fn from_bits(bits: u64) -> Self {
        Self { bits }
    }

    #[must_use]
    pub const fn bits(self) -> u64 {
        self.bits
    }

    #[must_use]
    pub fn from_coordinates(coordinates: &[Coordinate]) -> Self {
        coordinates.iter().copied().collect()
    }

    const fn bit(coord: Coordinate) -> u64 {
        let index = GridIndex::from_coordinate(coord);
        1 << (index.row() * BOARD_SIZE + index.col())
    }

    pub fn insert(&mut self, coord: Coordinate) {
        self.bits |= Self::bit(coord);
    }

    #[must_use]
    pub const fn contains(self, coord: Coordinate) -> bool {
        self.bits & Self::bit(coord) != 0
    }

    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Iterates over the cells in bit order: row 8 first, `A` to `H`.
    pub fn iter(self) -> impl Iterator<Item = Coordinate> {
        let mut bits = self.bits;
        iter::from_fn(move || {
            if bits == 0 {
                return None;
            }
            let i = bits.trailing_zeros() as usize;
            bits &= bits - 1;
            GridIndex::new(i / BOARD_SIZE, i % BOARD_SIZE).map(GridIndex::to_coordinate)
        })
    }

    /// Mirrors across the `A8`-`H1` diagonal: `(row, col) -> (col, row)`.
    #[must_use]
    pub const fn transposed(self) -> Self {
        let b = self.bits;
        let t = (b ^ (b >> 7)) & 0x00aa_00aa_00aa_00aa;
        let b = b ^ t ^ (t << 7);
        let t = (b ^ (b >> 14)) & 0x0000_cccc_0000_cccc;
        let b = b ^ t ^ (t << 14);
        let t = (b ^ (b >> 28)) & 0x0000_0000_f0f0_f0f0;
        Self {
            bits: b ^ t ^ (t << 28),
        }
    }

    /// Swaps top and bottom: `(row, col) -> (7 - row, col)`.
    #[must_use]
    pub const fn flipped_vertical(self) -> Self {
        Self {
            bits: self.bits.swap_bytes(),
        }
    }

    /// Swaps left and right: `(row, col) -> (row, 7 - col)`.
    #[must_use]
    pub const fn flipped_horizontal(self) -> Self {
        let b = self.bits;
        let b = ((b >> 1) & 0x5555_5555_5555_5555) | ((b << 1) & 0xaaaa_aaaa_aaaa_aaaa);
        let b = ((b >> 2) & 0x3333_3333_3333_3333) | ((b << 2) & 0xcccc_cccc_cccc_cccc);
        let b = ((b >> 4) & 0x0f0f_0f0f_0f0f_0f0f) | ((b << 4) & 0xf0f0_f0f0_f0f0_f0f0);
        Self { bits: b }
    }

    #[must_use]
    pub const fn rotated(self, degree: RotationDegree) -> Self {
        match degree {
            RotationDegree::Deg90 => self.transposed().flipped_horizontal(),
            RotationDegree::Deg180 => self.flipped_vertical().flipped_horizontal(),
            RotationDegree::Deg270 => self.transposed().flipped_vertical(),
        }
    }

    /// The mask followed by its 90°, 180° and 270° rotations.
    #[must_use]
    pub const fn rotations(self) -> [Self; 4] {
        [
            self,
            self.rotated(RotationDegree::Deg90),
            self.rotated(RotationDegree::Deg180),
            self.rotated(RotationDegree::Deg270),
        ]
    }

    /// All 8 images under the board's symmetry group.
    ///
    /// Image `i` applies a horizontal flip if bit 0 of `i` is set, then a
    /// vertical flip for bit 1, then a transpose for bit 2. Image 0 is the
    /// mask itself. Images may coincide for symmetric masks.
    #[must_use]
    pub fn symmetries(self) -> [Self; 8] {
        let mut images = [self; 8];
        for (i, image) in images.iter_mut().enumerate() {
            if i & 0b001 != 0 {
                *image = image.flipped_horizontal();
            }
            if i & 0b010 != 0 {
                *image = image.flipped_vertical();
            }
            if i & 0b100 != 0 {
                *image = image.transposed();
            }
        }
        images
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::rotation::rotate_by;

    fn coord(s: &str) -> Coordinate {
        s.parse().unwrap()
    }

    fn single(s: &str) -> CellMask {
        CellMask::from_coordinates(&[coord(s)])
    }

    #[test]
    fn test_bit_layout() {
        assert_eq!(single("A8").bits(), 1);
        assert_eq!(single("H8").bits(), 1 << 7);
        assert_eq!(single("A7").bits(), 1 << 8);
        assert_eq!(single("H1").bits(), 1 << 63);
    }

    #[test]
    fn test_insert_contains_len() {
        let mut mask = CellMask::EMPTY;
        assert!(mask.is_empty());
        mask.insert(coord("D4"));
        mask.insert(coord("E5"));
        mask.insert(coord("D4"));
        assert_eq!(mask.len(), 2);
        assert!(mask.contains(coord("D4")));
        assert!(!mask.contains(coord("D5")));
        assert_eq!(CellMask::FULL.len(), 64);
    }

    #[test]
    fn test_iter_order() {
        let mask = CellMask::from_coordinates(&[coord("A1"), coord("H8"), coord("C8")]);
        let cells = mask.iter().map(|c| c.to_string()).collect::<Vec<_>>();
        assert_eq!(cells, ["C8", "H8", "A1"]);
        assert_eq!(CellMask::FULL.iter().count(), 64);
    }

    #[test]
    fn test_primitives_per_cell() {
        for c in Coordinate::all() {
            let index = GridIndex::from_coordinate(c);
            let (row, col) = (index.row(), index.col());
            let at = |r, c| GridIndex::new(r, c).unwrap().to_coordinate();
            let mask = CellMask::from_coordinates(&[c]);

            assert_eq!(mask.transposed().iter().next(), Some(at(col, row)));
            assert_eq!(
                mask.flipped_vertical().iter().next(),
                Some(at(7 - row, col))
            );
            assert_eq!(
                mask.flipped_horizontal().iter().next(),
                Some(at(row, 7 - col))
            );
        }
    }

    #[test]
    fn test_rotation_matches_coordinate_rotation() {
        for c in Coordinate::all() {
            let mask = CellMask::from_coordinates(&[c]);
            for degree in RotationDegree::ALL {
                assert_eq!(
                    mask.rotated(degree).iter().collect::<Vec<_>>(),
                    vec![c.rotated(degree)],
                    "{c} rotated by {degree}"
                );
            }
        }
    }

    #[test]
    fn test_rotation_of_sets() {
        let cells = ["A1", "B1", "C1", "D1", "E1", "F1", "G1", "H1", "B2", "G2"]
            .map(coord)
            .to_vec();
        let mask = CellMask::from_coordinates(&cells);
        for degree in RotationDegree::ALL {
            let expected = CellMask::from_coordinates(&rotate_by(&cells, degree));
            assert_eq!(mask.rotated(degree), expected);
        }
    }

    #[test]
    fn test_rotations_cycle() {
        let mask = CellMask::from_coordinates(&[coord("B1"), coord("C3"), coord("H5")]);
        let [r0, r90, r180, r270] = mask.rotations();
        assert_eq!(r0, mask);
        assert_eq!(r90.rotated(RotationDegree::Deg90), r180);
        assert_eq!(r180.rotated(RotationDegree::Deg90), r270);
        assert_eq!(r270.rotated(RotationDegree::Deg90), mask);
    }

    #[test]
    fn test_symmetries() {
        // No symmetry maps this set onto itself.
        let mask = CellMask::from_coordinates(&[coord("A8"), coord("B8"), coord("A6")]);
        let images = mask.symmetries();
        assert_eq!(images[0], mask);
        assert_eq!(images.iter().collect::<HashSet<_>>().len(), 8);
        for image in images {
            assert_eq!(image.len(), 3);
        }
        for rotation in mask.rotations() {
            assert!(images.contains(&rotation));
        }

        let center = CellMask::from_coordinates(&[coord("D4"), coord("E5")]);
        assert!(center.symmetries().iter().all(|m| m.len() == 2));
        assert_eq!(
            center.symmetries().iter().collect::<HashSet<_>>().len(),
            2
        );
    }

    #[test]
    fn test_serde() {
        let mask = CellMask::from_coordinates(&[coord("D5"), coord("E4")]);
        let json = serde_json::to_string(&mask).unwrap();
        assert_eq!(json, r#""0000001008000000""#);
        let back: CellMask = serde_json::from_str(&json).unwrap();
        assert_eq!(back, mask);
        assert!(serde_json::from_str::<CellMask>(r#""xyz""#).is_err());
    }
}
