use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Number of columns and rows on the board.
pub const BOARD_SIZE: usize = 8;

/// Largest zero-based index on either axis.
pub(crate) const MAX_INDEX: usize = BOARD_SIZE - 1;

const COLUMN_SYMBOLS: [char; BOARD_SIZE] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H'];

/// A column designator, one of `A`..`H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Column(u8);

impl Column {
    /// All columns, left to right.
    pub const ALL: [Self; BOARD_SIZE] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < BOARD_SIZE {
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Looks up a column by its symbol. Only uppercase letters are accepted.
    #[must_use]
    pub fn from_symbol(symbol: char) -> Option<Self> {
        COLUMN_SYMBOLS
            .iter()
            .position(|&s| s == symbol)
            .and_then(Self::from_index)
    }

    /// Zero-based position in the column alphabet.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        COLUMN_SYMBOLS[self.0 as usize]
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A row designator in `1..=8`.
///
/// Two index conventions exist for rows and they are kept apart on purpose:
///
/// - [`Row::render_index`] / [`Row::from_render_index`]: the board text
///   convention, where the top rendered line is row 1.
/// - [`GridIndex`]: the rotation convention, where row 8 sits at index 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Row(u8);

impl Row {
    /// All rows in rendering order (row 1 first).
    pub const ALL: [Self; BOARD_SIZE] = [
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
        Self(8),
    ];

    #[must_use]
    pub const fn new(designator: u8) -> Option<Self> {
        if designator >= 1 && designator as usize <= BOARD_SIZE {
            Some(Self(designator))
        } else {
            None
        }
    }

    /// Row for the `index`-th line of a board rendering (top line is 0).
    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn from_render_index(index: usize) -> Option<Self> {
        if index < BOARD_SIZE {
            Some(Self(index as u8 + 1))
        } else {
            None
        }
    }

    /// Line of a board rendering holding this row (top line is 0).
    #[must_use]
    pub const fn render_index(self) -> usize {
        self.0 as usize - 1
    }

    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One of the 64 cells in board notation, e.g. `E4`.
///
/// Serialized as its textual notation.
///
/// # Example
///
/// ```
/// use othello_board::{Column, Coordinate, Row};
///
/// let coord: Coordinate = "E4".parse().unwrap();
/// assert_eq!(coord.column(), Column::from_symbol('E').unwrap());
/// assert_eq!(coord.row(), Row::new(4).unwrap());
/// assert_eq!(coord.to_string(), "E4");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Coordinate {
    row: Row,
    column: Column,
}

impl Coordinate {
    #[must_use]
    pub const fn new(column: Column, row: Row) -> Self {
        Self { row, column }
    }

    #[must_use]
    pub const fn column(self) -> Column {
        self.column
    }

    #[must_use]
    pub const fn row(self) -> Row {
        self.row
    }

    /// Iterates over all 64 cells, row 1 first, left to right.
    pub fn all() -> impl Iterator<Item = Self> {
        Row::ALL.into_iter().flat_map(|row| {
            Column::ALL
                .into_iter()
                .map(move |column| Self::new(column, row))
        })
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ParseCoordinateError {
    #[display("expected a column letter followed by a row digit, got {text:?}")]
    InvalidLength { text: String },
    #[display("invalid column {symbol:?}, expected one of A-H")]
    InvalidColumn { symbol: char },
    #[display("invalid row {symbol:?}, expected 1-8")]
    InvalidRow { symbol: char },
}

impl FromStr for Coordinate {
    type Err = ParseCoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let (Some(column_symbol), Some(row_symbol), None) =
            (chars.next(), chars.next(), chars.next())
        else {
            return Err(ParseCoordinateError::InvalidLength { text: s.to_owned() });
        };

        let column = Column::from_symbol(column_symbol).ok_or(
            ParseCoordinateError::InvalidColumn {
                symbol: column_symbol,
            },
        )?;
        let row = row_symbol
            .to_digit(10)
            .and_then(|d| u8::try_from(d).ok())
            .and_then(Row::new)
            .ok_or(ParseCoordinateError::InvalidRow { symbol: row_symbol })?;

        Ok(Self::new(column, row))
    }
}

impl Serialize for Coordinate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Zero-based `(row, col)` pair used for rotation arithmetic.
///
/// `row = 8 - row designator`, so row 8 is at index 0 and row 1 at index 7.
/// `col` is the position of the column symbol in `A`..`H`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GridIndex {
    row: usize,
    col: usize,
}

impl GridIndex {
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Option<Self> {
        if row < BOARD_SIZE && col < BOARD_SIZE {
            Some(Self { row, col })
        } else {
            None
        }
    }

    /// Callers guarantee both indices are below [`BOARD_SIZE`].
    pub(crate) const fn from_parts(row: usize, col: usize) -> Self {
        debug_assert!(row < BOARD_SIZE && col < BOARD_SIZE);
        Self { row, col }
    }

    #[must_use]
    pub const fn from_coordinate(coord: Coordinate) -> Self {
        Self {
            row: BOARD_SIZE - coord.row.0 as usize,
            col: coord.column.index(),
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    #[must_use]
    pub const fn to_coordinate(self) -> Coordinate {
        Coordinate {
            row: Row((BOARD_SIZE - self.row) as u8),
            column: Column(self.col as u8),
        }
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col
    }
}

impl From<Coordinate> for GridIndex {
    fn from(coord: Coordinate) -> Self {
        Self::from_coordinate(coord)
    }
}

impl From<GridIndex> for Coordinate {
    fn from(index: GridIndex) -> Self {
        index.to_coordinate()
    }
}
