use crate::coordinate::{BOARD_SIZE, Column, Coordinate, Row};

/// Marker character for an occupied cell in board text.
pub const DEFAULT_MARKER: char = 'X';

/// Returned when board text is not 8 lines of 8 cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum BoardTextError {
    #[display("board must have 8 rows, found {found}")]
    RowCount { found: usize },
    #[display("row {row} must have 8 cells, found {found}")]
    RowLength { row: usize, found: usize },
}

/// Extracts marked cells from a textual board rendering.
///
/// The block is trimmed as a whole and each line is trimmed individually.
/// Lines are read top to bottom; the top line is row 1.
///
/// # Example
///
/// ```
/// use othello_board::BoardParser;
///
/// let board = "
/// O.......
/// ........
/// ........
/// ........
/// ........
/// ........
/// ........
/// .......O
/// ";
/// let cells = BoardParser::new('O').extract_marked_cells(board).unwrap();
/// let cells: Vec<_> = cells.iter().map(ToString::to_string).collect();
/// assert_eq!(cells, ["A1", "H8"]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardParser {
    marker: char,
}

impl Default for BoardParser {
    fn default() -> Self {
        Self::new(DEFAULT_MARKER)
    }
}

impl BoardParser {
    #[must_use]
    pub const fn new(marker: char) -> Self {
        Self { marker }
    }

    #[must_use]
    pub const fn marker(&self) -> char {
        self.marker
    }

    /// Returns the marked cells in row-major order, top to bottom then left
    /// to right.
    ///
    /// The dimensions are checked before any cell is read, so malformed text
    /// yields an error and no partial output.
    pub fn extract_marked_cells(
        &self,
        board_text: &str,
    ) -> Result<Vec<Coordinate>, BoardTextError> {
        let lines = board_text.trim().lines().map(str::trim).collect::<Vec<_>>();
        if lines.len() != BOARD_SIZE {
            return Err(BoardTextError::RowCount { found: lines.len() });
        }
        for (i, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != BOARD_SIZE {
                return Err(BoardTextError::RowLength { row: i + 1, found });
            }
        }

        let mut cells = vec![];
        for (row, line) in Row::ALL.into_iter().zip(&lines) {
            for (column, cell) in Column::ALL.into_iter().zip(line.chars()) {
                if cell == self.marker {
                    cells.push(Coordinate::new(column, row));
                }
            }
        }
        Ok(cells)
    }
}

/// Extracts the cells marked with [`DEFAULT_MARKER`].
pub fn extract_marked_cells(board_text: &str) -> Result<Vec<Coordinate>, BoardTextError> {
    BoardParser::default().extract_marked_cells(board_text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ANTI_DIAGONAL_BOARD: &str = "
.......X
......X.
.....X..
....X...
...X....
..X.....
.X......
X.......
";

    fn names(list: &[Coordinate]) -> Vec<String> {
        list.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_anti_diagonal_board() {
        let cells = extract_marked_cells(ANTI_DIAGONAL_BOARD).unwrap();
        assert_eq!(
            names(&cells),
            ["H1", "G2", "F3", "E4", "D5", "C6", "B7", "A8"]
        );
    }

    #[test]
    fn test_row_major_order() {
        let board = "
XX......
........
........
...X.X..
........
........
........
X......X
";
        let cells = extract_marked_cells(board).unwrap();
        assert_eq!(names(&cells), ["A1", "B1", "D4", "F4", "A8", "H8"]);
    }

    #[test]
    fn test_empty_and_full_boards() {
        let empty = "........\n".repeat(8);
        assert!(extract_marked_cells(&empty).unwrap().is_empty());

        let full = "XXXXXXXX\n".repeat(8);
        let cells = extract_marked_cells(&full).unwrap();
        assert_eq!(cells, Coordinate::all().collect::<Vec<_>>());
    }

    #[test]
    fn test_other_characters_are_not_matched() {
        let board = "
xO.X....
........
........
........
........
........
........
........
";
        let cells = extract_marked_cells(board).unwrap();
        assert_eq!(names(&cells), ["D1"]);

        let cells = BoardParser::new('O').extract_marked_cells(board).unwrap();
        assert_eq!(names(&cells), ["B1"]);
    }

    #[test]
    fn test_indented_lines_are_trimmed() {
        let board = ANTI_DIAGONAL_BOARD
            .lines()
            .map(|line| format!("    {line}\r"))
            .collect::<Vec<_>>()
            .join("\n");
        let cells = extract_marked_cells(&board).unwrap();
        assert_eq!(cells.len(), 8);
        assert_eq!(cells[0].to_string(), "H1");
    }

    #[test]
    fn test_wrong_row_count() {
        let board = "........\n".repeat(7);
        assert_eq!(
            extract_marked_cells(&board),
            Err(BoardTextError::RowCount { found: 7 })
        );
        assert_eq!(
            extract_marked_cells(""),
            Err(BoardTextError::RowCount { found: 0 })
        );
        let board = "........\n".repeat(9);
        assert_eq!(
            extract_marked_cells(&board),
            Err(BoardTextError::RowCount { found: 9 })
        );
    }

    #[test]
    fn test_ragged_rows_are_rejected() {
        let mut lines = vec!["X......."; 8];
        lines[2] = "X......";
        assert_eq!(
            extract_marked_cells(&lines.join("\n")),
            Err(BoardTextError::RowLength { row: 3, found: 7 })
        );

        lines[2] = "X........";
        assert_eq!(
            extract_marked_cells(&lines.join("\n")),
            Err(BoardTextError::RowLength { row: 3, found: 9 })
        );
    }
}
