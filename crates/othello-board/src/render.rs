use crate::coordinate::{BOARD_SIZE, Coordinate};

/// Character for an unoccupied cell when rendering.
pub const DEFAULT_EMPTY: char = '.';

/// Renders coordinates as board text, the inverse of
/// [`extract_marked_cells`](crate::extract_marked_cells).
///
/// Row 1 is the top line. Lines are joined with `\n` without a trailing
/// newline.
///
/// # Example
///
/// ```
/// use othello_board::{extract_marked_cells, render_marked_cells};
///
/// let coords = vec!["B2".parse().unwrap(), "G7".parse().unwrap()];
/// let text = render_marked_cells(&coords, 'X', '.');
/// assert_eq!(text.lines().nth(1), Some(".X......"));
/// assert_eq!(extract_marked_cells(&text).unwrap(), coords);
/// ```
#[must_use]
pub fn render_marked_cells(coordinates: &[Coordinate], marker: char, empty: char) -> String {
    let mut grid = [[empty; BOARD_SIZE]; BOARD_SIZE];
    for coord in coordinates {
        grid[coord.row().render_index()][coord.column().index()] = marker;
    }
    grid.iter()
        .map(|line| line.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}
