//! Coordinate transforms for the 8×8 Othello board.
//!
//! This crate turns a textual board rendering into board-notation coordinates
//! and computes where those coordinates land when the whole board is rotated
//! clockwise by 90°, 180°, or 270°.
//!
//! # Modules
//!
//! - [`coordinate`]: [`Coordinate`] (`E4`-style cells) and [`GridIndex`], the
//!   zero-based indices used for rotation arithmetic
//! - [`parser`]: [`BoardParser`] extracts marked cells from board text
//! - [`rotation`]: [`rotate`] and [`RotationDegree`]
//! - [`render`]: turns coordinates back into board text
//! - [`cell_mask`]: [`CellMask`], a bitboard with the full symmetry group
//! - [`report`]: [`RotationReport`], a list together with its three rotations
//!
//! # Row conventions
//!
//! Board text numbers rows top-down: the first line is row 1. Rotation
//! arithmetic uses [`GridIndex`], where row 8 is index 0. Both are kept as
//! separate conversions; mixing them up silently flips the rotation direction.
//!
//! # Example
//!
//! ```
//! use othello_board::{RotationReport, extract_marked_cells, rotate};
//!
//! let board = "
//! .......X
//! ......X.
//! .....X..
//! ....X...
//! ...X....
//! ..X.....
//! .X......
//! X.......
//! ";
//! let cells = extract_marked_cells(board).unwrap();
//! assert_eq!(cells[0].to_string(), "H1");
//!
//! let rotated = rotate(&cells, 180).unwrap();
//! assert_eq!(rotated[0].to_string(), "A8");
//!
//! let report = RotationReport::new(cells);
//! assert_eq!(report.rotated_90[0].to_string(), "A1");
//! ```

pub use self::{
    cell_mask::CellMask,
    coordinate::{BOARD_SIZE, Column, Coordinate, GridIndex, ParseCoordinateError, Row},
    parser::{BoardParser, BoardTextError, DEFAULT_MARKER, extract_marked_cells},
    render::{DEFAULT_EMPTY, render_marked_cells},
    report::{RotationReport, format_coordinate_list},
    rotation::{InvalidRotationDegree, RotationDegree, rotate, rotate_by},
};

pub mod cell_mask;
pub mod coordinate;
pub mod parser;
pub mod render;
pub mod report;
pub mod rotation;
