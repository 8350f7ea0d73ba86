use othello_board::{Coordinate, format_coordinate_list, rotate};

use crate::util::Output;

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct RotateArg {
    /// Clockwise rotation in degrees: 90, 180, or 270
    #[arg(long, allow_negative_numbers = true)]
    degree: i32,
    /// Coordinates to rotate, e.g. E4
    #[arg(required = true)]
    coordinates: Vec<Coordinate>,
}

impl RotateArg {
    #[cfg(test)]
    pub(crate) fn degree(&self) -> i32 {
        self.degree
    }

    #[cfg(test)]
    pub(crate) fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }
}

pub(crate) fn run(arg: &RotateArg) -> anyhow::Result<()> {
    let rotated = rotate(&arg.coordinates, arg.degree)?;
    tracing::debug!(degree = arg.degree, count = rotated.len(), "rotated coordinates");
    Output::stdout().write_text(&format_coordinate_list(&rotated))
}
