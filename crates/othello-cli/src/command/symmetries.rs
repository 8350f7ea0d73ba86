use std::{collections::HashSet, path::PathBuf};

use othello_board::{CellMask, DEFAULT_EMPTY, render_marked_cells};

use crate::{command::BoardInputArg, util::Output};

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct SymmetriesArg {
    #[clap(flatten)]
    board: BoardInputArg,
    /// Only print the identity and the three rotations
    #[arg(long)]
    rotations_only: bool,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

pub(crate) fn run(arg: SymmetriesArg) -> anyhow::Result<()> {
    let SymmetriesArg {
        board,
        rotations_only,
        output,
    } = arg;

    let mask = CellMask::from_coordinates(&board.load_cells()?);
    let images = if rotations_only {
        mask.rotations().to_vec()
    } else {
        mask.symmetries().to_vec()
    };
    let distinct = images.iter().collect::<HashSet<_>>().len();
    tracing::info!(images = images.len(), distinct, "computed board images");

    let mut output = Output::from_output_path(output)?;
    output.write_text(&format_images(&images, board.marker()))
}

fn format_images(images: &[CellMask], marker: char) -> String {
    images
        .iter()
        .enumerate()
        .map(|(i, image)| {
            let cells = image.iter().collect::<Vec<_>>();
            format!(
                "# {i}: {:016x}\n{}",
                image.bits(),
                render_marked_cells(&cells, marker, DEFAULT_EMPTY)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
