use std::path::PathBuf;

use othello_board::RotationReport;

use crate::{command::BoardInputArg, util::Output};

#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub(crate) enum ReportFormat {
    /// Four bracketed lists: original, 90°, 180°, 270°
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, clap::Args)]
pub(crate) struct ReportArg {
    #[clap(flatten)]
    board: BoardInputArg,
    /// Output format
    #[arg(long, value_enum, default_value_t)]
    format: ReportFormat,
    /// Output file path
    #[arg(long)]
    output: Option<PathBuf>,
}

impl ReportArg {
    #[cfg(test)]
    pub(crate) fn board(&self) -> &BoardInputArg {
        &self.board
    }
}

pub(crate) fn run(arg: ReportArg) -> anyhow::Result<()> {
    let ReportArg {
        board,
        format,
        output,
    } = arg;

    let report = RotationReport::new(board.load_cells()?);
    let mut output = Output::from_output_path(output)?;
    tracing::info!(format = ?format, output = %output.display_path(), "writing rotation report");
    match format {
        ReportFormat::Text => output.write_text(&report.to_string()),
        ReportFormat::Json => output.write_json(&report),
    }
}
