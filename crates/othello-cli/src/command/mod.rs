use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand};
use othello_board::{BoardParser, Coordinate, DEFAULT_MARKER};
use tracing::Level;

use crate::util;

use self::{report::ReportArg, rotate::RotateArg, symmetries::SymmetriesArg};

mod report;
mod rotate;
mod symmetries;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
pub struct CommandArgs {
    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// What mode to run the program in
    #[command(subcommand)]
    mode: Mode,
}

#[derive(Debug, Clone, Subcommand)]
enum Mode {
    /// Print a board's marked cells and their 90°, 180° and 270° rotations
    Report(#[clap(flatten)] ReportArg),
    /// Rotate coordinates given on the command line
    Rotate(#[clap(flatten)] RotateArg),
    /// Print every symmetric image of a board
    Symmetries(#[clap(flatten)] SymmetriesArg),
}

/// Where to read board text from and which character marks a cell.
#[derive(Debug, Clone, clap::Args)]
pub(crate) struct BoardInputArg {
    /// Board text file, 8 lines of 8 cells (reads stdin when omitted)
    #[arg(long)]
    board: Option<PathBuf>,
    /// Character marking an occupied cell
    #[arg(long, default_value_t = DEFAULT_MARKER)]
    marker: char,
}

impl BoardInputArg {
    fn source_name(&self) -> String {
        self.board
            .as_ref()
            .map_or_else(|| "stdin".to_owned(), |path| path.display().to_string())
    }

    pub(crate) fn marker(&self) -> char {
        self.marker
    }

    pub(crate) fn load_cells(&self) -> anyhow::Result<Vec<Coordinate>> {
        let text = util::read_board_text(self.board.as_deref())?;
        let cells = BoardParser::new(self.marker)
            .extract_marked_cells(&text)
            .with_context(|| format!("Failed to parse board from {}", self.source_name()))?;
        tracing::info!(
            source = %self.source_name(),
            marker = %self.marker,
            count = cells.len(),
            "extracted marked cells"
        );
        Ok(cells)
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        _ => Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .init();
}

pub fn run() -> anyhow::Result<()> {
    let args = CommandArgs::parse();
    init_logging(args.verbose);
    match args.mode {
        Mode::Report(arg) => report::run(arg)?,
        Mode::Rotate(arg) => rotate::run(&arg)?,
        Mode::Symmetries(arg) => symmetries::run(arg)?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory as _;

    use super::*;

    #[test]
    fn test_command_definition() {
        CommandArgs::command().debug_assert();
    }

    #[test]
    fn test_parse_rotate() {
        let args =
            CommandArgs::try_parse_from(["othello", "-v", "rotate", "--degree", "90", "A8", "E4"])
                .unwrap();
        assert_eq!(args.verbose, 1);
        let Mode::Rotate(arg) = args.mode else {
            panic!("expected rotate mode");
        };
        assert_eq!(arg.degree(), 90);
        assert_eq!(arg.coordinates().len(), 2);
    }

    #[test]
    fn test_parse_rejects_bad_coordinate() {
        let result = CommandArgs::try_parse_from(["othello", "rotate", "--degree", "90", "Z9"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_default_marker() {
        let args = CommandArgs::try_parse_from(["othello", "report"]).unwrap();
        let Mode::Report(arg) = args.mode else {
            panic!("expected report mode");
        };
        assert_eq!(arg.board().marker(), DEFAULT_MARKER);
    }
}
