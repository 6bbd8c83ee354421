//! Console front end for the omnidoku solving engine.
//!
//! Loads a puzzle from the input file, solves it, and writes the solution
//! to the output file. Formats are selected by file extension (`.txt` or
//! `.json`), and the two files may use different formats.
//!
//! Exit codes: 0 on success, 1 when the input cannot be read or parsed,
//! 2 when the puzzle has no solution.

use std::{fs, io, path::PathBuf, process::ExitCode};

use clap::Parser;
use omnidoku_format::{ParseError, format_for_path};
use omnidoku_solver::{BacktrackingSolver, NoSolutionFound};

/// Console Sudoku solver for boards of any admissible size.
#[derive(Debug, Parser)]
#[command(name = "omnidoku", version)]
struct Args {
    /// Input puzzle file (.txt or .json)
    infile: PathBuf,
    /// Output solution file (.txt or .json)
    outfile: PathBuf,
    /// Display the board before and after solving
    #[arg(long)]
    display: bool,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("{_0}")]
    Parse(#[from] ParseError),
    #[display("{_0}")]
    Io(#[from] io::Error),
    #[display("no solution could be found")]
    NoSolution(#[from] NoSolutionFound),
}

impl CliError {
    fn exit_code(&self) -> u8 {
        match self {
            Self::Parse(_) | Self::Io(_) => 1,
            Self::NoSolution(_) => 2,
        }
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let loader = format_for_path(&args.infile)?;
    let dumper = format_for_path(&args.outfile)?;

    let input = fs::read_to_string(&args.infile)?;
    let board = loader.load(&input)?;
    log::info!(
        "loaded a {}x{} puzzle from {}",
        board.size(),
        board.size(),
        args.infile.display()
    );

    if args.display {
        println!("Puzzle:");
        println!("{}", board.render());
    }

    let solver = BacktrackingSolver::default();
    let solution = solver.solve(&board)?;

    if args.display {
        println!("Solution:");
        println!("{}", solution.render());
    } else {
        println!("Puzzle solved.");
    }

    fs::write(&args.outfile, dumper.dump(&solution))?;
    log::info!("wrote the solution to {}", args.outfile.display());
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("{error}");
            ExitCode::from(error.exit_code())
        }
    }
}
