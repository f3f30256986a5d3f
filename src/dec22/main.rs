use std::io::Read;
use std::path::PathBuf;

use clap::Parser;
use log::{info, LevelFilter};

use cube_net_walk::{parse_scenario, solve_cube, solve_flat};

type Result<T> = std::result::Result<T, anyhow::Error>;

/// Walk a cube net, flat and folded.
#[derive(Parser, Debug)]
struct Args {
    /// Puzzle input; read from stdin when omitted.
    input: Option<PathBuf>,

    /// More diagnostics on stderr (repeat for more).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only walk with flat wrap-around; skip folding the cube.
    #[arg(long)]
    flat_only: bool,
}

fn level_filter(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(level_filter(args.verbose))
        .init();

    let buffer = match &args.input {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let (board, steps) = parse_scenario(&buffer)?;
    info!(
        "board {}x{}, start column {}, {} instructions",
        board.width(),
        board.height(),
        board.start_column(),
        steps.len()
    );

    println!("Answer part A: {}", solve_flat(&board, &steps)?);

    if !args.flat_only {
        println!("Answer part B: {}", solve_cube(&board, &steps)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_raises_log_level() {
        assert_eq!(level_filter(0), LevelFilter::Warn);
        assert_eq!(level_filter(1), LevelFilter::Info);
        assert_eq!(level_filter(2), LevelFilter::Debug);
        assert_eq!(level_filter(3), LevelFilter::Trace);
        assert_eq!(level_filter(9), LevelFilter::Trace);
    }

    #[test]
    fn parses_flags() {
        let args = Args::try_parse_from(["dec22", "-vv", "--flat-only", "input.txt"]).unwrap();
        assert_eq!(args.verbose, 2);
        assert!(args.flat_only);
        assert_eq!(args.input, Some(PathBuf::from("input.txt")));
    }
}
