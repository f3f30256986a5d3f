//! Walks a board that is the unfolded surface of a cube, once with plain
//! row/column wrap-around and once with the board folded back into a cube.

pub mod board;
pub mod direction;
pub mod error;
pub mod fold;
pub mod instructions;
pub mod squares;
pub mod walker;

#[cfg(test)]
mod testing;

pub use board::{Board, Cell};
pub use direction::{Direction, Rotation};
pub use error::{NetError, Result};
pub use fold::{Transition, TransitionTable};
pub use instructions::{parse_instructions, Instruction};
pub use squares::SquareLayout;
pub use walker::{CubeWrap, EdgeWrap, FlatWrap, State, Walker};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Passwords {
    pub flat: u64,
    pub cube: u64,
}

/// Splits puzzle input into the board and the path below it.
pub fn parse_scenario(s: &str) -> Result<(Board, Vec<Instruction>)> {
    let normalized = s.replace("\r\n", "\n");
    let (board_text, path_text) = normalized.split_once("\n\n").ok_or_else(|| {
        NetError::MalformedInput("expected a blank line between board and path".to_string())
    })?;

    Ok((
        Board::from_string(board_text)?,
        parse_instructions(path_text)?,
    ))
}

pub fn solve_flat(board: &Board, instructions: &[Instruction]) -> Result<u64> {
    Walker::new(board, FlatWrap::new(board)).run(instructions)
}

pub fn solve_cube(board: &Board, instructions: &[Instruction]) -> Result<u64> {
    let layout = SquareLayout::detect(board)?;
    let transitions = TransitionTable::fold(&layout)?;
    Walker::new(board, CubeWrap::new(&layout, &transitions)).run(instructions)
}

/// Both passwords, or the first error; there is no partial answer.
pub fn solve(board: &Board, instructions: &[Instruction]) -> Result<Passwords> {
    Ok(Passwords {
        flat: solve_flat(board, instructions)?,
        cube: solve_cube(board, instructions)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{EXAMPLE_BOARD, EXAMPLE_PATH};

    #[test]
    fn solves_example_scenario() {
        let input = format!("{}\n{}\n", EXAMPLE_BOARD, EXAMPLE_PATH);
        let (board, steps) = parse_scenario(&input).unwrap();
        assert_eq!(
            solve(&board, &steps).unwrap(),
            Passwords {
                flat: 6032,
                cube: 5031
            }
        );
    }

    #[test]
    fn accepts_windows_line_endings() {
        let input = format!("{}\n{}\n", EXAMPLE_BOARD, EXAMPLE_PATH).replace('\n', "\r\n");
        let (board, steps) = parse_scenario(&input).unwrap();
        assert_eq!(solve_flat(&board, &steps).unwrap(), 6032);
    }

    #[test]
    fn missing_path_is_malformed() {
        assert!(matches!(
            parse_scenario(EXAMPLE_BOARD),
            Err(NetError::MalformedInput(_))
        ));
    }

    #[test]
    fn no_partial_result_for_non_nets() {
        let board = Board::from_string("......\n......").unwrap();
        assert!(solve_flat(&board, &[]).is_ok());
        assert!(matches!(
            solve(&board, &[]),
            Err(NetError::NotACubeNet(_))
        ));
    }
}
