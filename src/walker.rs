use crate::board::{Board, Cell};
use crate::direction::Direction;
use crate::error::{NetError, Result};
use crate::fold::TransitionTable;
use crate::instructions::Instruction;
use crate::squares::SquareLayout;

/// Decides where one step forward leads, including what happens at an edge.
pub trait EdgeWrap {
    fn step_forward(&self, state: &State) -> Result<State>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    /// `(column, row)` on the board.
    pub position: (i32, i32),
    pub facing: Direction,
}

impl State {
    pub fn start(board: &Board) -> State {
        State {
            position: (board.start_column(), 0),
            facing: Direction::Right,
        }
    }

    pub fn password(&self) -> u64 {
        let (col, row) = self.position;
        1000 * (row as u64 + 1) + 4 * (col as u64 + 1) + self.facing.to_i32() as u64
    }
}

/// Leaving the net wraps around to the far end of the same row or column.
pub struct FlatWrap<'a> {
    board: &'a Board,
}

impl<'a> FlatWrap<'a> {
    pub fn new(board: &'a Board) -> FlatWrap<'a> {
        FlatWrap { board }
    }
}

impl EdgeWrap for FlatWrap<'_> {
    fn step_forward(&self, state: &State) -> Result<State> {
        let width = self.board.width();
        let height = self.board.height();
        let (dx, dy) = (state.facing.dx(), state.facing.dy());

        let (mut col, mut row) = state.position;
        loop {
            col = (col + dx).rem_euclid(width);
            row = (row + dy).rem_euclid(height);
            if self.board.is_open((col, row)) {
                return Ok(State {
                    position: (col, row),
                    facing: state.facing,
                });
            }
            if (col, row) == state.position {
                return Err(NetError::OffBoard { column: col, row });
            }
        }
    }
}

/// Leaving a square continues on whichever square shares that edge once the
/// net is folded into a cube.
pub struct CubeWrap<'a> {
    layout: &'a SquareLayout,
    transitions: &'a TransitionTable,
}

impl<'a> CubeWrap<'a> {
    pub fn new(layout: &'a SquareLayout, transitions: &'a TransitionTable) -> CubeWrap<'a> {
        CubeWrap {
            layout,
            transitions,
        }
    }
}

impl EdgeWrap for CubeWrap<'_> {
    fn step_forward(&self, state: &State) -> Result<State> {
        let (col, row) = state.position;
        let square = self
            .layout
            .square_at(state.position)
            .ok_or(NetError::OffBoard { column: col, row })?;
        let size = self.layout.size();
        let (x0, y0) = self.layout.origin(square);
        let local = (col - x0, row - y0);

        let (x, y) = state.facing.step(local);
        if x >= 0 && x < size && y >= 0 && y < size {
            return Ok(State {
                position: (x0 + x, y0 + y),
                facing: state.facing,
            });
        }

        let t = self.transitions.get(square, state.facing);
        let (x, y) = remap_across_edge(state.facing, t.direction, local, size);
        let (x0, y0) = self.layout.origin(t.square);

        Ok(State {
            position: (x0 + x, y0 + y),
            facing: t.direction,
        })
    }
}

/// Distance of a cell on `edge` from the corner where that edge starts when
/// the square's border is walked clockwise.
fn offset_along_edge(edge: Direction, (x, y): (i32, i32), size: i32) -> i32 {
    match edge {
        Direction::Up => x,
        Direction::Right => y,
        Direction::Down => size - 1 - x,
        Direction::Left => size - 1 - y,
    }
}

fn cell_on_edge(edge: Direction, t: i32, size: i32) -> (i32, i32) {
    match edge {
        Direction::Up => (t, 0),
        Direction::Right => (size - 1, t),
        Direction::Down => (size - 1 - t, size - 1),
        Direction::Left => (0, size - 1 - t),
    }
}

/// Local cell reached after leaving a square from `local` heading `from` and
/// arriving heading `to`.
///
/// Two glued edges run in opposite clockwise senses, so the offset is
/// mirrored; the arrival edge is the one facing back against `to`.
pub fn remap_across_edge(from: Direction, to: Direction, local: (i32, i32), size: i32) -> (i32, i32) {
    let t = size - 1 - offset_along_edge(from, local, size);
    cell_on_edge(to.opposite(), t, size)
}

pub struct Walker<'a, W>
where
    W: EdgeWrap,
{
    board: &'a Board,
    wrap: W,
    state: State,
}

impl<'a, W> Walker<'a, W>
where
    W: EdgeWrap,
{
    pub fn new(board: &'a Board, wrap: W) -> Walker<'a, W> {
        Walker {
            board,
            wrap,
            state: State::start(board),
        }
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Walls end a forward move early without being an error.
    pub fn apply(&mut self, ins: Instruction) -> Result<()> {
        match ins {
            Instruction::Forward(n) => {
                for _ in 0..n {
                    let next = self.wrap.step_forward(&self.state)?;
                    match self.board.at(next.position) {
                        Some(Cell::Obstacle) => break,
                        Some(Cell::Empty) => self.state = next,
                        _ => {
                            let (column, row) = next.position;
                            return Err(NetError::OffBoard { column, row });
                        }
                    }
                }
            }
            Instruction::Turn(rotation) => {
                self.state.facing = self.state.facing.rotate(rotation);
            }
        }
        Ok(())
    }

    pub fn run(&mut self, instructions: &[Instruction]) -> Result<u64> {
        for ins in instructions {
            self.apply(*ins)?;
        }
        Ok(self.state.password())
    }
}
