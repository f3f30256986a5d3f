use std::collections::HashMap;

use itertools::Itertools;
use log::debug;

use crate::direction::Direction;
use crate::error::{NetError, Result};
use crate::squares::{SquareLayout, NUMBER_OF_SQUARES};

/// Where the walker ends up after crossing one edge of a square on the cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Transition {
    pub square: usize,
    pub direction: Direction,
}

type EdgeIndex = (usize, Direction);

/// Complete edge-crossing rules for a folded cube: one entry per square and
/// edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionTable {
    entries: [[Transition; 4]; NUMBER_OF_SQUARES],
}

/// Transitions discovered so far while folding.
struct PartialTable {
    known: HashMap<EdgeIndex, Transition>,
}

impl PartialTable {
    fn identify(&mut self, from: EdgeIndex, to: Transition) {
        self.known.insert(from, to);
    }

    /// Squares touching in the flat layout are neighbours on the cube too,
    /// and crossing between them keeps the heading.
    fn fill_direct(&mut self, anchors: &[(i32, i32); NUMBER_OF_SQUARES]) {
        for (i, j) in (0..NUMBER_OF_SQUARES).tuple_combinations() {
            for d in Direction::all() {
                if d.step(anchors[i]) != anchors[j] {
                    continue;
                }
                self.identify(
                    (i, d),
                    Transition {
                        square: j,
                        direction: d,
                    },
                );
                self.identify(
                    (j, d.opposite()),
                    Transition {
                        square: i,
                        direction: d.opposite(),
                    },
                );
            }
        }
    }

    fn check_neighbours(&self) -> Result<()> {
        for i in 0..NUMBER_OF_SQUARES {
            if Direction::all()
                .iter()
                .all(|d| !self.known.contains_key(&(i, *d)))
            {
                return Err(NetError::NotACubeNet(format!(
                    "square {} has no neighbour",
                    i + 1
                )));
            }
        }
        Ok(())
    }

    /// Follows two known crossings around a corner of square `i`: first
    /// across edge `first`, then across the edge `turn` of wherever that led.
    fn around_corner(
        &self,
        i: usize,
        first: Direction,
        turn: fn(Direction) -> Direction,
    ) -> Option<Transition> {
        let u = self.known.get(&(i, first))?;
        self.known.get(&(u.square, turn(u.direction))).copied()
    }

    /// Three faces meet at every cube corner, so the two crossings around a
    /// corner determine the third.
    fn infer(&self, i: usize, d: Direction) -> Option<Transition> {
        if let Some(v) = self.around_corner(i, d.turn_left(), Direction::turn_right) {
            return Some(Transition {
                square: v.square,
                direction: v.direction.turn_left(),
            });
        }
        self.around_corner(i, d.turn_right(), Direction::turn_left)
            .map(|v| Transition {
                square: v.square,
                direction: v.direction.turn_right(),
            })
    }

    fn fold_pass(&mut self) -> bool {
        let mut changed = false;
        for i in 0..NUMBER_OF_SQUARES {
            for d in Direction::all() {
                if self.known.contains_key(&(i, d)) {
                    continue;
                }
                if let Some(t) = self.infer(i, d) {
                    self.identify((i, d), t);
                    changed = true;
                }
            }
        }
        changed
    }

    fn complete(&self) -> Result<TransitionTable> {
        let placeholder = Transition {
            square: 0,
            direction: Direction::Right,
        };
        let mut entries = [[placeholder; 4]; NUMBER_OF_SQUARES];

        for (i, row) in entries.iter_mut().enumerate() {
            for d in Direction::all() {
                row[d.index()] = *self.known.get(&(i, d)).ok_or_else(|| {
                    NetError::NotACubeNet(format!(
                        "edge {:?} of square {} does not fold onto anything",
                        d,
                        i + 1
                    ))
                })?;
            }
        }

        Ok(TransitionTable { entries })
    }
}

impl TransitionTable {
    /// Folds the six squares into a cube: direct neighbours first, then corner
    /// inference repeated until a full pass adds nothing.
    pub fn fold(layout: &SquareLayout) -> Result<TransitionTable> {
        let mut partial = PartialTable {
            known: HashMap::new(),
        };
        partial.fill_direct(layout.anchors());
        partial.check_neighbours()?;

        let mut passes = 0;
        while partial.fold_pass() {
            passes += 1;
            debug!(
                "fold pass {}: {} of {} edges known",
                passes,
                partial.known.len(),
                4 * NUMBER_OF_SQUARES
            );
        }

        let table = partial.complete()?;
        table.validate()?;
        Ok(table)
    }

    pub fn get(&self, square: usize, direction: Direction) -> Transition {
        self.entries[square][direction.index()]
    }

    /// The one square that shares no edge with `square`.
    pub fn opposite_square(&self, square: usize) -> Option<usize> {
        (0..NUMBER_OF_SQUARES)
            .find(|k| *k != square && self.entries[square].iter().all(|t| t.square != *k))
    }

    fn validate(&self) -> Result<()> {
        for i in 0..NUMBER_OF_SQUARES {
            for d in Direction::all() {
                let t = self.get(i, d);
                let back = self.get(t.square, t.direction.opposite());
                if back.square != i || back.direction != d.opposite() {
                    return Err(NetError::NotACubeNet(format!(
                        "crossing edge {:?} of square {} and back lands on square {}",
                        d,
                        i + 1,
                        back.square + 1
                    )));
                }
            }

            let neighbours = self.entries[i].iter().map(|t| t.square).unique().count();
            if neighbours != 4 || self.entries[i].iter().any(|t| t.square == i) {
                return Err(NetError::NotACubeNet(format!(
                    "square {} does not touch four distinct squares",
                    i + 1
                )));
            }
        }
        Ok(())
    }
}
