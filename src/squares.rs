use itertools::iproduct;
use log::{debug, trace};

use crate::board::Board;
use crate::error::{NetError, Result};

pub const NUMBER_OF_SQUARES: usize = 6;

const MAX_SQUARE_SIZE: i32 = 50;

/// Where the six squares of a cube net sit on the board.
///
/// Anchors are measured in units of the square edge length, so square `i`
/// covers columns `anchors[i].0 * size .. (anchors[i].0 + 1) * size` and the
/// matching rows. Square 0 is always the one holding the start cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SquareLayout {
    size: i32,
    anchors: [(i32, i32); NUMBER_OF_SQUARES],
}

impl SquareLayout {
    /// Tries every edge length from 1 upwards and keeps the first one whose six
    /// squares cover exactly the non-outside cells of the board.
    pub fn detect(board: &Board) -> Result<SquareLayout> {
        let limit = max_candidate_size(board);

        for size in 1..=limit {
            match find_squares(board, size) {
                Some(anchors) => {
                    debug!("square size {}, anchors {:?}", size, anchors);
                    return Ok(SquareLayout { size, anchors });
                }
                None => trace!("square size {} rejected", size),
            }
        }

        Err(NetError::NotACubeNet(format!(
            "no square size up to {} tiles the {}x{} board with six squares",
            limit,
            board.width(),
            board.height()
        )))
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn anchors(&self) -> &[(i32, i32); NUMBER_OF_SQUARES] {
        &self.anchors
    }

    /// Board coordinates of the top-left cell of square `i`.
    pub fn origin(&self, i: usize) -> (i32, i32) {
        let (x, y) = self.anchors[i];
        (x * self.size, y * self.size)
    }

    pub fn square_at(&self, (col, row): (i32, i32)) -> Option<usize> {
        if col < 0 || row < 0 {
            return None;
        }
        let p = (col / self.size, row / self.size);
        self.anchors.iter().position(|anchor| *anchor == p)
    }
}

fn max_candidate_size(board: &Board) -> i32 {
    let limit = MAX_SQUARE_SIZE.min(board.height() / 2);
    // Capping at a start column of 0 would reject valid nets whose top
    // square sits on the left border, such as the 1-4-1 cross.
    if board.start_column() > 0 {
        limit.min(board.start_column())
    } else {
        limit
    }
}

fn find_squares(board: &Board, size: i32) -> Option<[(i32, i32); NUMBER_OF_SQUARES]> {
    let start = board.start_column();
    if start % size != 0 || board.width() % size != 0 || board.height() % size != 0 {
        return None;
    }

    let mut corners = [(start, 0); NUMBER_OF_SQUARES];
    let mut found = 1;

    for y in (0..board.height()).step_by(size as usize) {
        let first = if y == 0 { start + size } else { 0 };
        for x in (first..board.width()).step_by(size as usize) {
            if block_is_outside(board, (x, y), size) {
                continue;
            }
            corners[found] = (x, y);
            found += 1;
            if found == NUMBER_OF_SQUARES {
                if !covers_exactly(board, &corners, size) {
                    return None;
                }
                return Some(corners.map(|(x, y)| (x / size, y / size)));
            }
        }
    }

    None
}

fn block_is_outside(board: &Board, (x0, y0): (i32, i32), size: i32) -> bool {
    iproduct!(y0..y0 + size, x0..x0 + size).all(|(y, x)| !board.is_open((x, y)))
}

fn covers_exactly(board: &Board, corners: &[(i32, i32); NUMBER_OF_SQUARES], size: i32) -> bool {
    let in_some_square = |x: i32, y: i32| {
        corners
            .iter()
            .any(|&(cx, cy)| cx <= x && x < cx + size && cy <= y && y < cy + size)
    };

    iproduct!(0..board.height(), 0..board.width())
        .all(|(y, x)| in_some_square(x, y) == board.is_open((x, y)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{net_board, EXAMPLE_BOARD};
    use proptest::prelude::*;

    #[test]
    fn detects_example_layout() {
        let board = Board::from_string(EXAMPLE_BOARD).unwrap();
        let layout = SquareLayout::detect(&board).unwrap();
        assert_eq!(layout.size(), 4);
        assert_eq!(
            layout.anchors(),
            &[(2, 0), (0, 1), (1, 1), (2, 1), (2, 2), (3, 2)]
        );
        assert_eq!(layout.origin(5), (12, 8));
        assert_eq!(layout.square_at((8, 0)), Some(0));
        assert_eq!(layout.square_at((15, 11)), Some(5));
        assert_eq!(layout.square_at((0, 0)), None);
        assert_eq!(layout.square_at((-1, 4)), None);
    }

    #[test]
    fn smaller_sizes_are_rejected_by_coverage() {
        // Every size dividing 6 is tried before 6 itself.
        let board = net_board(&[" #", "###", " #", " #"], 6);
        let layout = SquareLayout::detect(&board).unwrap();
        assert_eq!(layout.size(), 6);
        assert_eq!(
            layout.anchors(),
            &[(1, 0), (0, 1), (1, 1), (2, 1), (1, 2), (1, 3)]
        );
    }

    #[test]
    fn accepts_net_touching_left_border() {
        let board = net_board(&["#", "####", "#"], 3);
        let layout = SquareLayout::detect(&board).unwrap();
        assert_eq!(layout.size(), 3);
        assert_eq!(layout.anchors()[0], (0, 0));
    }

    #[test]
    fn wrong_square_counts_are_not_cube_nets() {
        let five = net_board(&[" #", "###", " #"], 4);
        assert!(matches!(
            SquareLayout::detect(&five),
            Err(NetError::NotACubeNet(_))
        ));

        let seven = net_board(&[" #", "###", " #", " #", " #"], 4);
        assert!(matches!(
            SquareLayout::detect(&seven),
            Err(NetError::NotACubeNet(_))
        ));
    }

    #[test]
    fn hole_inside_a_square_is_rejected() {
        let text = net_board(&[" #", "###", " #", " #"], 4).show();
        let mut lines: Vec<String> = text.lines().map(|l| l.to_string()).collect();
        lines[5].replace_range(5..6, " ");
        let board = Board::from_string(&lines.join("\n")).unwrap();
        assert!(SquareLayout::detect(&board).is_err());
    }

    proptest! {
        #[test]
        fn detection_is_idempotent(size in 1i32..12) {
            let board = net_board(&["  #", "###", "  ##"], size);
            let a = SquareLayout::detect(&board).unwrap();
            let b = SquareLayout::detect(&board).unwrap();
            prop_assert_eq!(a.size(), size);
            prop_assert_eq!(a, b);
        }
    }
}
