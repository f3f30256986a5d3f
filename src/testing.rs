use crate::board::{Board, Cell};

pub const EXAMPLE_BOARD: &str = concat!(
    "        ...#\n",
    "        .#..\n",
    "        #...\n",
    "        ....\n",
    "...#.......#\n",
    "........#...\n",
    "..#....#....\n",
    "..........#.\n",
    "        ...#....\n",
    "        .....#..\n",
    "        .#......\n",
    "        ......#.\n",
);

pub const EXAMPLE_PATH: &str = "10R5L5R10L4R5L5";

/// Every cube net up to rotation and reflection, one `#` per square.
pub const ELEVEN_NETS: [&[&str]; 11] = [
    &["#", "####", "#"],
    &["#", "####", " #"],
    &["#", "####", "  #"],
    &["#", "####", "   #"],
    &[" #", "####", " #"],
    &[" #", "####", "  #"],
    &["##", " ###", " #"],
    &["##", " ###", "  #"],
    &["##", " ###", "   #"],
    &["##", " ##", "  ##"],
    &["###", "  ###"],
];

/// Blows a pattern of squares up into an obstacle-free board.
pub fn net_board(pattern: &[&str], size: i32) -> Board {
    let squares_wide = pattern.iter().map(|row| row.len()).max().unwrap() as i32;
    let width = squares_wide * size;
    let height = pattern.len() as i32 * size;

    let mut cells = Vec::new();
    for y in 0..height {
        let row = pattern[(y / size) as usize].as_bytes();
        for x in 0..width {
            cells.push(match row.get((x / size) as usize) {
                Some(b'#') => Cell::Empty,
                _ => Cell::Outside,
            });
        }
    }

    Board::new(width, height, cells).unwrap()
}
