use crate::error::{NetError, Result};

pub const MAX_BOARD_WIDTH: usize = 250;
pub const MAX_BOARD_HEIGHT: usize = 250;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Outside,
    Empty,
    Obstacle,
}

impl Cell {
    fn from_char(ch: char) -> Option<Cell> {
        match ch {
            ' ' => Some(Cell::Outside),
            '.' => Some(Cell::Empty),
            '#' => Some(Cell::Obstacle),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Cell::Outside => ' ',
            Cell::Empty => '.',
            Cell::Obstacle => '#',
        }
    }
}

/// Dense rectangular grid of cells; read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
    start_column: i32,
}

impl Board {
    /// Builds a board from row-major cells.
    pub fn new(width: i32, height: i32, cells: Vec<Cell>) -> Result<Board> {
        if width < 1 || height < 1 {
            return Err(NetError::MalformedInput(format!(
                "board must be at least 1x1, got {}x{}",
                width, height
            )));
        }
        let expected = (width as usize)
            .checked_mul(height as usize)
            .ok_or_else(|| {
                NetError::MalformedInput(format!("{}x{} board is too large", width, height))
            })?;
        if cells.len() != expected {
            return Err(NetError::MalformedInput(format!(
                "expected {} cells for a {}x{} board, got {}",
                expected,
                width,
                height,
                cells.len()
            )));
        }

        let start_column = cells[..width as usize]
            .iter()
            .position(|cell| *cell != Cell::Outside)
            .ok_or_else(|| NetError::MalformedInput("first line is empty".to_string()))?;

        Ok(Board {
            width,
            height,
            cells,
            start_column: start_column as i32,
        })
    }

    /// Parses rows of `' '`, `'.'` and `'#'`, stopping at the first blank line.
    /// Short rows are padded with outside cells.
    pub fn from_string(s: &str) -> Result<Board> {
        let mut rows: Vec<Vec<Cell>> = Vec::new();

        for (line_index, line) in s.split('\n').enumerate() {
            let line = line.strip_suffix('\r').unwrap_or(line);
            if line.is_empty() {
                break;
            }
            let line_number = line_index + 1;
            if rows.len() >= MAX_BOARD_HEIGHT {
                return Err(NetError::MalformedInput(format!(
                    "board is taller than {} rows",
                    MAX_BOARD_HEIGHT
                )));
            }
            if line.chars().count() > MAX_BOARD_WIDTH {
                return Err(NetError::MalformedInput(format!(
                    "line {} is longer than {} columns",
                    line_number, MAX_BOARD_WIDTH
                )));
            }
            let row = line
                .chars()
                .map(|ch| {
                    Cell::from_char(ch).ok_or_else(|| {
                        NetError::MalformedInput(format!(
                            "unexpected char {:?} on line {}",
                            ch, line_number
                        ))
                    })
                })
                .collect::<Result<Vec<Cell>>>()?;
            rows.push(row);
        }

        if rows.is_empty() {
            return Err(NetError::MalformedInput("board is empty".to_string()));
        }

        let width = rows.iter().map(|row| row.len()).max().unwrap_or(0);
        let height = rows.len();

        let mut cells = Vec::with_capacity(width * height);
        for mut row in rows {
            row.resize(width, Cell::Outside);
            cells.extend(row);
        }

        Board::new(width as i32, height as i32, cells)
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Column of the first non-outside cell on the top row.
    pub fn start_column(&self) -> i32 {
        self.start_column
    }

    pub fn in_bounds(&self, (col, row): (i32, i32)) -> bool {
        !(row < 0 || row >= self.height || col < 0 || col >= self.width)
    }

    pub fn at(&self, (col, row): (i32, i32)) -> Option<Cell> {
        if !self.in_bounds((col, row)) {
            return None;
        }
        Some(self.cells[row as usize * self.width as usize + col as usize])
    }

    /// True for cells on the board that belong to the net.
    pub fn is_open(&self, p: (i32, i32)) -> bool {
        matches!(self.at(p), Some(Cell::Empty) | Some(Cell::Obstacle))
    }

    /// Full-width rows, so rows of outside cells survive `from_string`.
    pub fn show(&self) -> String {
        let mut rv = String::new();
        for row in self.cells.chunks(self.width as usize) {
            rv.extend(row.iter().map(|cell| cell.to_char()));
            rv.push('\n');
        }
        rv
    }
}
