/// Heading of the walker, and also the name of a square's edge.
///
/// The order matters: it is the password's facing value, and turning right
/// is `+1 mod 4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Right,
    Down,
    Left,
    Up,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    Left,
    Right,
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [
            Direction::Right,
            Direction::Down,
            Direction::Left,
            Direction::Up,
        ]
    }

    pub fn from_i32(n: i32) -> Direction {
        match n.rem_euclid(4) {
            0 => Direction::Right,
            1 => Direction::Down,
            2 => Direction::Left,
            _ => Direction::Up,
        }
    }

    pub fn to_i32(self) -> i32 {
        match self {
            Direction::Right => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Up => 3,
        }
    }

    pub fn index(self) -> usize {
        self.to_i32() as usize
    }

    pub fn turn_right(self) -> Direction {
        Direction::from_i32(self.to_i32() + 1)
    }

    pub fn turn_left(self) -> Direction {
        Direction::from_i32(self.to_i32() - 1)
    }

    pub fn opposite(self) -> Direction {
        Direction::from_i32(self.to_i32() + 2)
    }

    pub fn rotate(self, rotation: Rotation) -> Direction {
        match rotation {
            Rotation::Left => self.turn_left(),
            Rotation::Right => self.turn_right(),
        }
    }

    pub fn dx(self) -> i32 {
        match self {
            Direction::Right => 1,
            Direction::Left => -1,
            _ => 0,
        }
    }

    pub fn dy(self) -> i32 {
        match self {
            Direction::Up => -1,
            Direction::Down => 1,
            _ => 0,
        }
    }

    pub fn step(self, origin: (i32, i32)) -> (i32, i32) {
        (origin.0 + self.dx(), origin.1 + self.dy())
    }
}
