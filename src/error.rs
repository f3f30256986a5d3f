use thiserror::Error;

/// Everything that can go wrong between raw puzzle text and the two passwords.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum NetError {
    #[error("malformed input: {0}")]
    MalformedInput(String),
    /// No six-square tiling exists, or the squares do not fold into a cube.
    #[error("not a cube net: {0}")]
    NotACubeNet(String),
    #[error("invalid instruction: {0}")]
    InvalidInstruction(String),
    /// A step landed somewhere the walker can never stand.
    #[error("walker left the board at column {column}, row {row}")]
    OffBoard { column: i32, row: i32 },
}

pub type Result<T> = std::result::Result<T, NetError>;
