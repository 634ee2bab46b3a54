use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintError {
    MissingHeader,
    BadHeader(String),
    RaggedRow { row: usize, expected: usize, found: usize },
    UnknownCell { row: usize, col: usize, found: char },
    Uncovered { row: usize, col: usize },
    PaintsEmpty { row: usize, col: usize },
    OutOfBounds { row: usize, col: usize },
    BadConfig(String),
}

impl fmt::Display for PaintError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingHeader => write!(f, "missing `<height> <width>` header line"),
            Self::BadHeader(line) => write!(f, "malformed header: {:?}", line),
            Self::RaggedRow { row, expected, found } => {
                write!(f, "row {} has {} cells, expected {}", row, found, expected)
            }
            Self::UnknownCell { row, col, found } => {
                write!(f, "unexpected cell {:?} at ({}, {})", found, row, col)
            }
            Self::Uncovered { row, col } => write!(f, "painted cell ({}, {}) left uncovered", row, col),
            Self::PaintsEmpty { row, col } => write!(f, "empty cell ({}, {}) painted", row, col),
            Self::OutOfBounds { row, col } => write!(f, "command paints ({}, {}) outside the grid", row, col),
            Self::BadConfig(msg) => write!(f, "invalid config: {}", msg),
        }
    }
}

impl std::error::Error for PaintError {}

pub type Result<T> = std::result::Result<T, PaintError>;
