pub mod lines;
pub mod squares;

pub use lines::LineFiller;
pub use squares::SquareFinder;
