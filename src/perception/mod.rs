pub mod grid;

pub use grid::{load_picture, parse_picture, Grid, Mask, Picture};
