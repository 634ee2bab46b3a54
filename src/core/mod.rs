pub mod config;
pub mod error;
pub mod types;

pub use config::CompressorConfig;
pub use error::{PaintError, Result};
pub use types::{Cell, Command, Point, Rect};
