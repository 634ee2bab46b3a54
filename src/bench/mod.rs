pub mod render;
pub mod runner;

pub use render::{render, verify};
pub use runner::{compress, Compression, CompressionReport};
