// Paints commands back onto a blank canvas and compares the result with the
// source grid. Not part of a normal run; the CLI calls it under --verify.

use crate::core::{Command, PaintError, Result};
use crate::perception::grid::Grid;

pub type Canvas = Vec<Vec<bool>>;

/// Paint `commands` on a `height x width` canvas. Cells outside the canvas
/// are reported as [`PaintError::OutOfBounds`].
pub fn render(commands: &[Command], height: usize, width: usize) -> Result<Canvas> {
    let mut canvas = vec![vec![false; width]; height];
    for cmd in commands {
        for p in cmd.rect().cells() {
            if p.row >= height || p.col >= width {
                return Err(PaintError::OutOfBounds { row: p.row, col: p.col });
            }
            canvas[p.row][p.col] = true;
        }
    }
    Ok(canvas)
}

/// Check that `commands` paint exactly the painted cells of `grid`.
pub fn verify(grid: &Grid, commands: &[Command]) -> Result<()> {
    let canvas = render(commands, grid.height(), grid.width())?;
    for (row, cells) in canvas.iter().enumerate() {
        for (col, &drawn) in cells.iter().enumerate() {
            match (grid.is_painted(row, col), drawn) {
                (true, false) => return Err(PaintError::Uncovered { row, col }),
                (false, true) => return Err(PaintError::PaintsEmpty { row, col }),
                _ => {}
            }
        }
    }
    Ok(())
}
