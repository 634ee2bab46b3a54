// Square pass.
//
// Each uncovered painted cell is tried as the top-left corner of an odd-sided
// square. The square grows one ring at a time (side 1, 3, 5, ...) and every
// growth step re-checks the whole candidate against the source image. The
// mask is only consulted to pick anchors, so a later square may overlap cells
// an earlier square already covered.
//
// Squares below the worthiness threshold are dropped: for those, lines are
// as cheap or cheaper.

use crate::core::{Command, CompressorConfig, Point, Rect};
use crate::perception::grid::{Grid, Mask};

pub struct SquareFinder<'a> {
    grid: &'a Grid,
    min_worthy_size: usize,
}

impl<'a> SquareFinder<'a> {
    pub fn new(grid: &'a Grid, config: &CompressorConfig) -> Self {
        let min_worthy_size = config.min_worthy_size(grid.height(), grid.width());
        Self { grid, min_worthy_size }
    }

    pub fn min_worthy_size(&self) -> usize {
        self.min_worthy_size
    }

    /// Smallest side an emitted square can have.
    pub fn min_side(&self) -> usize {
        2 * self.min_worthy_size + 1
    }

    /// Row-major scan emitting every worthy square and marking it in `mask`.
    pub fn find(&self, mask: &mut Mask) -> Vec<Command> {
        let mut commands = Vec::new();
        for row in 0..self.grid.height() {
            for col in 0..self.grid.width() {
                if !self.grid.is_painted(row, col) || mask.is_covered(row, col) {
                    continue;
                }
                if let Some(square) = self.try_square_from(row, col) {
                    tracing::trace!(row, col, side = square.rect().width, "square");
                    mask.cover_rect(&square.rect());
                    commands.push(square);
                }
            }
        }
        tracing::debug!(
            squares = commands.len(),
            min_worthy_size = self.min_worthy_size,
            covered = mask.covered_count(),
            "square pass done"
        );
        commands
    }

    /// Largest worthy square with `(row, col)` as its top-left corner.
    pub fn try_square_from(&self, row: usize, col: usize) -> Option<Command> {
        if !self.grid.is_painted(row, col) {
            return None;
        }

        let origin = Point::new(row, col);
        let mut best_size = 0;
        let mut current_size = 0;

        loop {
            let dim = 2 * current_size + 1;
            if row + dim > self.grid.height() || col + dim > self.grid.width() {
                break;
            }
            if !self.grid.all_painted(&Rect::new(origin, dim, dim)) {
                break;
            }
            best_size = current_size;
            current_size += 1;
        }

        if best_size < self.min_worthy_size {
            return None;
        }
        Some(Command::square(origin, 2 * best_size + 1))
    }
}
