// Line pass.
//
// Covers whatever the square pass left behind. Every uncovered painted cell,
// in row-major order, starts a line along its longer run of uncovered painted
// cells (rightward or downward). Ties go vertical.
//
// `fill_by_columns` is the line-only sweep used when squares are off: anchors
// are visited column by column and runs read the image alone, so lines may
// cross cells an earlier line already drew.

use crate::core::{Command, Point};
use crate::perception::grid::{Grid, Mask};

pub struct LineFiller<'a> {
    grid: &'a Grid,
}

impl<'a> LineFiller<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid }
    }

    fn open(&self, mask: &Mask, row: usize, col: usize) -> bool {
        self.grid.is_painted(row, col) && !mask.is_covered(row, col)
    }

    pub fn horizontal_run(&self, mask: &Mask, row: usize, col: usize) -> usize {
        (col..self.grid.width())
            .take_while(|&c| self.open(mask, row, c))
            .count()
    }

    pub fn vertical_run(&self, mask: &Mask, row: usize, col: usize) -> usize {
        (row..self.grid.height())
            .take_while(|&r| self.open(mask, r, col))
            .count()
    }

    /// Painted cells rightward from `(row, col)`, ignoring coverage.
    pub fn painted_run_right(&self, row: usize, col: usize) -> usize {
        (col..self.grid.width())
            .take_while(|&c| self.grid.is_painted(row, c))
            .count()
    }

    /// Painted cells downward from `(row, col)`, ignoring coverage.
    pub fn painted_run_down(&self, row: usize, col: usize) -> usize {
        (row..self.grid.height())
            .take_while(|&r| self.grid.is_painted(r, col))
            .count()
    }

    /// Column-major sweep over the image alone; lines may overlap.
    pub fn fill_by_columns(&self, mask: &mut Mask) -> Vec<Command> {
        let mut commands = Vec::new();
        for col in 0..self.grid.width() {
            for row in 0..self.grid.height() {
                if !self.open(mask, row, col) {
                    continue;
                }
                let h = self.painted_run_right(row, col);
                let v = self.painted_run_down(row, col);
                let line = if h > v {
                    Command::hline(Point::new(row, col), h)
                } else {
                    Command::vline(Point::new(row, col), v)
                };
                mask.cover_rect(&line.rect());
                commands.push(line);
            }
        }
        tracing::debug!(lines = commands.len(), covered = mask.covered_count(), "column sweep done");
        commands
    }

    /// Emit lines until every painted cell in `mask` is covered.
    pub fn fill(&self, mask: &mut Mask) -> Vec<Command> {
        let mut commands = Vec::new();
        for row in 0..self.grid.height() {
            for col in 0..self.grid.width() {
                if !self.open(mask, row, col) {
                    continue;
                }
                let h = self.horizontal_run(mask, row, col);
                let v = self.vertical_run(mask, row, col);
                let line = if h > v {
                    Command::hline(Point::new(row, col), h)
                } else {
                    Command::vline(Point::new(row, col), v)
                };
                mask.cover_rect(&line.rect());
                commands.push(line);
            }
        }
        tracing::debug!(lines = commands.len(), covered = mask.covered_count(), "line pass done");
        commands
    }
}
