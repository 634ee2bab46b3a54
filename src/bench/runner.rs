// Compression driver.
// Runs the square pass and then the line pass over one shared mask and
// collects a per-run report. With squares off, a column sweep of
// overlapping lines does all the work instead.

use std::time::Instant;

use rustc_hash::FxHashMap;

use crate::core::{Command, CompressorConfig};
use crate::perception::grid::{Grid, Mask};
use crate::synthesis::{LineFiller, SquareFinder};

#[derive(Debug, Clone)]
pub struct Compression {
    /// Squares first, then lines, each in scan order.
    pub commands: Vec<Command>,
    pub report: CompressionReport,
}

#[derive(Debug, Clone)]
pub struct CompressionReport {
    pub height: usize,
    pub width: usize,
    pub painted: usize,
    pub min_worthy_size: usize,
    pub total: usize,
    pub by_kind: Vec<(&'static str, usize)>,
    /// Cells drawn more than once across all commands.
    pub overlap: usize,
    pub elapsed_ms: u64,
}

/// Cover every painted cell of `grid` with squares and lines.
pub fn compress(grid: &Grid, config: &CompressorConfig) -> Compression {
    let start = Instant::now();
    let mut mask = Mask::for_grid(grid);

    let finder = SquareFinder::new(grid, config);
    let filler = LineFiller::new(grid);
    let commands = if config.squares {
        let mut commands = finder.find(&mut mask);
        commands.extend(filler.fill(&mut mask));
        commands
    } else {
        filler.fill_by_columns(&mut mask)
    };
    debug_assert!(mask.congruent(grid));
    debug_assert_eq!(mask.covered_count(), grid.painted_count());

    let report = CompressionReport::new(grid, &commands, finder.min_worthy_size(), start);
    Compression { commands, report }
}

impl CompressionReport {
    fn new(grid: &Grid, commands: &[Command], min_worthy_size: usize, start: Instant) -> Self {
        let mut counts: FxHashMap<&'static str, usize> = Default::default();
        for cmd in commands {
            *counts.entry(cmd.kind()).or_default() += 1;
        }
        let mut by_kind: Vec<(&'static str, usize)> = counts.into_iter().collect();
        by_kind.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));

        let painted = grid.painted_count();
        let drawn: usize = commands.iter().map(|c| c.rect().area()).sum();

        Self {
            height: grid.height(),
            width: grid.width(),
            painted,
            min_worthy_size,
            total: commands.len(),
            by_kind,
            overlap: drawn.saturating_sub(painted),
            elapsed_ms: start.elapsed().as_millis() as u64,
        }
    }

    pub fn count(&self, kind: &str) -> usize {
        self.by_kind.iter().find(|(k, _)| *k == kind).map(|(_, n)| *n).unwrap_or(0)
    }

    pub fn log_summary(&self) {
        tracing::info!(
            height = self.height,
            width = self.width,
            painted = self.painted,
            min_worthy_size = self.min_worthy_size,
            commands = self.total,
            overlap = self.overlap,
            elapsed_ms = self.elapsed_ms,
            "compression done"
        );
        for (kind, count) in &self.by_kind {
            tracing::info!(kind, count, "by kind");
        }
    }
}
