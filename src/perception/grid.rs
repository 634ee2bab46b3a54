use std::path::Path;

use crate::core::{Cell, PaintError, Point, Rect, Result};

const PAINTED: char = '#';
const EMPTY: char = '.';

/// Immutable source image. Every row has exactly `width` cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<Cell>>,
    width: usize,
}

impl Grid {
    pub fn new(cells: Vec<Vec<Cell>>) -> Result<Self> {
        let width = cells.first().map(|r| r.len()).unwrap_or(0);
        for (row, r) in cells.iter().enumerate() {
            if r.len() != width {
                return Err(PaintError::RaggedRow { row, expected: width, found: r.len() });
            }
        }
        Ok(Self { cells, width })
    }

    pub fn height(&self) -> usize {
        self.cells.len()
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn at(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    pub fn is_painted(&self, row: usize, col: usize) -> bool {
        self.at(row, col).is_painted()
    }

    pub fn painted_count(&self) -> usize {
        self.cells.iter().flatten().filter(|c| c.is_painted()).count()
    }

    /// True when `rect` lies inside the grid and holds no empty cell.
    pub fn all_painted(&self, rect: &Rect) -> bool {
        if rect.origin.row + rect.height > self.height() || rect.origin.col + rect.width > self.width {
            return false;
        }
        if rect.area() == 0 {
            return true;
        }
        let end = rect.last();
        (rect.origin.row..=end.row).all(|r| {
            self.cells[r][rect.origin.col..=end.col].iter().all(|c| c.is_painted())
        })
    }
}

/// Coverage mask congruent to a [`Grid`]. Cells only ever go from
/// uncovered to covered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    covered: Vec<Vec<bool>>,
}

impl Mask {
    pub fn for_grid(grid: &Grid) -> Self {
        Self { covered: vec![vec![false; grid.width()]; grid.height()] }
    }

    pub fn height(&self) -> usize {
        self.covered.len()
    }

    pub fn width(&self) -> usize {
        self.covered.first().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_covered(&self, row: usize, col: usize) -> bool {
        self.covered[row][col]
    }

    pub fn cover(&mut self, p: Point) {
        self.covered[p.row][p.col] = true;
    }

    pub fn cover_rect(&mut self, rect: &Rect) {
        for p in rect.cells() {
            self.cover(p);
        }
    }

    pub fn covered_count(&self) -> usize {
        self.covered.iter().flatten().filter(|&&c| c).count()
    }

    pub fn congruent(&self, grid: &Grid) -> bool {
        self.height() == grid.height() && (grid.height() == 0 || self.width() == grid.width())
    }
}

/// Parsed picture file: the declared header and the grid body.
#[derive(Debug, Clone)]
pub struct Picture {
    pub declared_height: usize,
    pub declared_width: usize,
    pub grid: Grid,
}

/// Parse `<height> <width>` followed by rows of `#` and `.`.
/// The body's shape wins over the header; a mismatch is only logged.
pub fn parse_picture(text: &str) -> Result<Picture> {
    let mut lines = text.lines();
    let header = lines.next().ok_or(PaintError::MissingHeader)?;
    let (declared_height, declared_width) = parse_header(header)?;

    let mut rows: Vec<&str> = lines.map(|l| l.trim_end()).collect();
    while rows.last().is_some_and(|l| l.is_empty()) {
        rows.pop();
    }

    let mut cells = Vec::with_capacity(rows.len());
    for (row, line) in rows.iter().enumerate() {
        let parsed = line
            .chars()
            .enumerate()
            .map(|(col, ch)| match ch {
                PAINTED => Ok(Cell::Painted),
                EMPTY => Ok(Cell::Empty),
                found => Err(PaintError::UnknownCell { row, col, found }),
            })
            .collect::<Result<Vec<_>>>()?;
        cells.push(parsed);
    }

    let grid = Grid::new(cells)?;
    if grid.height() != declared_height || grid.width() != declared_width {
        tracing::warn!(
            declared_height,
            declared_width,
            height = grid.height(),
            width = grid.width(),
            "header does not match picture body"
        );
    }

    Ok(Picture { declared_height, declared_width, grid })
}

fn parse_header(line: &str) -> Result<(usize, usize)> {
    let bad = || PaintError::BadHeader(line.to_string());
    let mut parts = line.split_whitespace();
    let height = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
    let width = parts.next().and_then(|s| s.parse().ok()).ok_or_else(bad)?;
    if parts.next().is_some() {
        return Err(bad());
    }
    Ok((height, width))
}

pub fn load_picture(path: impl AsRef<Path>) -> anyhow::Result<Picture> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)?;
    let picture = parse_picture(&content)?;
    tracing::debug!(path = %path.display(), height = picture.grid.height(), width = picture.grid.width(), "loaded picture");
    Ok(picture)
}

/// Build a grid from `#`/`.` rows, no header line needed.
#[cfg(test)]
pub(crate) fn grid_from_rows(rows: &[&str]) -> Result<Grid> {
    let text = format!("{} {}\n{}", rows.len(), rows.first().map(|r| r.len()).unwrap_or(0), rows.join("\n"));
    parse_picture(&text).map(|p| p.grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_header_and_body() {
        let pic = parse_picture("2 3\n#.#\n..#\n").unwrap();
        assert_eq!((pic.declared_height, pic.declared_width), (2, 3));
        assert_eq!(pic.grid.height(), 2);
        assert_eq!(pic.grid.width(), 3);
        assert!(pic.grid.is_painted(0, 0));
        assert!(!pic.grid.is_painted(0, 1));
        assert_eq!(pic.grid.painted_count(), 3);
    }

    #[test]
    fn body_shape_wins_over_header() {
        let pic = parse_picture("9 9\n##\n##\n").unwrap();
        assert_eq!(pic.grid.height(), 2);
        assert_eq!(pic.grid.width(), 2);
    }

    #[test]
    fn trims_trailing_whitespace_and_blank_lines() {
        let pic = parse_picture("1 2\r\n#.  \r\n\n\n").unwrap();
        assert_eq!(pic.grid.height(), 1);
        assert_eq!(pic.grid.width(), 2);
    }

    #[test]
    fn header_only_is_empty_grid() {
        let pic = parse_picture("0 0\n").unwrap();
        assert_eq!(pic.grid.height(), 0);
        assert_eq!(pic.grid.width(), 0);
    }

    #[test]
    fn rejects_missing_header() {
        assert_eq!(parse_picture("").unwrap_err(), PaintError::MissingHeader);
    }

    #[test]
    fn rejects_bad_header() {
        assert!(matches!(parse_picture("x 3\n###"), Err(PaintError::BadHeader(_))));
        assert!(matches!(parse_picture("3\n###"), Err(PaintError::BadHeader(_))));
        assert!(matches!(parse_picture("-1 3\n###"), Err(PaintError::BadHeader(_))));
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = parse_picture("2 3\n###\n##\n").unwrap_err();
        assert_eq!(err, PaintError::RaggedRow { row: 1, expected: 3, found: 2 });
    }

    #[test]
    fn rejects_unknown_cells() {
        let err = parse_picture("1 3\n#x#\n").unwrap_err();
        assert_eq!(err, PaintError::UnknownCell { row: 0, col: 1, found: 'x' });
    }

    #[test]
    fn all_painted_checks_bounds() {
        let grid = grid_from_rows(&["##.", "##.", "..."]).unwrap();
        assert!(grid.all_painted(&Rect::new(Point::new(0, 0), 2, 2)));
        assert!(!grid.all_painted(&Rect::new(Point::new(0, 0), 3, 3)));
        assert!(!grid.all_painted(&Rect::new(Point::new(2, 2), 2, 2)));
    }

    #[test]
    fn mask_marks_monotonically() {
        let grid = grid_from_rows(&["###", "###"]).unwrap();
        let mut mask = Mask::for_grid(&grid);
        assert!(mask.congruent(&grid));
        assert_eq!(mask.covered_count(), 0);
        mask.cover_rect(&Rect::new(Point::new(0, 1), 2, 2));
        mask.cover(Point::new(0, 1));
        assert_eq!(mask.covered_count(), 4);
        assert!(mask.is_covered(1, 2));
        assert!(!mask.is_covered(1, 0));
    }

    #[test]
    fn load_picture_takes_a_path() {
        let path = std::env::temp_dir().join(format!("paint-cover-pic-{}.txt", std::process::id()));
        std::fs::write(&path, "1 2\n#.\n").unwrap();
        let pic = load_picture(&path).unwrap();
        assert_eq!(pic.grid.painted_count(), 1);
        std::fs::remove_file(&path).unwrap();
        assert!(load_picture(&path).is_err());
    }
}
