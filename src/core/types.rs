use std::fmt;

use serde::{Deserialize, Serialize};

/// State of a single raster cell, decided once when the picture is parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Painted,
    Empty,
}

impl Cell {
    pub fn is_painted(self) -> bool {
        self == Cell::Painted
    }
}

/// Row-first coordinate: `row` grows downward, `col` grows rightward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub row: usize,
    pub col: usize,
}

impl Point {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub width: usize,
    pub height: usize,
}

impl Rect {
    pub fn new(origin: Point, width: usize, height: usize) -> Self {
        Self { origin, width, height }
    }

    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Bottom-right cell, inclusive. Meaningless for an empty rect.
    pub fn last(&self) -> Point {
        Point::new(
            self.origin.row + self.height.saturating_sub(1),
            self.origin.col + self.width.saturating_sub(1),
        )
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Point> + '_ {
        let Point { row, col } = self.origin;
        (row..row + self.height)
            .flat_map(move |r| (col..col + self.width).map(move |c| Point::new(r, c)))
    }
}

/// One emitted drawing primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Command {
    HLine { origin: Point, len: usize },
    VLine { origin: Point, len: usize },
    Square { origin: Point, side: usize },
}

impl Command {
    pub fn hline(origin: Point, len: usize) -> Self {
        Command::HLine { origin, len }
    }

    pub fn vline(origin: Point, len: usize) -> Self {
        Command::VLine { origin, len }
    }

    pub fn square(origin: Point, side: usize) -> Self {
        Command::Square { origin, side }
    }

    pub fn rect(&self) -> Rect {
        match *self {
            Command::HLine { origin, len } => Rect::new(origin, len, 1),
            Command::VLine { origin, len } => Rect::new(origin, 1, len),
            Command::Square { origin, side } => Rect::new(origin, side, side),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Command::HLine { .. } => "hline",
            Command::VLine { .. } => "vline",
            Command::Square { .. } => "square",
        }
    }
}

/// Hash Code painting format. Squares are written by center and half-extent,
/// lines by their inclusive end cells.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Command::Square { origin, side } => {
                let half = side / 2;
                let center = Point::new(origin.row + half, origin.col + half);
                write!(f, "PAINT_SQUARE {} {}", center, half)
            }
            Command::HLine { .. } | Command::VLine { .. } => {
                let rect = self.rect();
                write!(f, "PAINT_LINE {} {}", rect.origin, rect.last())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_rect_shapes() {
        let p = Point::new(2, 3);
        assert_eq!(Command::hline(p, 4).rect(), Rect::new(p, 4, 1));
        assert_eq!(Command::vline(p, 4).rect(), Rect::new(p, 1, 4));
        assert_eq!(Command::square(p, 5).rect(), Rect::new(p, 5, 5));
    }

    #[test]
    fn rect_cells_row_major() {
        let rect = Rect::new(Point::new(1, 1), 2, 2);
        let cells: Vec<_> = rect.cells().collect();
        assert_eq!(cells, vec![
            Point::new(1, 1), Point::new(1, 2),
            Point::new(2, 1), Point::new(2, 2),
        ]);
        assert_eq!(rect.area(), 4);
    }

    #[test]
    fn square_text_uses_center() {
        let cmd = Command::square(Point::new(0, 0), 5);
        assert_eq!(cmd.to_string(), "PAINT_SQUARE 2 2 2");
        let unit = Command::square(Point::new(4, 7), 1);
        assert_eq!(unit.to_string(), "PAINT_SQUARE 4 7 0");
    }

    #[test]
    fn line_text_is_inclusive() {
        assert_eq!(Command::hline(Point::new(3, 1), 6).to_string(), "PAINT_LINE 3 1 3 6");
        assert_eq!(Command::vline(Point::new(0, 2), 3).to_string(), "PAINT_LINE 0 2 2 2");
        assert_eq!(Command::vline(Point::new(5, 5), 1).to_string(), "PAINT_LINE 5 5 5 5");
    }

    #[test]
    fn json_tags_match_kind() {
        let cmds = [
            Command::hline(Point::new(0, 0), 2),
            Command::vline(Point::new(0, 0), 2),
            Command::square(Point::new(0, 0), 3),
        ];
        for cmd in cmds {
            let value = serde_json::to_value(cmd).unwrap();
            assert_eq!(value["kind"], cmd.kind());
            let back: Command = serde_json::from_value(value).unwrap();
            assert_eq!(back, cmd);
        }
    }

    #[test]
    fn command_json_is_tagged() {
        let json = serde_json::to_string(&Command::hline(Point::new(1, 2), 3)).unwrap();
        assert_eq!(json, r#"{"kind":"hline","origin":{"row":1,"col":2},"len":3}"#);
    }
}
