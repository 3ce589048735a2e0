//! Grids described as text.
//!
//! A [`Layout`] parses ASCII art into a [`Grid`] plus optional start and goal
//! markers:
//!
//! ```text
//! S..#
//! .#..
//! ...G
//! ```
//!
//! `.` is passable, `#` is an obstacle, `S` and `G` are passable cells
//! marking the start and goal. Each marker may appear at most once.

use std::fmt;

use gridstar_core::{Cell, CellState, Grid};

/// Passable cell glyph.
pub const FLOOR: char = '.';
/// Obstacle glyph.
pub const WALL: char = '#';
/// Start marker glyph.
pub const START: char = 'S';
/// Goal marker glyph.
pub const GOAL: char = 'G';

/// A grid with optional start and goal cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub grid: Grid,
    pub start: Option<Cell>,
    pub goal: Option<Cell>,
}

impl Layout {
    /// Wrap an existing grid with no markers.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            start: None,
            goal: None,
        }
    }

    /// Parse a layout.
    ///
    /// Each line must have the same width. Leading/trailing whitespace is
    /// trimmed from the whole string but not from individual lines; a `\r`
    /// before a line break is ignored.
    pub fn parse(s: &str) -> Result<Self, LayoutError> {
        let s = s.trim();
        let lines: Vec<&str> = s.lines().collect();
        let cols = lines.first().map_or(0, |l| l.chars().count());
        let rows = if s.is_empty() { 0 } else { lines.len() };

        let mut grid = Grid::new(rows as i32, cols as i32);
        let mut start: Option<Cell> = None;
        let mut goal: Option<Cell> = None;

        for (row, line) in lines.iter().enumerate().take(rows) {
            if line.chars().count() != cols {
                return Err(LayoutError::InconsistentSize {
                    row: row as i32,
                    expected: cols,
                    found: line.chars().count(),
                });
            }
            for (col, ch) in line.chars().enumerate() {
                let pos = Cell::new(row as i32, col as i32);
                match ch {
                    FLOOR => {}
                    WALL => grid.set(pos, CellState::Obstacle),
                    START => place(&mut start, ch, pos)?,
                    GOAL => place(&mut goal, ch, pos)?,
                    _ => return Err(LayoutError::InvalidRune { ch, pos }),
                }
            }
        }

        Ok(Self { grid, start, goal })
    }

    /// Glyph for a cell, taking markers into account.
    pub fn glyph(&self, c: Cell) -> Option<char> {
        if self.start == Some(c) {
            return Some(START);
        }
        if self.goal == Some(c) {
            return Some(GOAL);
        }
        self.grid.at(c).map(|s| match s {
            CellState::Passable => FLOOR,
            CellState::Obstacle => WALL,
        })
    }
}

fn place(slot: &mut Option<Cell>, ch: char, pos: Cell) -> Result<(), LayoutError> {
    if let Some(first) = *slot {
        return Err(LayoutError::DuplicateMarker {
            ch,
            first,
            second: pos,
        });
    }
    *slot = Some(pos);
    Ok(())
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (rows, cols) = self.grid.dimensions();
        for row in 0..rows {
            if row > 0 {
                writeln!(f)?;
            }
            for col in 0..cols {
                let ch = self.glyph(Cell::new(row, col)).unwrap_or(FLOOR);
                write!(f, "{ch}")?;
            }
        }
        Ok(())
    }
}

impl std::str::FromStr for Layout {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Errors that can occur when parsing a layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// A line's width differs from the first line's.
    InconsistentSize {
        row: i32,
        expected: usize,
        found: usize,
    },
    /// A character other than `.`, `#`, `S` or `G` was found.
    InvalidRune { ch: char, pos: Cell },
    /// A start or goal marker appears twice.
    DuplicateMarker { ch: char, first: Cell, second: Cell },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InconsistentSize {
                row,
                expected,
                found,
            } => write!(
                f,
                "layout: row {row} has width {found}, expected {expected}"
            ),
            Self::InvalidRune { ch, pos } => {
                write!(f, "layout contains invalid rune \u{201c}{ch}\u{201d} at {pos}")
            }
            Self::DuplicateMarker { ch, first, second } => write!(
                f,
                "layout: marker \u{201c}{ch}\u{201d} at {second} already placed at {first}"
            ),
        }
    }
}

impl std::error::Error for LayoutError {}
