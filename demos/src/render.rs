//! Painting a search onto a [`Canvas`] and writing it to a terminal.

use std::io::{self, Write};

use crossterm::queue;
use crossterm::style::{Color as CtColor, Print, ResetColor, SetBackgroundColor};

use gridstar_core::{Cell, CellState, Grid};
use gridstar_paths::{Phase, Trace};

use crate::color::{Color, Palette, path_colors};

/// A painted grid cell: an ASCII glyph for plain output and a colour for
/// block output.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Tile {
    pub glyph: char,
    pub color: Color,
}

/// Row-major tiles with the grid's dimensions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Canvas {
    rows: i32,
    cols: i32,
    tiles: Vec<Tile>,
}

impl Canvas {
    fn new(rows: i32, cols: i32, fill: Tile) -> Self {
        let len = (rows.max(0) as usize) * (cols.max(0) as usize);
        Self {
            rows: rows.max(0),
            cols: cols.max(0),
            tiles: vec![fill; len],
        }
    }

    fn index(&self, c: Cell) -> Option<usize> {
        if c.row < 0 || c.col < 0 || c.row >= self.rows || c.col >= self.cols {
            return None;
        }
        Some((c.row * self.cols + c.col) as usize)
    }

    /// The tile at `c`, or `None` if out of bounds.
    pub fn at(&self, c: Cell) -> Option<Tile> {
        self.index(c).map(|i| self.tiles[i])
    }

    fn set(&mut self, c: Cell, tile: Tile) {
        if let Some(i) = self.index(c) {
            self.tiles[i] = tile;
        }
    }

    /// `(rows, cols)`.
    pub fn dimensions(&self) -> (i32, i32) {
        (self.rows, self.cols)
    }
}

/// Paint the grid, then replay the trace in order, then draw the path on top.
pub fn paint(
    grid: &Grid,
    start: Option<Cell>,
    goal: Option<Cell>,
    trace: &Trace,
    path: &[Cell],
    palette: &Palette,
) -> Canvas {
    let (rows, cols) = grid.dimensions();
    let mut canvas = Canvas::new(
        rows,
        cols,
        Tile {
            glyph: '.',
            color: palette.empty,
        },
    );

    for (c, state) in grid.iter() {
        if state == CellState::Obstacle {
            canvas.set(
                c,
                Tile {
                    glyph: '#',
                    color: palette.obstacle,
                },
            );
        }
    }
    if let Some(s) = start {
        canvas.set(
            s,
            Tile {
                glyph: 'S',
                color: palette.start,
            },
        );
    }
    if let Some(g) = goal {
        canvas.set(
            g,
            Tile {
                glyph: 'G',
                color: palette.goal,
            },
        );
    }

    for event in trace {
        let tile = match event.phase {
            Phase::AddedToFrontier => Tile {
                glyph: 'o',
                color: palette.frontier,
            },
            Phase::Finalized => Tile {
                glyph: 'x',
                color: palette.finalized,
            },
        };
        canvas.set(event.cell, tile);
    }

    let colors = path_colors(palette, path.len());
    let last = path.len().saturating_sub(1);
    for (step, (&c, &color)) in path.iter().zip(colors.iter()).enumerate() {
        let glyph = match step {
            0 => 'S',
            s if s == last => 'G',
            _ => '*',
        };
        canvas.set(c, Tile { glyph, color });
    }

    canvas
}

/// How [`write_canvas`] draws tiles.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum Mode {
    /// Two-column background-coloured blocks.
    #[default]
    Color,
    /// One glyph per cell, no escape sequences.
    Plain,
}

fn to_ct_color(c: Color) -> CtColor {
    CtColor::Rgb {
        r: c.r(),
        g: c.g(),
        b: c.b(),
    }
}

/// Write the canvas row by row, each row terminated by a newline.
pub fn write_canvas(out: &mut impl Write, canvas: &Canvas, mode: Mode) -> io::Result<()> {
    for row in 0..canvas.rows {
        for col in 0..canvas.cols {
            let Some(tile) = canvas.at(Cell::new(row, col)) else {
                continue;
            };
            match mode {
                Mode::Plain => queue!(out, Print(tile.glyph))?,
                Mode::Color => queue!(out, SetBackgroundColor(to_ct_color(tile.color)), Print("  "))?,
            }
        }
        if mode == Mode::Color {
            queue!(out, ResetColor)?;
        }
        queue!(out, Print('\n'))?;
    }
    out.flush()
}

/// Parse a `row,col` pair.
pub fn parse_cell(s: &str) -> Result<Cell, String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got \u{201c}{s}\u{201d}"))?;
    let row = row
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad row in \u{201c}{s}\u{201d}: {e}"))?;
    let col = col
        .trim()
        .parse::<i32>()
        .map_err(|e| format!("bad column in \u{201c}{s}\u{201d}: {e}"))?;
    Ok(Cell::new(row, col))
}
