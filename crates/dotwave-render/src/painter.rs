//! The painting seam between draw strategies and output targets.

use dotwave_core::ColorTheme;
use ratatui::{
    style::{Color, Style},
    text::{Line, Span},
};

use crate::chars::DOT_CHARS;

/// One rounded dot produced by a draw strategy, in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    /// Center x.
    pub x: f64,
    /// Center y.
    pub y: f64,
    /// Edge length of the rounded square.
    pub size: f64,
    /// Opacity, 0 to 1.
    pub alpha: f64,
}

/// Raster target for one full repaint.
///
/// Strategies hold no reference to the target between frames; a painter that
/// has nowhere to draw simply clips.
pub trait DotPainter {
    /// Erase the previous frame.
    fn clear(&mut self);

    /// Paint one dot. Dots outside the surface are clipped, not an error.
    fn fill_dot(&mut self, dot: Dot);
}

#[derive(Debug, Clone, Copy)]
struct Cell {
    coverage: f64,
    alpha: f64,
}

/// Paints dots into terminal cells, one grid cell per character.
///
/// Dot size maps to a denser glyph, alpha to a dimmer or brighter tint of
/// the theme color. Later dots overwrite earlier ones in the same cell, so
/// foreground layers win.
#[derive(Debug)]
pub struct CellPainter {
    width: u16,
    height: u16,
    spacing: f64,
    dot_size: f64,
    theme: ColorTheme,
    cells: Vec<Option<Cell>>,
}

impl CellPainter {
    pub fn new(width: u16, height: u16, spacing: f64, dot_size: f64, theme: ColorTheme) -> Self {
        Self {
            width,
            height,
            spacing: spacing.max(1.0),
            dot_size,
            theme,
            cells: vec![None; usize::from(width) * usize::from(height)],
        }
    }

    fn index(&self, col: usize, row: usize) -> usize {
        row * usize::from(self.width) + col
    }

    fn span_for(&self, cell: Option<Cell>) -> Span<'static> {
        let Some(cell) = cell else {
            return Span::raw(" ");
        };
        let last = DOT_CHARS.len() - 1;
        let idx = ((cell.coverage * last as f64).round() as usize).min(last);
        let alpha = cell.alpha.clamp(0.0, 1.0);
        let (r, g, b) = self.theme.rgb();
        let color = Color::Rgb(
            (f64::from(r) * alpha).round() as u8,
            (f64::from(g) * alpha).round() as u8,
            (f64::from(b) * alpha).round() as u8,
        );
        Span::styled(DOT_CHARS[idx].to_string(), Style::new().fg(color))
    }

    /// Consume the painter and produce one line per terminal row.
    pub fn into_lines(self) -> Vec<Line<'static>> {
        (0..usize::from(self.height))
            .map(|row| {
                let spans: Vec<Span> = (0..usize::from(self.width))
                    .map(|col| self.span_for(self.cells[self.index(col, row)]))
                    .collect();
                Line::from(spans)
            })
            .collect()
    }
}

impl DotPainter for CellPainter {
    fn clear(&mut self) {
        self.cells.fill(None);
    }

    fn fill_dot(&mut self, dot: Dot) {
        let col = (dot.x / self.spacing).floor();
        let row = (dot.y / self.spacing).floor();
        if col < 0.0 || row < 0.0 || col >= f64::from(self.width) || row >= f64::from(self.height)
        {
            return;
        }
        let coverage = if self.dot_size > 0.0 {
            (dot.size / self.dot_size).clamp(0.0, 1.0)
        } else {
            1.0
        };
        let idx = self.index(col as usize, row as usize);
        self.cells[idx] = Some(Cell {
            coverage,
            alpha: dot.alpha,
        });
    }
}
