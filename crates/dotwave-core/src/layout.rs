//! Surface sizing and grid layout.
//!
//! Every render recomputes the surface and grid from current container
//! dimensions, so a resize racing a pending tick can never leave stale
//! geometry behind.

/// Fallback logical width when the container reports no size.
pub const DEFAULT_LOGICAL_WIDTH: f64 = 520.0;
/// Fallback logical height when the container reports no size.
pub const DEFAULT_LOGICAL_HEIGHT: f64 = 260.0;

/// A 2D raster target with a logical size and a derived device-pixel size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    logical_width: f64,
    logical_height: f64,
    pixel_ratio: u32,
}

impl Surface {
    /// Size the surface from its container.
    ///
    /// Pure and idempotent: the same container dimensions always produce the
    /// same surface. A zero or negative container size falls back to
    /// 520x260 logical units so an unmounted component degrades gracefully.
    /// The pixel ratio is normalized to `max(1, floor(ratio))`.
    pub fn from_container(width: f64, height: f64, pixel_ratio: f64) -> Self {
        let ratio = if pixel_ratio.is_finite() && pixel_ratio >= 1.0 {
            pixel_ratio.floor() as u32
        } else {
            1
        };
        let (logical_width, logical_height) = if width > 0.0 && height > 0.0 {
            (width, height)
        } else {
            (DEFAULT_LOGICAL_WIDTH, DEFAULT_LOGICAL_HEIGHT)
        };
        Self {
            logical_width,
            logical_height,
            pixel_ratio: ratio,
        }
    }

    pub fn logical_width(&self) -> f64 {
        self.logical_width
    }

    pub fn logical_height(&self) -> f64 {
        self.logical_height
    }

    pub fn pixel_ratio(&self) -> u32 {
        self.pixel_ratio
    }

    /// Device-pixel width: `floor(logical x ratio)`, always integral.
    pub fn device_width(&self) -> u32 {
        (self.logical_width * f64::from(self.pixel_ratio)).floor() as u32
    }

    /// Device-pixel height: `floor(logical x ratio)`, always integral.
    pub fn device_height(&self) -> u32 {
        (self.logical_height * f64::from(self.pixel_ratio)).floor() as u32
    }
}

/// Cell grid derived from a surface and the configured spacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub cols: u32,
    pub rows: u32,
}

impl Grid {
    /// Fit a grid to the surface. Degenerate surfaces still produce a 1x1
    /// grid rather than an empty one.
    pub fn fit(surface: &Surface, spacing: f64) -> Self {
        let spacing = spacing.max(1.0);
        Self {
            cols: ((surface.logical_width() / spacing).floor() as u32).max(1),
            rows: ((surface.logical_height() / spacing).floor() as u32).max(1),
        }
    }

    /// Grid center in cell coordinates.
    pub fn center(&self) -> (f64, f64) {
        (f64::from(self.cols) / 2.0, f64::from(self.rows) / 2.0)
    }
}

/// Top-left anchor that centers a glyph string on the surface.
///
/// `total_cells` is the summed glyph widths plus inter-glyph gaps;
/// `glyph_rows` is the fixed bitmap height. The anchor is clamped to half a
/// spacing from each edge so content never renders off-canvas at very small
/// sizes.
pub fn centered_anchor(
    total_cells: usize,
    glyph_rows: usize,
    surface: &Surface,
    spacing: f64,
) -> (f64, f64) {
    let span_x = (total_cells.max(1) - 1) as f64 * spacing;
    let span_y = glyph_rows.saturating_sub(1) as f64 * spacing;
    let x = (spacing / 2.0).max((surface.logical_width() - span_x) / 2.0);
    let y = (spacing / 2.0).max((surface.logical_height() - span_y) / 2.0);
    (x, y)
}
