//! Digit-matrix clock face draw strategy.

use dotwave_core::{ClockSample, Grid, RenderConfig, Surface, centered_anchor};
use dotwave_fonts::{GLYPH_GAP, GLYPH_ROWS, format_time, glyph, glyph_width, lit, measure};

use crate::noise::noise;
use crate::painter::{Dot, DotPainter};

/// Background cells below this intensity stay transparent.
const BACKGROUND_FLOOR: f64 = 0.03;

/// Background dots never exceed this alpha, so digits stay legible.
const BACKGROUND_ALPHA_CAP: f64 = 0.12;

/// Full clear-and-redraw of the clock face.
///
/// Layer one is a low-alpha noise field reseeded once per wall-clock second;
/// layer two stamps the `HH:MM:SS` glyph bitmaps centered on the surface.
pub fn render(
    painter: &mut dyn DotPainter,
    surface: &Surface,
    config: &RenderConfig,
    sample: &ClockSample,
) {
    painter.clear();

    let spacing = config.spacing();
    let grid = Grid::fit(surface, spacing);

    // Ambient static, stable within a second.
    let seed = sample.epoch_seconds() as f64;
    for y in 0..grid.rows {
        for x in 0..grid.cols {
            let n = noise(f64::from(x), f64::from(y), seed);
            let intensity = (0.02 + 0.10 * n) * (0.7 + 0.6 * config.brightness);
            if intensity < BACKGROUND_FLOOR {
                continue;
            }
            painter.fill_dot(Dot {
                x: spacing / 2.0 + f64::from(x) * spacing,
                y: spacing / 2.0 + f64::from(y) * spacing,
                size: config.dot_size * (0.30 + 0.20 * n),
                alpha: intensity.min(BACKGROUND_ALPHA_CAP),
            });
        }
    }

    // Foreground digits, centered with a one-cell gap between glyphs.
    let time = format_time(sample);
    let total_cells = measure(&time);
    let (anchor_x, anchor_y) = centered_anchor(total_cells, GLYPH_ROWS, surface, spacing);
    let alpha = 0.55 + 0.45 * config.brightness.clamp(0.0, 1.0);

    let mut cursor = 0usize;
    for ch in time.chars() {
        let rows = glyph(ch);
        let width = glyph_width(ch);
        for gy in 0..GLYPH_ROWS {
            for gx in 0..width {
                if !lit(rows, gy, gx) {
                    continue;
                }
                painter.fill_dot(Dot {
                    x: anchor_x + (cursor + gx) as f64 * spacing,
                    y: anchor_y + gy as f64 * spacing,
                    size: config.dot_size * 0.88,
                    alpha,
                });
            }
        }
        cursor += width + GLYPH_GAP;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingPainter;

    /// Lit cells per glyph of the rendered string.
    fn lit_cells(text: &str) -> usize {
        text.chars()
            .map(|ch| {
                let rows = glyph(ch);
                (0..GLYPH_ROWS)
                    .map(|gy| (0..glyph_width(ch)).filter(|&gx| lit(rows, gy, gx)).count())
                    .sum::<usize>()
            })
            .sum()
    }

    fn paint(sample: &ClockSample, config: &RenderConfig) -> RecordingPainter {
        let surface = Surface::from_container(520.0, 260.0, 1.0);
        let mut painter = RecordingPainter::default();
        render(&mut painter, &surface, config, sample);
        painter
    }

    #[test]
    fn test_foreground_stamps_every_lit_bit() {
        let sample = ClockSample::new(0, 0, 0, 0, 1_754_000_000_000);
        let painter = paint(&sample, &RenderConfig::default());
        let foreground = painter.dots.iter().filter(|d| d.alpha > 0.5).count();
        assert_eq!(foreground, lit_cells("00:00:00"));
    }

    #[test]
    fn test_foreground_alpha_independent_of_noise() {
        let sample = ClockSample::new(9, 5, 3, 0, 1_754_000_000_000);
        let painter = paint(&sample, &RenderConfig::default());
        for dot in painter.dots.iter().filter(|d| d.alpha > 0.5) {
            assert_eq!(dot.alpha, 1.0);
            assert_eq!(dot.size, 12.0 * 0.88);
        }
    }

    #[test]
    fn test_background_alpha_capped() {
        let sample = ClockSample::new(23, 59, 59, 0, 1_754_000_000_000);
        let painter = paint(&sample, &RenderConfig::default());
        for dot in painter.dots.iter().filter(|d| d.alpha <= 0.5) {
            assert!(dot.alpha <= BACKGROUND_ALPHA_CAP + 1e-12);
        }
    }

    #[test]
    fn test_background_changes_with_the_second() {
        let config = RenderConfig::default();
        let a = paint(
            &ClockSample::new(8, 0, 0, 0, 1_754_000_000_000),
            &config,
        );
        let b = paint(
            &ClockSample::new(8, 0, 1, 0, 1_754_000_001_000),
            &config,
        );
        let bg = |p: &RecordingPainter| {
            p.dots
                .iter()
                .filter(|d| d.alpha <= 0.5)
                .copied()
                .collect::<Vec<_>>()
        };
        assert_ne!(bg(&a), bg(&b));
    }

    #[test]
    fn test_background_stable_within_a_second() {
        let config = RenderConfig::default();
        let a = paint(&ClockSample::new(8, 0, 0, 100, 1_754_000_000_100), &config);
        let b = paint(&ClockSample::new(8, 0, 0, 900, 1_754_000_000_900), &config);
        assert_eq!(a.dots, b.dots);
    }

    #[test]
    fn test_digits_clamped_onto_tiny_surface() {
        let surface = Surface::from_container(40.0, 20.0, 1.0);
        let config = RenderConfig::default();
        let sample = ClockSample::new(11, 22, 33, 0, 1_754_000_000_000);
        let mut painter = RecordingPainter::default();
        render(&mut painter, &surface, &config, &sample);
        let spacing = config.spacing();
        for dot in painter.dots.iter().filter(|d| d.alpha > 0.5) {
            assert!(dot.x >= spacing / 2.0);
            assert!(dot.y >= spacing / 2.0);
        }
    }

    #[test]
    fn test_zero_brightness_still_shows_digits() {
        let sample = ClockSample::new(1, 2, 3, 0, 1_754_000_000_000);
        let config = RenderConfig {
            brightness: 0.0,
            ..RenderConfig::default()
        };
        let painter = paint(&sample, &config);
        let foreground = painter.dots.iter().filter(|d| d.alpha >= 0.55).count();
        assert_eq!(foreground, lit_cells("01:02:03"));
    }
}
