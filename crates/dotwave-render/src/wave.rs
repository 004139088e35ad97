//! Ambient wave-field draw strategy.

use dotwave_core::{ClockSample, Grid, RenderConfig, Surface};

use crate::painter::{Dot, DotPainter};

/// Cells below this intensity stay transparent.
const INTENSITY_FLOOR: f64 = 0.02;

/// Full clear-and-redraw of the phase-driven wave field.
///
/// Two superposed sine waves (radial and directional) with an exponential
/// radial falloff; the phase advances continuously with the clock sample so
/// the field feels clock-like without showing digits.
pub fn render(
    painter: &mut dyn DotPainter,
    surface: &Surface,
    config: &RenderConfig,
    sample: &ClockSample,
) {
    painter.clear();

    let spacing = config.spacing();
    let grid = Grid::fit(surface, spacing);
    let phase = sample.phase();
    let (cx, cy) = grid.center();

    for y in 0..=grid.rows {
        for x in 0..=grid.cols {
            let dx = f64::from(x) - cx;
            let dy = f64::from(y) - cy;
            let r = (dx * dx + dy * dy).sqrt();

            let wave1 = (r * 0.55 - phase * 2.2).sin();
            let wave2 = (dx * 0.6 + dy * 0.25 - phase * 1.4).sin();
            let v = 0.55 * wave1 + 0.45 * wave2;

            let falloff = (-r * 0.065).exp();
            let intensity = ((0.55 + 0.45 * v) * falloff * (0.9 + 0.4 * config.brightness))
                .clamp(0.0, 1.0);
            if intensity < INTENSITY_FLOOR {
                continue;
            }

            painter.fill_dot(Dot {
                x: f64::from(x) * spacing,
                y: f64::from(y) * spacing,
                size: config.dot_size * (0.65 + 0.45 * intensity),
                alpha: 0.10 + 0.85 * intensity,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingPainter;

    fn sample_at(millis: u32) -> ClockSample {
        ClockSample::new(10, 20, 30, millis, 1_754_000_000_000 + u64::from(millis))
    }

    #[test]
    fn test_wave_clears_then_paints() {
        let surface = Surface::from_container(520.0, 260.0, 1.0);
        let mut painter = RecordingPainter::default();
        render(
            &mut painter,
            &surface,
            &RenderConfig::default(),
            &sample_at(0),
        );
        assert_eq!(painter.clears, 1);
        assert!(!painter.dots.is_empty());
    }

    #[test]
    fn test_wave_is_deterministic_for_a_sample() {
        let surface = Surface::from_container(520.0, 260.0, 1.0);
        let config = RenderConfig::default();
        let mut a = RecordingPainter::default();
        let mut b = RecordingPainter::default();
        render(&mut a, &surface, &config, &sample_at(250));
        render(&mut b, &surface, &config, &sample_at(250));
        assert_eq!(a.dots, b.dots);
    }

    #[test]
    fn test_wave_respects_intensity_floor() {
        let surface = Surface::from_container(520.0, 260.0, 1.0);
        let mut painter = RecordingPainter::default();
        render(
            &mut painter,
            &surface,
            &RenderConfig::default(),
            &sample_at(0),
        );
        // alpha = 0.10 + 0.85 * intensity, so the floor shows up in alpha.
        let min_alpha = 0.10 + 0.85 * INTENSITY_FLOOR;
        for dot in &painter.dots {
            assert!(dot.alpha >= min_alpha - 1e-12);
            assert!(dot.alpha <= 0.95 + 1e-12);
        }
    }

    #[test]
    fn test_wave_dot_sizes_track_intensity() {
        let surface = Surface::from_container(520.0, 260.0, 1.0);
        let config = RenderConfig::default();
        let mut painter = RecordingPainter::default();
        render(&mut painter, &surface, &config, &sample_at(0));
        for dot in &painter.dots {
            assert!(dot.size >= config.dot_size * 0.65);
            assert!(dot.size <= config.dot_size * 1.10 + 1e-12);
        }
    }

    #[test]
    fn test_wave_moves_between_frames() {
        let surface = Surface::from_container(520.0, 260.0, 1.0);
        let config = RenderConfig::default();
        let mut a = RecordingPainter::default();
        let mut b = RecordingPainter::default();
        render(&mut a, &surface, &config, &sample_at(0));
        render(&mut b, &surface, &config, &sample_at(500));
        assert_ne!(a.dots, b.dots);
    }

    #[test]
    fn test_wave_handles_degenerate_surface() {
        // Falls back to the default logical size, so it still paints.
        let surface = Surface::from_container(0.0, 0.0, 1.0);
        let mut painter = RecordingPainter::default();
        render(
            &mut painter,
            &surface,
            &RenderConfig::default(),
            &sample_at(0),
        );
        assert!(!painter.dots.is_empty());
    }
}
