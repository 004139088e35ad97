//! Frame rendering for the dotwave dot-matrix renderer.
//!
//! Two state-free draw strategies share one painter seam: the ambient wave
//! field repaints every frame, the digit-matrix clock face repaints once per
//! wall-clock second. Neither retains anything between calls; every frame
//! recomputes its grid from the current surface.

mod chars;
mod clock_face;
mod noise;
mod painter;
mod wave;

pub use noise::noise;
pub use painter::{CellPainter, Dot, DotPainter};

use dotwave_core::{ClockSample, RenderConfig, RenderMode, Surface};

/// Repaint the whole surface with the strategy for `mode`.
pub fn render_frame(
    mode: RenderMode,
    painter: &mut dyn DotPainter,
    surface: &Surface,
    config: &RenderConfig,
    sample: &ClockSample,
) {
    match mode {
        RenderMode::Wave => wave::render(painter, surface, config, sample),
        RenderMode::Clock => clock_face::render(painter, surface, config, sample),
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use crate::painter::{Dot, DotPainter};

    /// Captures dots instead of painting them.
    #[derive(Debug, Default)]
    pub struct RecordingPainter {
        pub dots: Vec<Dot>,
        pub clears: usize,
    }

    impl DotPainter for RecordingPainter {
        fn clear(&mut self) {
            self.clears += 1;
            self.dots.clear();
        }

        fn fill_dot(&mut self, dot: Dot) {
            self.dots.push(dot);
        }
    }
}
