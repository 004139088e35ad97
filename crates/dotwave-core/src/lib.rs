//! Core types for the dotwave dot-matrix renderer.

mod driver;
mod layout;
mod time;

pub use driver::{Cadence, FRAME_INTERVAL_MS, Scheduler};
pub use layout::{
    DEFAULT_LOGICAL_HEIGHT, DEFAULT_LOGICAL_WIDTH, Grid, Surface, centered_anchor,
};
pub use time::{ClockSample, TimeSource};

use ratatui::style::Color;

/// Which draw strategy repaints the surface.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RenderMode {
    /// Ambient wave field, phase-driven, repainted every frame.
    #[default]
    Wave,
    /// Digit-matrix clock face, repainted once per wall-clock second.
    Clock,
}

impl RenderMode {
    /// Switch to the other mode.
    pub fn toggle(self) -> Self {
        match self {
            RenderMode::Wave => RenderMode::Clock,
            RenderMode::Clock => RenderMode::Wave,
        }
    }

    /// The repaint cadence this mode runs at.
    pub const fn cadence(self) -> Cadence {
        match self {
            RenderMode::Wave => Cadence::Continuous,
            RenderMode::Clock => Cadence::SecondAligned,
        }
    }
}

/// Color theme for the dot tint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ColorTheme {
    #[default]
    Ice,
    Cyan,
    Green,
    Magenta,
    Amber,
}

impl ColorTheme {
    /// Cycle to the next color theme.
    pub fn next(self) -> Self {
        match self {
            ColorTheme::Ice => ColorTheme::Cyan,
            ColorTheme::Cyan => ColorTheme::Green,
            ColorTheme::Green => ColorTheme::Magenta,
            ColorTheme::Magenta => ColorTheme::Amber,
            ColorTheme::Amber => ColorTheme::Ice,
        }
    }

    /// Base tint at full opacity.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            ColorTheme::Ice => (230, 242, 255),
            ColorTheme::Cyan => (80, 220, 230),
            ColorTheme::Green => (120, 230, 140),
            ColorTheme::Magenta => (225, 120, 225),
            ColorTheme::Amber => (240, 200, 110),
        }
    }

    /// Convert theme to a Ratatui color.
    pub const fn color(self) -> Color {
        let (r, g, b) = self.rgb();
        Color::Rgb(r, g, b)
    }
}

/// Caller-supplied render parameters, fixed for the lifetime of a mount.
///
/// `brightness` is expected around `[0, 1]` but is deliberately not clamped
/// here; out-of-range values produce proportionally brighter or dimmer
/// output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderConfig {
    /// Dot edge length in logical units.
    pub dot_size: f64,
    /// Space between adjacent dots in logical units.
    pub gap: f64,
    /// Output brightness multiplier.
    pub brightness: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            dot_size: 12.0,
            gap: 6.0,
            brightness: 1.0,
        }
    }
}

impl RenderConfig {
    /// Grid cell pitch. Never below one logical unit.
    pub fn spacing(&self) -> f64 {
        (self.dot_size + self.gap).max(1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = RenderConfig::default();
        assert_eq!(config.dot_size, 12.0);
        assert_eq!(config.gap, 6.0);
        assert_eq!(config.brightness, 1.0);
        assert_eq!(config.spacing(), 18.0);
    }

    #[test]
    fn test_spacing_floor() {
        let config = RenderConfig {
            dot_size: 0.25,
            gap: 0.0,
            brightness: 1.0,
        };
        assert_eq!(config.spacing(), 1.0);
    }

    #[test]
    fn test_mode_toggle_round_trips() {
        assert_eq!(RenderMode::Wave.toggle(), RenderMode::Clock);
        assert_eq!(RenderMode::Wave.toggle().toggle(), RenderMode::Wave);
    }

    #[test]
    fn test_mode_cadence() {
        assert_eq!(RenderMode::Wave.cadence(), Cadence::Continuous);
        assert_eq!(RenderMode::Clock.cadence(), Cadence::SecondAligned);
    }

    #[test]
    fn test_theme_cycle_returns_home() {
        let mut theme = ColorTheme::default();
        for _ in 0..5 {
            theme = theme.next();
        }
        assert_eq!(theme, ColorTheme::Ice);
    }
}
