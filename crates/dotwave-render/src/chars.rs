//! Character constants for cell painting.

/// Dot glyphs by coverage, smallest to largest.
pub const DOT_CHARS: &[char] = &['·', '░', '▒', '▓', '█'];
