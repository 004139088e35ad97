//! Deterministic per-cell noise.

/// Trigonometric hash noise.
///
/// Same `(x, y, seed)` always yields the same value in `[0, 1)`; there is no
/// hidden state. The background field is therefore stable within a render
/// pass and changes only when the seed advances with the wall-clock second.
pub fn noise(x: f64, y: f64, seed: f64) -> f64 {
    let s = (x * 127.1 + y * 311.7 + seed * 0.013).sin() * 43758.5453;
    s - s.floor()
}
