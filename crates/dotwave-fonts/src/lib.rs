//! Dot-matrix glyph tables for the dotwave clock face.

use dotwave_core::ClockSample;

/// Rows in every glyph bitmap.
pub const GLYPH_ROWS: usize = 5;

/// Cells between adjacent glyphs.
pub const GLYPH_GAP: usize = 1;

/// 3x5 digit bitmaps ('█' marks a lit cell).
const DIGITS: [[&str; GLYPH_ROWS]; 10] = [
    // 0
    [
        "███",
        "█ █",
        "█ █",
        "█ █",
        "███",
    ],
    // 1
    [
        " █ ",
        "██ ",
        " █ ",
        " █ ",
        "███",
    ],
    // 2
    [
        "███",
        "  █",
        "███",
        "█  ",
        "███",
    ],
    // 3
    [
        "███",
        "  █",
        "███",
        "  █",
        "███",
    ],
    // 4
    [
        "█ █",
        "█ █",
        "███",
        "  █",
        "  █",
    ],
    // 5
    [
        "███",
        "█  ",
        "███",
        "  █",
        "███",
    ],
    // 6
    [
        "███",
        "█  ",
        "███",
        "█ █",
        "███",
    ],
    // 7
    [
        "███",
        "  █",
        "  █",
        "  █",
        "  █",
    ],
    // 8
    [
        "███",
        "█ █",
        "███",
        "█ █",
        "███",
    ],
    // 9
    [
        "███",
        "█ █",
        "███",
        "  █",
        "███",
    ],
];

/// Colon separator (1 cell wide).
const COLON: [&str; GLYPH_ROWS] = [" ", "█", " ", "█", " "];

/// Blank filler; unknown characters fall back to this.
const BLANK: [&str; GLYPH_ROWS] = ["   "; GLYPH_ROWS];

/// Look up the bitmap for a character. Unknown characters render as the
/// blank glyph rather than failing.
pub fn glyph(ch: char) -> &'static [&'static str; GLYPH_ROWS] {
    match ch {
        '0'..='9' => &DIGITS[ch as usize - '0' as usize],
        ':' => &COLON,
        _ => &BLANK,
    }
}

/// Cell width of a character's bitmap.
pub fn glyph_width(ch: char) -> usize {
    glyph(ch)[0].chars().count()
}

/// Whether the bitmap cell at `(row, col)` is lit.
pub fn lit(rows: &[&str; GLYPH_ROWS], row: usize, col: usize) -> bool {
    rows.get(row)
        .is_some_and(|r| r.chars().nth(col) == Some('█'))
}

/// Format a clock sample as zero-padded 24-hour `HH:MM:SS`.
pub fn format_time(sample: &ClockSample) -> String {
    format!(
        "{:02}:{:02}:{:02}",
        sample.hours, sample.minutes, sample.seconds
    )
}

/// Total cell width of a glyph string, inter-glyph gaps included.
pub fn measure(text: &str) -> usize {
    let glyphs = text.chars().count();
    let cells: usize = text.chars().map(glyph_width).sum();
    cells + GLYPH_GAP * glyphs.saturating_sub(1)
}
