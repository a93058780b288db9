//! Text-length driven font sizing tables.
//!
//! Widgets that display variable-length text pick their font size (and for
//! badges, the text baseline) from an ordered table keyed by the number of
//! characters shown.

/// Font size and baseline for a single line of badge text.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextLayout {
    pub font_size: f64,
    pub y: f64,
}

impl TextLayout {
    pub const fn new(font_size: f64, y: f64) -> Self {
        Self { font_size, y }
    }
}

/// How a table row's length key matches the measured text length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthMatch {
    /// Row applies only when the length equals the key
    Exact,
    /// First row whose key is >= the length applies
    AtMost,
}

/// Ordered lookup from text length to a layout value.
#[derive(Debug)]
pub struct LengthTable<T: 'static> {
    matching: LengthMatch,
    rows: &'static [(usize, T)],
    fallback: T,
}

impl<T: Copy + 'static> LengthTable<T> {
    pub const fn exact(rows: &'static [(usize, T)], fallback: T) -> Self {
        Self {
            matching: LengthMatch::Exact,
            rows,
            fallback,
        }
    }

    pub const fn at_most(rows: &'static [(usize, T)], fallback: T) -> Self {
        Self {
            matching: LengthMatch::AtMost,
            rows,
            fallback,
        }
    }

    pub fn lookup(&self, len: usize) -> T {
        self.rows
            .iter()
            .find(|(key, _)| match self.matching {
                LengthMatch::Exact => *key == len,
                LengthMatch::AtMost => len <= *key,
            })
            .map(|(_, value)| *value)
            .unwrap_or(self.fallback)
    }

    pub fn rows(&self) -> &'static [(usize, T)] {
        self.rows
    }

    pub fn fallback(&self) -> T {
        self.fallback
    }
}

/// Countdown number font size by digit count.
pub static COUNTDOWN_FONT_SIZE: LengthTable<f64> =
    LengthTable::at_most(&[(3, 240.0), (4, 190.0), (5, 140.0)], 130.0);

/// Percentage badge font size by content length (before the `%` suffix).
pub static PERCENTAGE_FONT_SIZE: LengthTable<f64> = LengthTable::at_most(&[(2, 230.0)], 180.0);

/// Baseline of the percentage badge text; it does not vary with length.
pub const PERCENTAGE_TEXT_Y: f64 = 370.428571;

/// Large number badge layout by content length.
///
/// Content longer than five characters (or empty) keeps the length-5
/// baseline with a smaller font.
pub static NUMBER_LAYOUT: LengthTable<TextLayout> = LengthTable::exact(
    &[
        (1, TextLayout::new(315.857143, 400.714286)),
        (2, TextLayout::new(267.857143, 385.714286)),
        (3, TextLayout::new(206.857143, 360.714286)),
        (4, TextLayout::new(190.857143, 345.714286)),
        (5, TextLayout::new(146.857143, 330.714286)),
    ],
    TextLayout::new(130.0, 330.714286),
);

/// Compact number badge layout by content length.
pub static COMPACT_NUMBER_LAYOUT: LengthTable<TextLayout> = LengthTable::exact(
    &[
        (1, TextLayout::new(250.142857, 380.428571)),
        (2, TextLayout::new(220.142857, 360.428571)),
        (3, TextLayout::new(150.857143, 340.714286)),
    ],
    TextLayout::new(100.142857, 320.428571),
);

/// Length of displayed text in characters.
pub fn text_len(text: &str) -> usize {
    text.chars().count()
}
