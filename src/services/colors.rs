//! Sequential color scales for chart series.
//!
//! A scale maps `t` in `[0, 1]` to a color, light to dark, by linear
//! interpolation between fixed stops. Nothing here knows about a charting
//! library; callers get CSS `rgb(...)` strings.

use crate::models::TransactionType;

const GREENS: [(u8, u8, u8); 9] = [
    (0xf7, 0xfc, 0xf5),
    (0xe5, 0xf5, 0xe0),
    (0xc7, 0xe9, 0xc0),
    (0xa1, 0xd9, 0x9b),
    (0x74, 0xc4, 0x76),
    (0x41, 0xab, 0x5d),
    (0x23, 0x8b, 0x45),
    (0x00, 0x6d, 0x2c),
    (0x00, 0x44, 0x1b),
];

const REDS: [(u8, u8, u8); 9] = [
    (0xff, 0xf5, 0xf0),
    (0xfe, 0xe0, 0xd2),
    (0xfc, 0xbb, 0xa1),
    (0xfc, 0x92, 0x72),
    (0xfb, 0x6a, 0x4a),
    (0xef, 0x3b, 0x2c),
    (0xcb, 0x18, 0x1d),
    (0xa5, 0x0f, 0x15),
    (0x67, 0x00, 0x0d),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorScheme {
    Greens,
    Reds,
}

impl ColorScheme {
    /// Income charts are green, expense charts red.
    pub fn for_type(kind: TransactionType) -> Self {
        match kind {
            TransactionType::Income => Self::Greens,
            TransactionType::Expense => Self::Reds,
        }
    }

    fn stops(&self) -> &'static [(u8, u8, u8)] {
        match self {
            Self::Greens => &GREENS,
            Self::Reds => &REDS,
        }
    }

    /// Color at `t`; values outside `[0, 1]` (and NaN) are clamped.
    pub fn interpolate(&self, t: f64) -> String {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let stops = self.stops();
        let scaled = t * (stops.len() - 1) as f64;
        let lo = scaled.floor() as usize;
        let hi = (lo + 1).min(stops.len() - 1);
        let frac = scaled - lo as f64;

        let mix = |a: u8, b: u8| -> u8 { (a as f64 + (b as f64 - a as f64) * frac).round() as u8 };
        let (r0, g0, b0) = stops[lo];
        let (r1, g1, b1) = stops[hi];
        format!("rgb({}, {}, {})", mix(r0, r1), mix(g0, g1), mix(b0, b1))
    }
}

/// Position of bar `index` out of `len` on the unit interval. A single bar
/// sits at 0.
pub fn normalized_index(index: usize, len: usize) -> f64 {
    if len <= 1 {
        0.0
    } else {
        index as f64 / (len - 1) as f64
    }
}
