//! Small view-model helpers shared by the web UI and the terminal shell.

/// Number of stars in a rating row.
pub const MAX_STARS: u8 = 5;

/// Star icons to draw for a rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StarBreakdown {
    pub full: u8,
    pub half: bool,
    pub empty: u8,
}

impl StarBreakdown {
    pub fn from_rating(rating: f64) -> Self {
        let rating = if rating.is_nan() { 0.0 } else { rating.clamp(0.0, f64::from(MAX_STARS)) };
        let full = rating.floor() as u8;
        let half = rating.fract() > 0.0;
        let empty = MAX_STARS - full - u8::from(half);
        Self { full, half, empty }
    }

    /// Plain-text rendering, e.g. `★★★★½`.
    pub fn to_text(&self) -> String {
        let mut out = "★".repeat(usize::from(self.full));
        if self.half {
            out.push('½');
        }
        out.push_str(&"☆".repeat(usize::from(self.empty)));
        out
    }
}

/// Cursor over a product's images with wrap-around.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Gallery {
    index: usize,
    len: usize,
}

impl Gallery {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Whether prev/next controls and thumbnails should be shown.
    pub fn has_controls(&self) -> bool {
        self.len > 1
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
    }

    pub fn select(&mut self, index: usize) {
        if index < self.len {
            self.index = index;
        }
    }
}

/// Add-to-cart quantity selector. Never drops below one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuantityPicker(u32);

impl Default for QuantityPicker {
    fn default() -> Self {
        Self(1)
    }
}

impl QuantityPicker {
    pub fn value(&self) -> u32 {
        self.0
    }

    pub fn step(&mut self, delta: i64) {
        let next = i64::from(self.0).saturating_add(delta).max(1);
        self.0 = u32::try_from(next).unwrap_or(u32::MAX);
    }

    pub fn reset(&mut self) {
        self.0 = 1;
    }
}
