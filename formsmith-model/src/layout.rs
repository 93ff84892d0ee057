use serde::{Deserialize, Serialize};

/// Grid geometry of a placed field.
///
/// `x`/`y` are cell coordinates, `w`/`h` are spans in cells and rows.
/// Overlap between fields is allowed; resolving it is the editor's business.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Layout {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Layout {
    #[must_use]
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Column just past the right edge.
    #[must_use]
    pub const fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    /// Row just past the bottom edge.
    #[must_use]
    pub const fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// Spans must be positive.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.w > 0 && self.h > 0
    }

    /// Returns true if the two rectangles share at least one cell.
    #[must_use]
    pub const fn overlaps(&self, other: &Layout) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}
