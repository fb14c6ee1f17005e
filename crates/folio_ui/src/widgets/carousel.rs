//! Cyclic carousel position.
//!
//! The carousel owns only the index and the item count; what the items are
//! and how they are displayed is up to the caller. The index is always
//! within `0..len` when `len > 0` and is `0` otherwise.

/// Navigation direction for [`CarouselState::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Current position in an ordered, wrapping sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CarouselState {
    index: usize,
    len: usize,
}

impl CarouselState {
    /// Create a carousel over `len` items positioned at the first one.
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether previous/next controls, a counter and thumbnails are shown.
    pub fn has_navigation(&self) -> bool {
        self.len > 1
    }

    /// Move one step, wrapping at both ends.
    ///
    /// Returns the new index, or `None` when there is nothing to navigate.
    pub fn step(&mut self, direction: Direction) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        self.index = match direction {
            Direction::Previous => (self.index + self.len - 1) % self.len,
            Direction::Next => (self.index + 1) % self.len,
        };
        log::trace!("🎠 Carousel {:?} -> {}/{}", direction, self.index + 1, self.len);
        Some(self.index)
    }

    /// Jump directly to `index`. Out-of-range indices are rejected and leave
    /// the position unchanged.
    pub fn jump_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.index = index;
        true
    }

    /// One-indexed "position / total" label, e.g. `"1 / 6"`.
    pub fn position_label(&self) -> String {
        format!("{} / {}", self.index + 1, self.len)
    }
}
