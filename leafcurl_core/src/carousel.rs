//! Screenshot carousel index.
//!
//! The carousel only tracks *which* image is shown. Buttons, dots and swipe
//! gestures all funnel into [`Carousel::advance`] or [`Carousel::jump_to`],
//! so every input channel produces the same transition.

use crate::error::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Step direction for [`Carousel::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Next => "Next screenshot",
            Direction::Prev => "Previous screenshot",
        }
    }
}

/// Current position within a fixed, non-empty image sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
}

#[allow(clippy::len_without_is_empty)]
impl Carousel {
    /// Create a carousel over `len` images, starting at index 0.
    pub fn new(len: usize) -> CoreResult<Self> {
        if len == 0 {
            return Err(CoreError::EmptyCarousel);
        }
        Ok(Self { len, index: 0 })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.index == index
    }

    /// Step one image forward or back, wrapping at both ends.
    pub fn advance(&mut self, direction: Direction) -> usize {
        self.index = match direction {
            Direction::Next => (self.index + 1) % self.len,
            Direction::Prev => (self.index + self.len - 1) % self.len,
        };
        tracing::trace!(index = self.index, ?direction, "carousel advanced");
        self.index
    }

    /// Show image `index` directly. Out-of-range indices leave the state untouched.
    pub fn jump_to(&mut self, index: usize) -> CoreResult<usize> {
        if index >= self.len {
            return Err(CoreError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.index = index;
        Ok(self.index)
    }

    /// The element of `items` at the current index.
    pub fn current<'a, T>(&self, items: &'a [T]) -> Option<&'a T> {
        items.get(self.index)
    }
}
