//! Touch swipe recognition for the screenshot carousel.
//!
//! ```text
//!            touch-start(x)
//!   Idle ───────────────────▶ Tracking { start_x }
//!    ▲                          │
//!    │  |start_x - x| > limit   │ touch-move(x)
//!    ├──────────────────────────┤  (fires Next / Prev once)
//!    │                          │
//!    └──────── touch-end ───────┘
//! ```
//!
//! A gesture fires at most once: crossing the threshold drops the tracker
//! back to idle, so the rest of the drag is ignored until the next touch-start.

use crate::carousel::Direction;

/// Horizontal travel, in CSS pixels, a drag must exceed to count as a swipe.
pub const SWIPE_THRESHOLD_PX: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SwipePhase {
    Idle,
    Tracking { start_x: f64 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SwipeTracker {
    phase: SwipePhase,
    threshold: f64,
}

impl Default for SwipeTracker {
    fn default() -> Self {
        Self::new(SWIPE_THRESHOLD_PX)
    }
}

impl SwipeTracker {
    pub fn new(threshold: f64) -> Self {
        Self {
            phase: SwipePhase::Idle,
            threshold: threshold.abs(),
        }
    }

    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    pub fn is_swiping(&self) -> bool {
        matches!(self.phase, SwipePhase::Tracking { .. })
    }

    pub fn touch_start(&mut self, x: f64) {
        self.phase = SwipePhase::Tracking { start_x: x };
    }

    /// Feed a pointer position. Returns the direction to advance when this
    /// move completes a swipe.
    pub fn touch_move(&mut self, x: f64) -> Option<Direction> {
        let SwipePhase::Tracking { start_x } = self.phase else {
            return None;
        };

        // Positive: finger travelled left, reveal the next image.
        let displacement = start_x - x;
        if displacement.abs() <= self.threshold {
            return None;
        }

        self.phase = SwipePhase::Idle;
        let direction = if displacement > 0.0 {
            Direction::Next
        } else {
            Direction::Prev
        };
        tracing::debug!(displacement, ?direction, "swipe recognized");
        Some(direction)
    }

    pub fn touch_end(&mut self) {
        self.reset();
    }

    pub fn reset(&mut self) {
        self.phase = SwipePhase::Idle;
    }
}
