//! # leafcurl-core
//!
//! Framework-free state and content for the Leaf Curl Virus Detection
//! landing page.
//!
//! - [`carousel`] - screenshot index with circular advance and direct jumps
//! - [`gesture`] - touch swipe recognition (idle / tracking)
//! - [`menu`] - navbar open/closed flag
//! - [`content`] - the text, links and asset names the page renders
//! - [`config`] - optional `site.toml` overrides
//!
//! The Leptos components in `leafcurl-site` hold these values in signals;
//! nothing here knows about the DOM, so every transition is unit-testable.
//!
//! ```rust
//! use leafcurl_core::{Carousel, Direction, SwipeTracker};
//!
//! let mut carousel = Carousel::new(5).unwrap();
//! assert_eq!(carousel.advance(Direction::Prev), 4);
//!
//! let mut swipe = SwipeTracker::default();
//! swipe.touch_start(200.0);
//! if let Some(direction) = swipe.touch_move(120.0) {
//!     carousel.advance(direction);
//! }
//! assert_eq!(carousel.index(), 0);
//! ```

pub mod carousel;
pub mod config;
pub mod content;
pub mod error;
pub mod gesture;
pub mod menu;

pub use carousel::{Carousel, Direction};
pub use config::SiteConfig;
pub use content::{CardBody, DetailCard, Feature, NavLink, SiteContent};
pub use error::{CoreError, CoreResult};
pub use gesture::{SWIPE_THRESHOLD_PX, SwipePhase, SwipeTracker};
pub use menu::MenuState;
