//! Leptos UI components for the landing page.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument (pre-render only)
//! └── LandingApp
//!     ├── Navbar          menu open/closed
//!     ├── Hero            #home
//!     ├── ProjectDetails  #about
//!     ├── AppShowcase     #screenshots, carousel + swipe
//!     └── Features        #features
//! ```

mod app;
mod document;
mod features;
mod hero;
mod navbar;
mod project_details;
mod showcase;

pub use app::LandingApp;
pub use document::LandingDocument;
pub use features::Features;
pub use hero::Hero;
pub use navbar::Navbar;
pub use project_details::ProjectDetails;
pub use showcase::AppShowcase;
