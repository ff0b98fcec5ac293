//! # leafcurl-site
//!
//! Leptos components for the Leaf Curl Virus Detection landing page.
//!
//! The same component tree serves two builds:
//!
//! - **`csr`** - the trunk bundle in `landing/` mounts [`components::LandingApp`]
//!   in the browser; the carousel reacts to buttons, dots and touch swipes.
//! - **`ssr`** - [`render_page`] turns the tree into a static HTML document,
//!   used by `leafcurl-render` to pre-render `index.html`.
//!
//! ## Modules
//!
//! - [`components`] - navbar, hero, project details, carousel, features
//! - [`touch`] - scoped touch-listener subscription behind swipe navigation
//! - [`styles`] - CSS constants
//!
//! ## Tests
//!
//! ```text
//! cargo test -p leafcurl-site --features ssr       # rendered HTML
//! wasm-pack test --headless --chrome site          # touch listeners in a browser
//! ```
//!
//! ## Leptos 0.8 SSR
//!
//! ```rust,ignore
//! use leafcurl_core::SiteConfig;
//!
//! let html = leafcurl_site::render_page(&SiteConfig::default(), None);
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```

#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod styles;
pub mod touch;

#[cfg(feature = "ssr")]
pub use render::render_page;

#[cfg(feature = "ssr")]
mod render {
    use crate::components::LandingDocument;
    use leafcurl_core::SiteConfig;
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    /// Render the complete landing page as an HTML document.
    ///
    /// `bundle_src` adds a module script tag so the browser bundle can take
    /// over the static markup; pass `None` for a script-free page.
    pub fn render_page(config: &SiteConfig, bundle_src: Option<String>) -> String {
        let owner = Owner::new();
        let html = owner.with(|| {
            let doc = view! {
                <LandingDocument config=config.clone() bundle_src=bundle_src />
            };
            doc.to_html()
        });

        tracing::debug!(bytes = html.len(), "landing page rendered");

        // Leptos doesn't include DOCTYPE, so we add it
        format!("<!DOCTYPE html>\n{}", html)
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use leafcurl_core::{SiteConfig, SiteContent};
    use pretty_assertions::assert_eq;

    fn default_page() -> String {
        render_page(&SiteConfig::default(), None)
    }

    #[test]
    fn renders_complete_document() {
        let html = default_page();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>"));
        assert!(html.contains("Leaf Curl Virus Detection"));
        assert!(html.contains("<style>"));
        assert!(!html.contains("<script"));
    }

    #[test]
    fn renders_every_section_anchor() {
        let html = default_page();
        for id in ["home", "about", "screenshots", "features"] {
            assert!(html.contains(&format!("id=\"{id}\"")), "missing #{id}");
            assert!(html.contains(&format!("href=\"#{id}\"")), "no link to #{id}");
        }
    }

    #[test]
    fn renders_download_link_and_qr() {
        let html = default_page();
        assert!(html.contains(leafcurl_core::content::DEFAULT_DOWNLOAD_URL));
        assert!(html.contains("Download App"));
        assert!(html.contains("assets/qr-code.png"));

        let mut config = SiteConfig::default();
        config.content.qr_code = None;
        let html = render_page(&config, None);
        assert!(!html.contains("qr-code.png"));
    }

    #[test]
    fn carousel_starts_on_first_screenshot() {
        let html = default_page();
        assert!(html.contains("assets/pic-1.jpg"));
        assert!(!html.contains("assets/pic-2.jpg"));
        assert!(html.contains(&SiteContent::screenshot_alt(0)));
        assert_eq!(html.matches("class=\"dot active\"").count(), 1);
        assert_eq!(html.matches("class=\"dot\"").count(), 4);
    }

    #[test]
    fn menu_starts_closed() {
        let html = default_page();
        assert!(html.contains("class=\"nav-links\""));
        assert!(!html.contains("nav-links open"));
        assert!(html.contains("aria-expanded=\"false\""));
    }

    #[test]
    fn renders_every_feature_and_card() {
        let html = default_page();
        let content = SiteContent::default();
        for feature in &content.features {
            assert!(html.contains(&feature.title));
            assert!(html.contains(&feature.description));
        }
        assert_eq!(html.matches("class=\"feature-card\"").count(), 4);
        assert_eq!(html.matches("class=\"detail-card\"").count(), 3);
        assert!(html.contains("Flutter for cross-platform mobile development"));
    }

    #[test]
    fn custom_screenshots_and_assets_base() {
        let mut config = SiteConfig::default();
        config.assets_base = "/static".into();
        config.content.screenshots = vec!["one.png".into(), "two.png".into()];
        let html = render_page(&config, None);
        assert!(html.contains("/static/one.png"));
        assert_eq!(html.matches("class=\"dot").count(), 2);
    }

    #[test]
    fn bundle_script_is_optional() {
        let html = render_page(&SiteConfig::default(), Some("landing.js".into()));
        assert!(html.contains("<script type=\"module\" src=\"landing.js\">"));
    }
}
