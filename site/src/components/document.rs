//! Root document component - the complete pre-rendered HTML page

use super::LandingApp;
use crate::styles::LANDING_CSS;
use leafcurl_core::SiteConfig;
use leptos::prelude::*;

/// `<html>` shell around [`LandingApp`] with inline styles.
#[component]
pub fn LandingDocument(
    config: SiteConfig,
    /// Script tag source for the wasm bundle; `None` renders a static page
    #[prop(default = None)]
    bundle_src: Option<String>,
) -> impl IntoView {
    let title = config.content.app_name.clone();
    let description = config.content.tagline.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta name="description" content=description />
                <title>{title}</title>
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <LandingApp config=config />
                {bundle_src.map(|src| view! { <script type="module" src=src></script> })}
            </body>
        </html>
    }
}
