//! Root component shared by the browser bundle and the pre-renderer.

use super::{AppShowcase, Features, Hero, Navbar, ProjectDetails};
use leafcurl_core::SiteConfig;
use leptos::prelude::*;

/// The whole landing page, minus the `<html>` shell.
#[component]
pub fn LandingApp(config: SiteConfig) -> impl IntoView {
    let logo_src = config.asset_url(&config.content.logo);
    let qr_src = config
        .content
        .qr_code
        .as_deref()
        .map(|qr| config.asset_url(qr));
    let images = config
        .content
        .screenshots
        .iter()
        .map(|shot| config.asset_url(shot))
        .collect::<Vec<_>>();
    let swipe_threshold = config.swipe_threshold_px;
    let content = config.content;

    view! {
        <div class="app">
            <Navbar
                app_name=content.app_name.clone()
                logo_src=logo_src
                links=content.nav_links
            />
            <Hero
                app_name=content.app_name
                tagline=content.tagline
                download_url=content.download_url
                download_label=content.download_label
                qr_src=qr_src
            />
            <ProjectDetails title=content.about_title cards=content.project_cards />
            <AppShowcase
                title=content.screenshots_title
                images=images
                swipe_threshold=swipe_threshold
            />
            <Features title=content.features_title features=content.features />
        </div>
    }
}
