// Leaf Curl Virus Detection landing page - browser bundle (Leptos CSR)

use leafcurl_core::SiteConfig;
use leafcurl_site::components::LandingApp;
use leafcurl_site::styles::LANDING_CSS;
use leptos::prelude::*;
use wasm_bindgen::JsValue;

const EMBEDDED_CONFIG: &str = include_str!("../../site.toml");

fn load_config() -> SiteConfig {
    SiteConfig::from_toml_str(EMBEDDED_CONFIG).unwrap_or_else(|err| {
        web_sys::console::warn_1(&JsValue::from_str(&format!(
            "[leafcurl] site.toml rejected, using built-in content: {err}"
        )));
        SiteConfig::default()
    })
}

fn main() {
    console_error_panic_hook::set_once();
    let config = load_config();
    leptos::mount::mount_to_body(move || {
        let config = config.clone();
        view! {
            <style>{LANDING_CSS}</style>
            <LandingApp config=config />
        }
    });
}
