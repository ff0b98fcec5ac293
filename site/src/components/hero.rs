use leafcurl_core::content::anchors;
use leptos::prelude::*;

#[component]
pub fn Hero(
    app_name: String,
    tagline: String,
    download_url: String,
    download_label: String,
    /// QR code image URL; omitted when `None`
    qr_src: Option<String>,
) -> impl IntoView {
    view! {
        <section class="hero" id=anchors::HOME>
            <h1>{app_name}</h1>
            <p>{tagline}</p>
            <a href=download_url class="download-btn" rel="noopener">
                {download_label}
            </a>
            {qr_src.map(|src| view! {
                <div class="qr-code">
                    <img src=src alt="QR code for the app download" />
                    <p>"Scan to download"</p>
                </div>
            })}
        </section>
    }
}
