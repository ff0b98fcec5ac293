use leafcurl_core::Feature;
use leafcurl_core::content::anchors;
use leptos::prelude::*;

#[component]
pub fn Features(title: String, features: Vec<Feature>) -> impl IntoView {
    view! {
        <section class="features" id=anchors::FEATURES>
            <h2>{title}</h2>
            <div class="features-grid">
                {features.into_iter().enumerate().map(|(index, feature)| view! {
                    <FeatureCard index=index feature=feature />
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(index: usize, feature: Feature) -> impl IntoView {
    view! {
        <div class="feature-card" data-index=index.to_string()>
            <h3>{feature.title}</h3>
            <p>{feature.description}</p>
        </div>
    }
}
