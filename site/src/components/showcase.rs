//! Screenshot carousel.
//!
//! Prev/next buttons, dots and touch swipes all update one
//! `RwSignal<Carousel>`; the image and the active dot are derived from it.

use crate::touch::TouchSubscription;
use leafcurl_core::content::anchors;
use leafcurl_core::{Carousel, Direction, SiteContent};
use leptos::prelude::*;
use wasm_bindgen::JsValue;

#[component]
pub fn AppShowcase(
    title: String,
    /// Resolved image URLs, in display order
    images: Vec<String>,
    swipe_threshold: f64,
) -> impl IntoView {
    let Ok(initial) = Carousel::new(images.len()) else {
        return view! {
            <section class="app-showcase" id=anchors::SCREENSHOTS>
                <h2>{title}</h2>
            </section>
        }
        .into_any();
    };

    let len = initial.len();
    let carousel = RwSignal::new(initial);
    let images = StoredValue::new(images);

    let current_src = move || {
        images.with_value(|imgs| carousel.with(|c| c.current(imgs).cloned().unwrap_or_default()))
    };
    let current_alt = move || SiteContent::screenshot_alt(carousel.with(Carousel::index));
    let step = move |direction: Direction| {
        carousel.update(|c| {
            c.advance(direction);
        })
    };

    // Swipe listeners live exactly as long as the surface they are bound to.
    let surface = NodeRef::<leptos::html::Div>::new();
    let subscription = StoredValue::new_local(None::<TouchSubscription>);
    Effect::new(move |_| {
        let Some(element) = surface.get() else {
            return;
        };
        subscription.set_value(None);
        match TouchSubscription::attach(&element, swipe_threshold, move |direction| {
            carousel.update(|c| {
                c.advance(direction);
            })
        }) {
            Ok(attached) => subscription.set_value(Some(attached)),
            Err(err) => web_sys::console::warn_2(
                &JsValue::from_str("swipe navigation unavailable:"),
                &err,
            ),
        }
    });
    on_cleanup(move || {
        let _ = subscription.try_set_value(None);
    });

    view! {
        <section class="app-showcase" id=anchors::SCREENSHOTS>
            <h2>{title}</h2>
            <div class="carousel">
                <button
                    type="button"
                    class="carousel-btn prev"
                    aria-label=Direction::Prev.label()
                    on:click=move |_| step(Direction::Prev)
                >
                    "‹"
                </button>
                <div class="carousel-content" node_ref=surface>
                    <img src=current_src alt=current_alt />
                </div>
                <button
                    type="button"
                    class="carousel-btn next"
                    aria-label=Direction::Next.label()
                    on:click=move |_| step(Direction::Next)
                >
                    "›"
                </button>
            </div>
            <div class="carousel-dots">
                {(0..len).map(|index| {
                    let class = move || {
                        if carousel.with(|c| c.is_active(index)) { "dot active" } else { "dot" }
                    };
                    view! {
                        <button
                            type="button"
                            class=class
                            aria-label=format!("Show screenshot {}", index + 1)
                            on:click=move |_| carousel.update(|c| {
                                if let Err(err) = c.jump_to(index) {
                                    tracing::warn!(%err, "dot click ignored");
                                }
                            })
                        ></button>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
    .into_any()
}
