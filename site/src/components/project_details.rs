use leafcurl_core::content::anchors;
use leafcurl_core::{CardBody, DetailCard};
use leptos::prelude::*;

#[component]
pub fn ProjectDetails(title: String, cards: Vec<DetailCard>) -> impl IntoView {
    view! {
        <section class="project-details" id=anchors::ABOUT>
            <h2>{title}</h2>
            <div class="project-content">
                {cards.into_iter().map(|card| view! {
                    <div class="detail-card">
                        <h3>{card.title}</h3>
                        {match card.body {
                            CardBody::Text(text) => view! { <p>{text}</p> }.into_any(),
                            CardBody::List(items) => view! {
                                <ul>
                                    {items.into_iter().map(|item| view! { <li>{item}</li> }).collect::<Vec<_>>()}
                                </ul>
                            }.into_any(),
                        }}
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
