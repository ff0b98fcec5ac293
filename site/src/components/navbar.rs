use leafcurl_core::content::anchors;
use leafcurl_core::{MenuState, NavLink};
use leptos::prelude::*;

#[component]
pub fn Navbar(app_name: String, logo_src: String, links: Vec<NavLink>) -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let close = move |_: leptos::ev::MouseEvent| menu.update(MenuState::close);

    view! {
        <nav class="navbar">
            <div class="navbar-content">
                <a href=format!("#{}", anchors::HOME) class="logo" on:click=close>
                    <img src=logo_src alt=app_name />
                </a>
                <button
                    type="button"
                    class=move || menu.with(MenuState::toggle_class)
                    aria-label="Toggle navigation"
                    aria-expanded=move || menu.with(|m| m.is_open().to_string())
                    on:click=move |_| menu.update(MenuState::toggle)
                >
                    <span class="bar"></span>
                    <span class="bar"></span>
                    <span class="bar"></span>
                </button>
                <div class=move || menu.with(MenuState::links_class)>
                    {links.into_iter().map(|link| view! {
                        <a href=link.href on:click=close>{link.label}</a>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </nav>
    }
}
