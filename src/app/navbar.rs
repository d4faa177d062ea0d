use leptos::prelude::*;

use crate::view_state::{Section, ViewState};

#[component]
pub fn Navbar(state: RwSignal<ViewState>) -> impl IntoView {
    let scrolled = Memo::new(move |_| state.with(|s| s.scrolled));
    let menu_open = Memo::new(move |_| state.with(|s| s.mobile_menu_open));

    view! {
        <nav class="navbar" class:scrolled=scrolled>
            <div class="logo">
                <h1>"Portfolio"</h1>
            </div>
            <div
                class="mobile-menu-toggle"
                on:click=move |_| state.update(ViewState::toggle_mobile_menu)
            >
                {(0..3).map(|_| view! { <span class:active=menu_open></span> }).collect_view()}
            </div>
            <ul class="nav-links" class:active=menu_open>
                {Section::ALL
                    .into_iter()
                    .map(|section| view! { <NavLink state section /> })
                    .collect_view()}
            </ul>
        </nav>
    }
}

#[component]
fn NavLink(state: RwSignal<ViewState>, section: Section) -> impl IntoView {
    let is_active = Memo::new(move |_| state.with(|s| s.active_section == section));
    view! {
        <li>
            <a
                href=section.href()
                class:active=is_active
                on:click=move |_| {
                    state.update(|s| s.select_section(section));
                    log::debug!("nav -> {section}");
                }
            >
                {section.label()}
            </a>
        </li>
    }
}
