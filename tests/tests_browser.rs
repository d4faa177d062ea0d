//! In-browser checks for the hydrated page.
//!
//! ```bash
//! wasm-pack test --headless --firefox --features hydrate
//! ```
#![cfg(all(target_arch = "wasm32", feature = "hydrate"))]

use leptos::prelude::*;
use portfolio_site::{app::PortfolioPage, view_state::Section};
use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
use web_sys::{Event, EventInit};

wasm_bindgen_test_configure!(run_in_browser);

fn submit_event() -> Event {
    let init = EventInit::new();
    init.set_bubbles(true);
    init.set_cancelable(true);
    Event::new_with_event_init_dict("submit", &init)
        .expect("should be able to build submit event")
}

#[wasm_bindgen_test]
fn test_contact_submit_is_cancelled() {
    let _page = leptos::mount::mount_to_body(PortfolioPage);
    let document = document();
    let href_before = window().location().href().expect("location should have href");

    let form = document
        .query_selector("form.contact-form")
        .expect("selector should be valid")
        .expect("contact form should be rendered");

    for _ in 0..2 {
        let event = submit_event();
        let not_cancelled = form.dispatch_event(&event).expect("dispatch should succeed");
        assert!(!not_cancelled);
        assert!(event.default_prevented());
    }

    // no navigation
    let href_after = window().location().href().expect("location should have href");
    assert_eq!(href_after, href_before);

    // nav state is still the default: Home highlighted, menu closed
    let active = document
        .query_selector(&format!("a.active[href='{}']", Section::Home.href()))
        .expect("selector should be valid");
    assert!(active.is_some());
    let open_menu = document
        .query_selector(".nav-links.active")
        .expect("selector should be valid");
    assert!(open_menu.is_none());
}
