use leptos::prelude::*;

use crate::profile::OWNER;

const BUILD_YEAR: &str = env!("BUILD_YEAR");

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>{format!("© {BUILD_YEAR} {OWNER}. All rights reserved.")}</p>
        </footer>
    }
}
