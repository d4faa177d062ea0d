use leptos::{html, prelude::*};
use leptos_use::{
    use_intersection_observer_with_options, UseIntersectionObserverOptions,
    UseIntersectionObserverReturn,
};

use crate::reveal::{RevealOptions, RevealTracker, REVEAL_CLASS};

/// Wraps `children` in a `div` that fades in the first time it scrolls into view.
///
/// The observer is registered on mount and dropped with the component. Once
/// revealed the watch is stopped, later intersection reports can't undo it.
#[component]
pub fn Reveal(
    #[prop(into)] class: String,
    #[prop(optional, into)] style: Option<String>,
    children: Children,
) -> impl IntoView {
    let target = NodeRef::<html::Div>::new();
    let tracker = StoredValue::new(RevealTracker::default());
    let (revealed, set_revealed) = signal(false);
    let options = RevealOptions::default();

    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        target,
        move |entries, _| {
            let intersecting = entries.iter().any(|entry| entry.is_intersecting());
            let mut first = false;
            tracker.update_value(|t| first = t.observe(intersecting));
            if first {
                set_revealed(true);
            }
        },
        UseIntersectionObserverOptions::default()
            .thresholds(vec![options.threshold])
            .root_margin(options.root_margin()),
    );

    Effect::new(move |_| {
        if revealed.get() {
            stop();
        }
    });

    view! {
        <div
            node_ref=target
            class=format!("{class} {REVEAL_CLASS}")
            class:revealed=revealed
            style=style.unwrap_or_default()
        >
            {children()}
        </div>
    }
}
