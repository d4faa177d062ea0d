mod contact;
mod footer;
mod hero;
mod navbar;
mod projects;
mod scroll_reveal;
mod skills;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_use::use_window_scroll;

use crate::{profile::OWNER, view_state::ViewState};

use contact::ContactSection;
use footer::Footer;
use hero::HeroSection;
use navbar::Navbar;
use projects::ProjectsSection;
use skills::SkillsSection;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title text=format!("{OWNER} - Portfolio") />
        <Meta
            name="description"
            content=format!("Projects, skills and contact details of {OWNER}")
        />
        <PortfolioPage />
    }
}

/// The whole site. Owns the [`ViewState`] for as long as it is mounted.
#[component]
pub fn PortfolioPage() -> impl IntoView {
    let state = RwSignal::new(ViewState::default());

    // listener is removed by leptos-use when this component's owner is cleaned up
    let (_, scroll_y) = use_window_scroll();
    Effect::watch(
        move || scroll_y.get(),
        move |offset, _, _| {
            if state.with_untracked(|s| s.scroll_changes(*offset)) {
                state.update(|s| {
                    s.observe_scroll(*offset);
                });
                log::debug!("scrolled past threshold: {}", state.with_untracked(|s| s.scrolled));
            }
        },
        true,
    );

    view! {
        <div class="portfolio-app">
            <Navbar state />
            <HeroSection state />
            <ProjectsSection />
            <SkillsSection />
            <ContactSection state />
            <Footer />
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;
    use crate::view_state::Section;

    #[test]
    fn test_page_has_section_anchors() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <PortfolioPage /> }.to_html());
        for section in Section::ALL {
            assert!(
                html.contains(&format!("id=\"{}\"", section.id())),
                "missing #{section} in page"
            );
            assert!(html.contains(&format!("href=\"{}\"", section.href())));
        }
        assert!(html.contains("class=\"footer\""));
    }

    #[test]
    fn test_initial_render_uses_default_state() {
        let owner = Owner::new();
        let html = owner.with(|| view! { <PortfolioPage /> }.to_html());
        assert!(!html.contains("navbar scrolled"));
        assert!(!html.contains("nav-links active"));
        // only the Home link is highlighted
        assert_eq!(html.matches("class=\"active\"").count(), 1);
    }
}
