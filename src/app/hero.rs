use leptos::prelude::*;

use super::scroll_reveal::Reveal;
use crate::{
    profile::{INTRO, OWNER, PROFILE_IMAGE, ROLE},
    view_state::{Section, ViewState},
};

#[component]
pub fn HeroSection(state: RwSignal<ViewState>) -> impl IntoView {
    // call-to-action buttons behave exactly like nav clicks
    let jump_to = move |section: Section| state.update(|s| s.select_section(section));

    view! {
        <section id=Section::Home.id() class="hero-section">
            <div class="hero-content">
                <Reveal class="hero-text">
                    <h1>"Hi, I'm " <span class="highlight">{OWNER}</span></h1>
                    <h2>{ROLE}</h2>
                    <p>{INTRO}</p>
                    <div class="hero-buttons">
                        <a
                            href=Section::Projects.href()
                            class="btn primary-btn"
                            on:click=move |_| jump_to(Section::Projects)
                        >
                            "View My Work"
                        </a>
                        <a
                            href=Section::Contact.href()
                            class="btn secondary-btn"
                            on:click=move |_| jump_to(Section::Contact)
                        >
                            "Contact Me"
                        </a>
                    </div>
                </Reveal>
                <Reveal class="profile-image">
                    <img src=PROFILE_IMAGE alt=OWNER />
                </Reveal>
            </div>
        </section>
    }
}
