use leptos::prelude::*;

use super::scroll_reveal::Reveal;
use crate::{
    catalog::{stagger_delay, OutboundLink, ProjectRecord, CATALOG},
    view_state::Section,
};

#[component]
pub fn ProjectsSection() -> impl IntoView {
    view! {
        <section id=Section::Projects.id() class="projects-section">
            <Reveal class="section-title">
                <h2>"My Projects"</h2>
            </Reveal>
            <div class="projects-grid">
                {CATALOG
                    .projects()
                    .iter()
                    .enumerate()
                    .map(|(index, project)| view! { <ProjectCard index project /> })
                    .collect_view()}
            </div>
        </section>
    }
}

#[component]
fn ProjectCard(index: usize, project: &'static ProjectRecord) -> impl IntoView {
    view! {
        <Reveal class="project-card" style=format!("animation-delay: {}", stagger_delay(index))>
            <div class="project-image">
                <img src=project.image.as_str() alt=project.title.as_str() />
            </div>
            <h3>{project.title.as_str()}</h3>
            <p>{project.description.as_str()}</p>
            <div class="project-tags">
                {project
                    .tags
                    .iter()
                    .map(|tag| view! { <span>{tag.as_str()}</span> })
                    .collect_view()}
            </div>
            <div class="project-links">
                <ExternalButton link=project.demo_link() class="btn small-btn primary-btn" />
                <ExternalButton link=project.code_link() class="btn small-btn secondary-btn" />
            </div>
        </Reveal>
    }
}

#[component]
fn ExternalButton(link: OutboundLink<'static>, class: &'static str) -> impl IntoView {
    view! {
        <a href=link.href class=class target=link.target() rel=link.rel()>
            {link.label}
        </a>
    }
}
