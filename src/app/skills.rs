use leptos::prelude::*;

use super::scroll_reveal::Reveal;
use crate::{profile::SKILL_CATEGORIES, view_state::Section};

#[component]
pub fn SkillsSection() -> impl IntoView {
    view! {
        <section id=Section::Skills.id() class="skills-section">
            <Reveal class="section-title">
                <h2>"My Skills"</h2>
            </Reveal>
            <div class="skills-container">
                {SKILL_CATEGORIES
                    .iter()
                    .map(|category| {
                        view! {
                            <Reveal class="skill-category">
                                <h3>{category.title}</h3>
                                <div class="skills-grid">
                                    {category
                                        .skills
                                        .iter()
                                        .map(|skill| {
                                            view! {
                                                <div class="skill-item">
                                                    <div class="skill-icon">{skill.icon}</div>
                                                    <p>{skill.name}</p>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Reveal>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}
