use leptos::{either::Either, prelude::*};

use super::scroll_reveal::Reveal;
use crate::{
    catalog::{EXTERNAL_REL, EXTERNAL_TARGET},
    profile::{FieldKind, FormField, CONTACT_DETAILS, CONTACT_FIELDS, SOCIAL_LINKS},
    view_state::{Section, SubmitOutcome, ViewState},
};

#[component]
pub fn ContactSection(state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <section id=Section::Contact.id() class="contact-section">
            <Reveal class="section-title">
                <h2>"Contact Me"</h2>
            </Reveal>
            <div class="contact-container">
                <Reveal class="contact-info">
                    <h3>"Get In Touch"</h3>
                    <p>
                        "Feel free to reach out if you're looking for a developer, have a question, or just want to connect."
                    </p>
                    <div class="contact-details">
                        {CONTACT_DETAILS
                            .iter()
                            .map(|detail| {
                                view! {
                                    <div class="contact-item">
                                        <span class="contact-icon">{detail.icon}</span>
                                        <p>{detail.text}</p>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                    <div class="social-links">
                        {SOCIAL_LINKS
                            .iter()
                            .map(|link| {
                                view! {
                                    <a
                                        href=link.href
                                        class="social-icon"
                                        aria-label=link.label
                                        target=EXTERNAL_TARGET
                                        rel=EXTERNAL_REL
                                    >
                                        <svg width="20" height="20" viewBox="0 0 24 24" fill="currentColor">
                                            <path d=link.icon_path />
                                        </svg>
                                    </a>
                                }
                            })
                            .collect_view()}
                    </div>
                </Reveal>
                <Reveal class="contact-form-wrapper">
                    <ContactForm state />
                </Reveal>
            </div>
        </section>
    }
}

/// Placeholder form: the browser checks `required`/`type=email`, and a valid
/// submit is swallowed here. Nothing is sent and the page state is untouched.
#[component]
fn ContactForm(state: RwSignal<ViewState>) -> impl IntoView {
    view! {
        <form
            class="contact-form"
            on:submit=move |ev| match state.with_untracked(ViewState::contact_submit) {
                SubmitOutcome::Suppressed => {
                    ev.prevent_default();
                    log::debug!("contact form submit suppressed");
                }
            }
        >
            {CONTACT_FIELDS.iter().map(form_group).collect_view()}
            <button type="submit" class="btn primary-btn">
                "Send Message"
            </button>
        </form>
    }
}

fn form_group(field: &'static FormField) -> impl IntoView {
    let control = match field.kind {
        FieldKind::TextArea { rows } => Either::Left(view! {
            <textarea
                id=field.id
                name=field.id
                rows=rows.to_string()
                required=field.required
                placeholder=field.placeholder
            ></textarea>
        }),
        kind @ (FieldKind::Text | FieldKind::Email) => Either::Right(view! {
            <input
                type=kind.input_type()
                id=field.id
                name=field.id
                required=field.required
                placeholder=field.placeholder
            />
        }),
    };
    view! {
        <div class="form-group">
            <label for=field.id>{field.label}</label>
            {control}
        </div>
    }
}
