//! Specialty bars.

use leptos::prelude::*;

use crate::components::whatsapp_link::WhatsAppLink;
use crate::content::SKILLS;

#[component]
pub fn Skills() -> impl IntoView {
    view! {
        <section class="skills">
            <div class="container">
                <h2 class="section-title">"Especialidades"</h2>
                <div class="skills__list">
                    {SKILLS
                        .iter()
                        .map(|skill| {
                            view! {
                                <div class="skills__item" data-reveal="up">
                                    <div class="skills__head">
                                        <span>{skill.name}</span>
                                        <span>{format!("{}%", skill.percentage)}</span>
                                    </div>
                                    <div class="skills__bar">
                                        <div class="skills__fill" style=format!("width: {}%", skill.percentage)></div>
                                    </div>
                                    <p>{skill.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
                <WhatsAppLink
                    message="Quero ver o Gregório aplicando essas especialidades no meu projeto."
                    class="btn btn--primary"
                >
                    "Quero essas especialidades no meu projeto"
                </WhatsAppLink>
            </div>
        </section>
    }
}
