//! Client testimonials.

use leptos::prelude::*;

use crate::content::{TESTIMONIALS, stars};

#[component]
pub fn Testimonials() -> impl IntoView {
    view! {
        <section id="depoimentos" class="testimonials">
            <div class="container">
                <h2 class="section-title">"Depoimentos dos Clientes"</h2>
                <p class="testimonials__score">
                    <span>"5.0"</span>
                    <span class="stars">{stars(5)}</span>
                </p>
                <div class="testimonials__grid">
                    {TESTIMONIALS
                        .iter()
                        .map(|t| {
                            view! {
                                <blockquote class="testimonial" data-reveal="up">
                                    <div class="stars">{stars(t.rating)}</div>
                                    <p>{format!("\u{201c}{}\u{201d}", t.quote)}</p>
                                    <footer>{format!("— {}", t.author)}</footer>
                                </blockquote>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
