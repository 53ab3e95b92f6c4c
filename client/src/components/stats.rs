//! Authority numbers strip.

use leptos::prelude::*;

use crate::content::STATS;

#[component]
pub fn Stats() -> impl IntoView {
    view! {
        <section class="stats">
            <div class="container">
                <h2 class="section-title">"Números que Comprovam"</h2>
                <div class="stats__grid">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class="stats__item" data-reveal="up">
                                    <div class="stats__number">{stat.number}</div>
                                    <div class="stats__label">{stat.label}</div>
                                    <div class="stats__detail">{stat.detail}</div>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
