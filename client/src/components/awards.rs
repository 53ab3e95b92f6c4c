//! Awards and recognitions strip.

use leptos::prelude::*;

use crate::content::AWARDS;

#[component]
pub fn Awards() -> impl IntoView {
    view! {
        <section class="awards theme-bg-surface">
            <div class="container">
                <h2 class="section-title">"Prêmios & Reconhecimentos"</h2>
                <p class="section-subtitle">"Excelência reconhecida pela indústria e clientes."</p>
                <div class="awards__grid">
                    {AWARDS
                        .iter()
                        .map(|award| {
                            view! {
                                <div class="awards__item" data-reveal="up">
                                    <div class="awards__year">{award.year}</div>
                                    <h3>{award.title}</h3>
                                    <p>{award.description}</p>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}
