//! Floating widget showing the active theme's palette with a toggle.

use leptos::prelude::*;

use crate::state::theme::{ThemeEngine, ThemePreference};

const SWATCHES: &[(&str, &str)] = &[
    ("Fundo:", "theme-preview__swatch theme-bg-primary"),
    ("Superfície:", "theme-preview__swatch theme-bg-surface"),
    ("Texto:", "theme-preview__swatch theme-text-swatch"),
];

#[component]
pub fn ThemePreview() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemePreference>>();
    let engine = expect_context::<StoredValue<ThemeEngine>>();

    view! {
        <aside class="theme-preview">
            <h4 class="theme-preview__title">"Preview do Tema"</h4>
            <p class="theme-preview__mode">{move || theme.get().label()}</p>
            <ul class="theme-preview__swatches">
                {SWATCHES
                    .iter()
                    .map(|(label, class)| {
                        view! {
                            <li>
                                <span>{*label}</span>
                                <span class=*class></span>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
            <button
                class="theme-preview__toggle"
                on:click=move |_| {
                    engine.update_value(|e| {
                        e.toggle();
                    });
                }
            >
                "Alternar Tema"
            </button>
        </aside>
    }
}
