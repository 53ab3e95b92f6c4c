//! Header button flipping between the dark and light theme.

use leptos::prelude::*;

use crate::state::theme::{ThemeEngine, ThemePreference};

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemePreference>>();
    let engine = expect_context::<StoredValue<ThemeEngine>>();

    let on_toggle = move |_| {
        engine.update_value(|e| {
            e.toggle();
        });
    };

    view! {
        <button class="theme-toggle" on:click=on_toggle aria-label=move || theme.get().toggle_label()>
            {move || if theme.get().is_dark() { "☀" } else { "☾" }}
        </button>
    }
}
