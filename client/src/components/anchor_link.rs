//! In-page link with smooth scrolling.

use leptos::prelude::*;

use crate::util::browser::scroll_to_anchor;

/// `<a href="#id">` that scrolls smoothly instead of jumping.
#[component]
pub fn AnchorLink(href: &'static str, #[prop(into, optional)] class: String, children: Children) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        if scroll_to_anchor(href) {
            ev.prevent_default();
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
