//! WhatsApp call-to-action links.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every link is rebuilt from the router location, so `utm_*` parameters on
//! the current page load follow the visitor into the chat.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::SiteConfig;
use crate::net::whatsapp::{build_deep_link, search_as_page};

/// Anchor opening a prefilled WhatsApp chat in a new tab.
#[component]
pub fn WhatsAppLink(
    /// Template message; the default greeting when absent.
    #[prop(optional)]
    message: Option<&'static str>,
    #[prop(into, optional)] class: String,
    #[prop(optional)] aria_label: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let number = expect_context::<SiteConfig>().whatsapp_number;
    let location = use_location();
    let href = move || build_deep_link(&number, &search_as_page(&location.search.get()), message);

    view! {
        <a href=href target="_blank" rel="noreferrer" class=class aria-label=aria_label>
            {children()}
        </a>
    }
}

/// Floating WhatsApp button pinned to the bottom-right corner.
#[component]
pub fn WhatsAppFab() -> impl IntoView {
    view! {
        <WhatsAppLink class="whatsapp-fab" aria_label="Abrir conversa no WhatsApp">
            <span class="whatsapp-fab__icon">"💬"</span>
        </WhatsAppLink>
    }
}
