//! Sticky top bar: brand, section navigation, WhatsApp CTA, theme toggle.

use leptos::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::components::theme_toggle::ThemeToggle;
use crate::components::whatsapp_link::WhatsAppLink;
use crate::content::{BRAND, NAV_ITEMS};

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="site-header__inner">
                <div class="site-header__brand">
                    <span aria-hidden="true">"🌿"</span>
                    <span>{BRAND}</span>
                </div>
                <nav class="site-header__nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| view! { <AnchorLink href=item.href>{item.label}</AnchorLink> })
                        .collect_view()}
                </nav>
                <WhatsAppLink class="btn btn--primary">"Entrar em contato"</WhatsAppLink>
                <ThemeToggle/>
            </div>
        </header>
    }
}
