//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::SiteConfig;
use crate::content::{PAGE_DESCRIPTION, PAGE_TITLE};
use crate::pages::home::HomePage;
use crate::state::theme::{ThemeEngine, ThemePreference};
use crate::util::dark_mode::{BrowserStorage, DocumentRoot};
use crate::util::reveal::observe_reveal;

/// HTML shell rendered on the server for SSR + hydration.
///
/// Site configuration is rendered into `<body>` data attributes so the
/// hydrated client can rebuild it (see `SiteConfig::from_document`).
pub fn shell(options: LeptosOptions, config: SiteConfig) -> impl IntoView {
    let whatsapp = config.whatsapp_number.clone();
    let email = config.public_email.clone();
    let phone = config.public_phone.clone();
    let form_endpoint = config.form_endpoint_attr();
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR" class="dark">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body
                data-whatsapp=whatsapp
                data-email=email
                data-phone=phone
                data-form-endpoint=form_endpoint
            >
                <App config=config/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the site config, the theme engine, and the theme signal the
/// engine notifies, then sets up client-side routing.
#[component]
pub fn App(config: SiteConfig) -> impl IntoView {
    provide_meta_context();

    let theme = RwSignal::new(ThemePreference::default());
    let mut engine = ThemeEngine::new(BrowserStorage, DocumentRoot);
    engine.subscribe(move |preference| theme.set(preference));
    let engine = StoredValue::new(engine);

    provide_context(config);
    provide_context(theme);
    provide_context(engine);

    // Client only: load the stored theme and start reveal-on-scroll.
    Effect::new(move |_| {
        engine.update_value(|e| {
            e.restore();
        });
        observe_reveal();
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/paisagista.css"/>
        <Title text=PAGE_TITLE/>
        <Meta name="description" content=PAGE_DESCRIPTION/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
