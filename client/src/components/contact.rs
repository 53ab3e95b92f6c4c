//! Contact section: lead form, direct channels, and a personalised
//! WhatsApp shortcut.
//!
//! SYSTEM CONTEXT
//! ==============
//! The draft and submission phase live in an `RwSignal<ContactForm>`. A
//! submit event asks the form to begin an attempt; when it yields a message
//! the [`LeadRouter`] runs on the local executor and the outcome is written
//! back with `ContactForm::finish`.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::config::SiteConfig;
use crate::net::api::FetchTransport;
use crate::net::lead_router::LeadRouter;
use crate::net::whatsapp::{build_deep_link, greeting_for_name, search_as_page};
use crate::state::contact::ContactForm;
use crate::util::browser::{WindowLocation, page_href};

const FALLBACK_WHATSAPP_MESSAGE: &str = "Olá! Gostaria de um orçamento para meu projeto.";

#[component]
pub fn Contact() -> impl IntoView {
    let config = expect_context::<SiteConfig>();
    let form = RwSignal::new(ContactForm::default());

    let submit_config = config.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = None;
        form.update(|f| started = f.begin_submit(&page_href()));
        let Some(msg) = started else {
            return;
        };
        let router = LeadRouter::new(&submit_config, FetchTransport, WindowLocation);
        leptos::task::spawn_local(async move {
            let outcome = router.submit(&msg).await;
            form.update(|f| f.finish(&outcome));
        });
    };

    let number = config.whatsapp_number.clone();
    let location = use_location();
    let whatsapp_href = move || {
        let greeting = form.with(|f| greeting_for_name(&f.name));
        let template = greeting.as_deref().unwrap_or(FALLBACK_WHATSAPP_MESSAGE);
        build_deep_link(&number, &search_as_page(&location.search.get()), Some(template))
    };

    view! {
        <section id="contato" class="contact">
            <div class="container contact__grid">
                <div class="contact__intro" data-reveal="left">
                    <h2 class="section-title">"Vamos conversar sobre o seu projeto"</h2>
                    <p>"Responda em poucos minutos ou fale direto pelos canais abaixo."</p>
                    <ul class="contact__channels">
                        <li>
                            <a href=config.phone_href()>{config.public_phone.clone()}</a>
                        </li>
                        <li>
                            <a href=config.email_href()>{config.public_email.clone()}</a>
                        </li>
                    </ul>
                    <a href=whatsapp_href target="_blank" rel="noreferrer" class="btn btn--primary">
                        "Conversar pelo WhatsApp"
                    </a>
                </div>
                <form class="contact__form" data-reveal="up" novalidate=true on:submit=on_submit>
                    <label>
                        "Nome"
                        <input
                            type="text"
                            name="nome"
                            autocomplete="name"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "E-mail"
                        <input
                            type="email"
                            name="email"
                            autocomplete="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Telefone"
                        <input
                            type="tel"
                            name="telefone"
                            autocomplete="tel"
                            prop:value=move || form.with(|f| f.phone.clone())
                            on:input=move |ev| form.update(|f| f.phone = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Mensagem"
                        <textarea
                            name="mensagem"
                            rows="5"
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button class="btn btn--primary" type="submit" disabled=move || form.with(ContactForm::is_busy)>
                        {move || if form.with(ContactForm::is_busy) { "Enviando..." } else { "Enviar mensagem" }}
                    </button>
                    <Show when=move || form.with(|f| f.feedback.is_some())>
                        <p
                            class="contact__feedback"
                            class:contact__feedback--error=move || form.with(ContactForm::feedback_is_error)
                            role="status"
                        >
                            {move || form.with(|f| f.feedback.clone().unwrap_or_default())}
                        </p>
                    </Show>
                </form>
            </div>
        </section>
    }
}
