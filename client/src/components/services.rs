//! Service cards and the Vertigarden video modal.

use leptos::prelude::*;

use crate::components::whatsapp_link::WhatsAppLink;
use crate::content::{SERVICE_VIDEO, SERVICES, Service};

#[component]
pub fn Services() -> impl IntoView {
    let video_open = RwSignal::new(false);

    view! {
        <section id="servicos" class="services">
            <div class="container">
                <h2 class="section-title">"Serviços Premium"</h2>
                <div class="services__grid">
                    {SERVICES
                        .iter()
                        .map(|service| view! { <ServiceCard service=*service video_open=video_open/> })
                        .collect_view()}
                </div>
            </div>
            <Show when=move || video_open.get()>
                <VideoModal on_close=Callback::new(move |()| video_open.set(false))/>
            </Show>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service, video_open: RwSignal<bool>) -> impl IntoView {
    view! {
        <article class="service-card" data-reveal="up">
            <div class="service-card__media">
                <img src=service.image alt=service.title/>
                <span class="badge">{service.badge}</span>
                {service
                    .has_video
                    .then(|| {
                        view! {
                            <button
                                class="service-card__play"
                                aria-label="Ver vídeo do jardim vertical"
                                on:click=move |_| video_open.set(true)
                            >
                                "▶"
                            </button>
                        }
                    })}
            </div>
            <div class="service-card__body">
                <h3>{service.title}</h3>
                <p>{service.description}</p>
                <ul class="service-card__features">
                    {service.features.iter().map(|f| view! { <li>{*f}</li> }).collect_view()}
                </ul>
                <WhatsAppLink message=service.cta_message class="btn btn--primary">
                    {service.cta}
                </WhatsAppLink>
            </div>
        </article>
    }
}

/// Fullscreen video player; clicking the backdrop or pressing Escape closes it.
#[component]
fn VideoModal(on_close: Callback<()>) -> impl IntoView {
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };

    view! {
        <div class="video-modal__backdrop" on:click=move |_| on_close.run(())>
            <div class="video-modal" on:click=move |ev| ev.stop_propagation() on:keydown=on_keydown tabindex="0">
                <button class="video-modal__close" aria-label="Fechar vídeo" on:click=move |_| on_close.run(())>
                    "✕"
                </button>
                <video controls=true autoplay=true loop=true playsinline=true>
                    <source src=SERVICE_VIDEO type="video/mp4"/>
                    "Seu navegador não suporta vídeos."
                </video>
            </div>
        </div>
    }
}
