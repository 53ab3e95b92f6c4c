//! Full-height opening section with the primary call to action.

use leptos::prelude::*;

use crate::components::whatsapp_link::WhatsAppLink;

#[component]
pub fn Hero() -> impl IntoView {
    view! {
        <section id="hero" class="hero">
            <img class="hero__background" src="/images/bghero.png" alt="Gregório Paisagista"/>
            <div class="hero__overlay"></div>
            <div class="container hero__grid">
                <div class="hero__copy">
                    <h1>
                        "O " <span class="accent">"Arquiteto Paisagista"</span>
                        " que revolucionou o Vale do Aço"
                    </h1>
                    <p>
                        "Único franqueado Vertigarden da região, Gregório transforma espaços comuns em "
                        <strong>"obras de arte vivas"</strong>
                        ", com domínio de solo, nutrição e sistemas sustentáveis."
                    </p>
                    <WhatsAppLink
                        message="Quero que o Gregório transforme meu espaço."
                        class="btn btn--primary btn--large"
                    >
                        "Quero o Gregório no meu projeto"
                    </WhatsAppLink>
                </div>
                <div class="hero__card" data-reveal="right">
                    <span class="badge">"Exclusividade"</span>
                    <h3>"Jardins Verticais Vertigarden"</h3>
                    <p>
                        "Sistema patenteado exclusivo no Vale do Aço: qualquer parede vira um jardim vivo, com tecnologia sustentável e acabamento premium."
                    </p>
                </div>
            </div>
        </section>
    }
}
