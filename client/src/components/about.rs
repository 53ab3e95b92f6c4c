//! About section.

use leptos::prelude::*;

use crate::components::whatsapp_link::WhatsAppLink;

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="sobre" class="about">
            <div class="container about__grid">
                <img class="about__photo" src="/images/paisagismo.jpg" alt="Gregório em um projeto" data-reveal="left"/>
                <div class="about__copy" data-reveal="up">
                    <h2 class="section-title">"Sobre o Gregório"</h2>
                    <p>
                        "Mais de dez anos criando jardins que unem técnica e estética. Cada projeto parte do solo, do clima e da arquitetura para chegar a um espaço vivo e de manutenção simples."
                    </p>
                    <p>"Atendimento em todo o Brasil, de residências a projetos corporativos."</p>
                    <WhatsAppLink
                        message="Quero falar com o Gregório sobre meu projeto."
                        class="btn btn--primary"
                    >
                        "Falar com o Gregório"
                    </WhatsAppLink>
                </div>
            </div>
        </section>
    }
}
