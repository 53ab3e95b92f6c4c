//! Project gallery with a lightbox viewer.
//!
//! The lightbox state is a plain [`Lightbox`] in an `RwSignal`; all index
//! arithmetic lives there and this module only wires events to it.

use leptos::prelude::*;

use crate::content::{PROJECTS, Project};
use crate::state::lightbox::Lightbox;

#[component]
pub fn Gallery() -> impl IntoView {
    let lightbox = RwSignal::new(Lightbox::default());

    view! {
        <section id="projetos" class="gallery">
            <div class="container">
                <h2 class="section-title">"Projetos Realizados"</h2>
                <div class="gallery__grid">
                    {PROJECTS
                        .iter()
                        .enumerate()
                        .map(|(index, project)| view! { <ProjectCard index=index project=*project lightbox=lightbox/> })
                        .collect_view()}
                </div>
            </div>
            <Show when=move || lightbox.with(Lightbox::is_open)>
                <LightboxOverlay lightbox=lightbox/>
            </Show>
        </section>
    }
}

#[component]
fn ProjectCard(index: usize, project: Project, lightbox: RwSignal<Lightbox>) -> impl IntoView {
    let cover = project.images.first().copied().unwrap_or_default();
    let open = move |_| lightbox.update(|l| l.open(index, project.images.len(), 0));

    view! {
        <button class="project-card" data-reveal="up" on:click=open>
            <img src=cover alt=project.title/>
            <div class="project-card__caption">
                <span class="project-card__category">{project.category}</span>
                <h3>{project.title}</h3>
                <span class="project-card__location">{project.location}</span>
            </div>
        </button>
    }
}

#[component]
fn LightboxOverlay(lightbox: RwSignal<Lightbox>) -> impl IntoView {
    let project = move || lightbox.with(Lightbox::project).and_then(|i| PROJECTS.get(i));
    let image_src = move || {
        project()
            .and_then(|p| p.images.get(lightbox.with(Lightbox::image)))
            .copied()
            .unwrap_or_default()
    };
    let title = move || project().map(|p| p.title).unwrap_or_default();
    let close = move || lightbox.update(Lightbox::close);

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| match ev.key().as_str() {
        "Escape" => close(),
        "ArrowRight" => lightbox.update(Lightbox::next),
        "ArrowLeft" => lightbox.update(Lightbox::prev),
        _ => {}
    };

    view! {
        <div class="lightbox__backdrop" on:click=move |_| close()>
            <div
                class="lightbox"
                role="dialog"
                aria-modal="true"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <button class="lightbox__close" aria-label="Fechar" on:click=move |_| close()>
                    "✕"
                </button>
                <button class="lightbox__nav lightbox__nav--prev" aria-label="Imagem anterior" on:click=move |_| lightbox.update(Lightbox::prev)>
                    "‹"
                </button>
                <img class="lightbox__image" src=image_src alt=title/>
                <button class="lightbox__nav lightbox__nav--next" aria-label="Próxima imagem" on:click=move |_| lightbox.update(Lightbox::next)>
                    "›"
                </button>
                <h3 class="lightbox__title">{title}</h3>
                <div class="lightbox__thumbs">
                    {move || {
                        project()
                            .map(|p| p.images)
                            .unwrap_or_default()
                            .iter()
                            .enumerate()
                            .map(|(i, src)| {
                                let active = move || lightbox.with(Lightbox::image) == i;
                                view! {
                                    <button
                                        class="lightbox__thumb"
                                        class:lightbox__thumb--active=active
                                        on:click=move |_| lightbox.update(|l| l.select(i))
                                    >
                                        <img src=*src alt=""/>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}
