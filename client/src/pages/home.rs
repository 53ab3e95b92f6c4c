//! Single-page landing layout.

use leptos::prelude::*;

use crate::components::about::About;
use crate::components::awards::Awards;
use crate::components::contact::Contact;
use crate::components::footer::Footer;
use crate::components::gallery::Gallery;
use crate::components::header::Header;
use crate::components::hero::Hero;
use crate::components::services::Services;
use crate::components::skills::Skills;
use crate::components::stats::Stats;
use crate::components::testimonials::Testimonials;
use crate::components::theme_preview::ThemePreview;
use crate::components::whatsapp_link::WhatsAppFab;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <Header/>
        <main>
            <Hero/>
            <Stats/>
            <About/>
            <Services/>
            <Gallery/>
            <Skills/>
            <Awards/>
            <Testimonials/>
            <Contact/>
        </main>
        <Footer/>
        <WhatsAppFab/>
        <ThemePreview/>
    }
}
