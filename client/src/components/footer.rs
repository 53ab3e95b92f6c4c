//! Page footer with copyright year.

use leptos::prelude::*;

use crate::components::anchor_link::AnchorLink;
use crate::content::BRAND;
use crate::util::browser::current_year;

#[component]
pub fn Footer() -> impl IntoView {
    let notice = format!("© {} {BRAND}. Todos os direitos reservados.", current_year());
    view! {
        <footer class="site-footer">
            <div class="container site-footer__inner">
                <p>{notice}</p>
                <AnchorLink href="#contato" class="site-footer__link">"Contato"</AnchorLink>
            </div>
        </footer>
    }
}
