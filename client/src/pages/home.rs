//! Landing page.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::fade_in::FadeIn;
use crate::util::fade::Direction;
use crate::util::routes::SiteRoute;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="page page--hero">
            <section class="hero">
                <FadeIn>
                    <h1 class="hero__title">"Non-Explosive Rock Breaking & Mining Chemicals"</h1>
                </FadeIn>
                <FadeIn delay=0.2 direction=Direction::Up>
                    <div class="hero__actions">
                        <A href=SiteRoute::Neda.path() attr:class="button">"Explore NEDA"</A>
                        <A href=SiteRoute::Contact.path() attr:class="button button--ghost">"Get Quote"</A>
                    </div>
                </FadeIn>
            </section>
        </main>
    }
}
