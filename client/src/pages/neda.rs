//! Flagship product detail page.

use leptos::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::components::tech_comparison::TechComparison;

#[component]
pub fn NedaPage() -> impl IntoView {
    view! {
        <main class="page page--hero page--dark">
            <section class="hero">
                <h1 class="hero__title">"NEDA Technology"</h1>
                <p class="hero__subtitle">"Non-Explosive Demolition Agent"</p>
            </section>
            <FadeIn class="page__section">
                <TechComparison/>
            </FadeIn>
        </main>
    }
}
