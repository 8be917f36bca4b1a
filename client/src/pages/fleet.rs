use leptos::prelude::*;

#[component]
pub fn FleetPage() -> impl IntoView {
    view! {
        <main class="page page--hero">
            <h1 class="page__title">"Fleet"</h1>
        </main>
    }
}
