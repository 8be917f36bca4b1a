//! Project portfolio.

use leptos::prelude::*;

use crate::components::project_gallery::ProjectGallery;

#[component]
pub fn ProjectsPage() -> impl IntoView {
    view! {
        <main class="page">
            <h1 class="page__title">"Projects"</h1>
            <ProjectGallery/>
        </main>
    }
}
