//! Filterable grid of project case studies.

use leptos::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::state::gallery::{CategoryFilter, GalleryFilterState, ProjectCategory, ProjectRecord};

#[component]
pub fn ProjectGallery() -> impl IntoView {
    let gallery = RwSignal::new(GalleryFilterState::default());
    let visible = Memo::new(move |_| gallery.with(GalleryFilterState::visible_projects));

    view! {
        <div class="gallery">
            <FadeIn class="gallery__filters">
                {CategoryFilter::CHIPS
                    .into_iter()
                    .map(|chip| {
                        view! {
                            <button
                                class="gallery__chip"
                                class:gallery__chip--active=move || gallery.with(|g| g.selected == chip)
                                on:click=move |_| gallery.update(|g| g.set_category(chip))
                            >
                                {chip.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </FadeIn>

            <div class="gallery__grid">
                {move || {
                    visible
                        .get()
                        .into_iter()
                        .map(|record| view! { <ProjectCard record=record/> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

#[component]
fn ProjectCard(record: ProjectRecord) -> impl IntoView {
    let badge_class = if record.category == ProjectCategory::Neda {
        "gallery-card__badge gallery-card__badge--accent"
    } else {
        "gallery-card__badge"
    };

    view! {
        <article class="gallery-card">
            <div class="gallery-card__media">
                <img class="gallery-card__image" src=record.image_ref alt=record.client loading="lazy"/>
                <span class=badge_class>{record.category.label()}</span>
            </div>
            <div class="gallery-card__body">
                <h3 class="gallery-card__client">{record.client}</h3>
                <p class="gallery-card__location">{record.location}</p>
            </div>
        </article>
    }
}
