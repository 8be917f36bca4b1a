//! Services catalog.

use leptos::prelude::*;

use crate::components::fade_in::FadeIn;
use crate::state::gallery::ProjectCategory;
use crate::util::fade::Direction;

#[component]
pub fn ServicesPage() -> impl IntoView {
    let services = [ProjectCategory::Neda, ProjectCategory::DustControl, ProjectCategory::RoadHardness];

    view! {
        <main class="page">
            <h1 class="page__title">"Services"</h1>
            <div class="services">
                {services
                    .into_iter()
                    .enumerate()
                    .map(|(i, service)| {
                        let direction = if i % 2 == 0 { Direction::Left } else { Direction::Right };
                        view! {
                            <FadeIn direction=direction class="services__item">
                                <h2>{service.label()}</h2>
                            </FadeIn>
                        }
                    })
                    .collect_view()}
            </div>
        </main>
    }
}
