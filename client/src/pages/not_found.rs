//! 404 page with the rock-break mini-game.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::fade_in::FadeIn;
use crate::components::rock_breaker::RockBreakGame;
use crate::util::routes::SiteRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(response) = use_context::<leptos_axum::ResponseOptions>() {
            response.set_status(axum::http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <main class="page page--dark not-found">
            <FadeIn>
                <h1 class="not-found__code">"404"</h1>
                <h2 class="not-found__title">"We've hit bedrock."</h2>
                <p class="not-found__body">
                    "The page you are looking for doesn't exist or has been moved during our latest site excavation."
                </p>
                <A href=SiteRoute::Home.path() attr:class="button">"Return to Surface"</A>
                <div class="not-found__game">
                    <p class="not-found__game-label">"Or clear the path yourself"</p>
                    <RockBreakGame/>
                </div>
            </FadeIn>
        </main>
    }
}
