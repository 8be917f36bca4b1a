//! Root application component with routing.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::pages::{
    contact::ContactPage, fleet::FleetPage, home::HomePage, neda::NedaPage, not_found::NotFoundPage,
    projects::ProjectsPage, services::ServicesPage,
};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// No shared state is provided here: every widget creates its own signals.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Menara Merah Putih"/>

        <Router>
            <Navbar/>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("services") view=ServicesPage/>
                <Route path=StaticSegment("neda") view=NedaPage/>
                <Route path=StaticSegment("projects") view=ProjectsPage/>
                <Route path=StaticSegment("contact") view=ContactPage/>
                <Route path=StaticSegment("fleet") view=FleetPage/>
            </Routes>
        </Router>
    }
}
