//! Contact page hosting the quotation form.

use leptos::prelude::*;

use crate::components::contact_form::ContactForm;
use crate::components::fade_in::FadeIn;
use crate::util::fade::Direction;

#[component]
pub fn ContactPage() -> impl IntoView {
    view! {
        <main class="page">
            <h1 class="page__title">"Contact"</h1>
            <FadeIn direction=Direction::Left class="page__section">
                <ContactForm/>
            </FadeIn>
        </main>
    }
}
