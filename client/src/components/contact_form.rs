//! Quotation request form that hands the lead off to WhatsApp.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns a `ContactFormState`. Submit shows a spinner for `SUBMIT_DELAY_MS`,
//! then opens the deep link in a new tab and switches to the success panel.
//! A blocked popup is logged but still reported as success.

use std::time::Duration;

use leptos::prelude::*;

use crate::state::contact::{ContactField, ContactFormState, SUBMIT_DELAY_MS, ServiceKind, SubmissionStatus};
use crate::util::browser;
use crate::util::timer::MountGuard;

#[component]
pub fn ContactForm() -> impl IntoView {
    let form = RwSignal::new(ContactFormState::default());
    let guard = StoredValue::new(MountGuard::new());

    let status = move || form.with(|f| f.status);
    let service = move || form.with(|f| f.submission.service);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let mut started = false;
        form.update(|f| started = f.begin_submit().is_ok());
        if !started {
            return;
        }
        guard.with_value(|g| {
            g.after(Duration::from_millis(SUBMIT_DELAY_MS), move || {
                let mut url = None;
                form.update(|f| url = f.complete_submit());
                if let Some(url) = url {
                    if !browser::open_in_new_tab(&url) {
                        #[cfg(feature = "hydrate")]
                        log::warn!("messaging deep link was not opened (popup blocked?)");
                    }
                }
            });
        });
    };

    view! {
        <Show
            when=move || status() != SubmissionStatus::Success
            fallback=move || {
                view! {
                    <div class="contact-success">
                        <h3 class="contact-success__title">"Redirecting to WhatsApp..."</h3>
                        <p class="contact-success__body">
                            "Please click \"Send\" in your WhatsApp app to complete the request. "
                            "Our dispatch team will reply shortly."
                        </p>
                        <button class="contact-success__reset" on:click=move |_| form.update(ContactFormState::reset)>
                            "New Request"
                        </button>
                    </div>
                }
            }
        >
            <form class="contact-form" on:submit=on_submit>
                <div class="contact-form__header">
                    <h3>"Request a Quotation"</h3>
                    <p>"Please provide project volume (BCM) or road length (km) for accurate estimation."</p>
                </div>

                <div class="contact-form__services" role="tablist">
                    {ServiceKind::ALL
                        .into_iter()
                        .map(|kind| {
                            view! {
                                <button
                                    type="button"
                                    role="tab"
                                    class="contact-form__service"
                                    class:contact-form__service--active=move || service() == kind
                                    aria-selected=move || (service() == kind).to_string()
                                    on:click=move |_| form.update(|f| f.set_service(kind))
                                >
                                    {kind.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>

                <div class="contact-form__grid">
                    <FieldInput form=form field=ContactField::Name label="Full Name" placeholder="John Doe" required=true/>
                    <FieldInput
                        form=form
                        field=ContactField::Email
                        label="Company Email"
                        placeholder="john@mining-corp.com"
                        input_type="email"
                        required=true
                    />
                    <FieldInput form=form field=ContactField::Company label="Company Name" placeholder="PT. Mining Sejahtera"/>
                    <FieldInput form=form field=ContactField::Phone label="WhatsApp / Phone" placeholder="+62..."/>
                </div>

                <label class="contact-form__field">
                    <span class="contact-form__label">"Project Details"</span>
                    <textarea
                        class="contact-form__textarea"
                        placeholder=move || service().details_placeholder()
                        prop:value=move || form.with(|f| f.submission.field(ContactField::Details).to_owned())
                        on:input=move |ev| form.update(|f| f.set_field(ContactField::Details, event_target_value(&ev)))
                    ></textarea>
                </label>

                <Show when=move || form.with(|f| f.error.is_some())>
                    <p class="contact-form__error" role="alert">
                        {move || form.with(|f| f.error.map(|e| e.to_string()).unwrap_or_default())}
                    </p>
                </Show>

                <button
                    type="submit"
                    class="contact-form__submit"
                    disabled=move || status() == SubmissionStatus::Submitting
                >
                    <Show
                        when=move || status() == SubmissionStatus::Submitting
                        fallback=|| view! { <span>"Continue to WhatsApp"</span> }
                    >
                        <span class="spinner" aria-label="Sending"></span>
                    </Show>
                </button>

                <p class="contact-form__hint">"Fastest response via WhatsApp (Avg 10 mins)."</p>
            </form>
        </Show>
    }
}

/// Labelled single-line input bound to one submission field.
#[component]
fn FieldInput(
    form: RwSignal<ContactFormState>,
    field: ContactField,
    label: &'static str,
    placeholder: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
) -> impl IntoView {
    let value = move || form.with(|f| f.submission.field(field).to_owned());

    view! {
        <label class="contact-form__field">
            <span class="contact-form__label">{label}</span>
            <input
                class="contact-form__input"
                type=input_type
                placeholder=placeholder
                required=required
                prop:value=value
                on:input=move |ev| form.update(|f| f.set_field(field, event_target_value(&ev)))
            />
        </label>
    }
}
