use super::*;

fn filled_form() -> ContactFormState {
    let mut form = ContactFormState::default();
    form.set_field(ContactField::Name, "Jane".to_owned());
    form.set_field(ContactField::Email, "jane@x.com".to_owned());
    form.set_service(ServiceKind::Neda);
    form.set_field(ContactField::Details, "100 BCM granite".to_owned());
    form
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn new_form_is_idle_with_neda_selected() {
    let form = ContactFormState::default();
    assert_eq!(form.status, SubmissionStatus::Idle);
    assert_eq!(form.submission.service, ServiceKind::Neda);
    assert!(form.submission.name.is_empty());
    assert!(form.error.is_none());
}

#[test]
fn service_tabs_are_in_display_order() {
    let labels: Vec<_> = ServiceKind::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, ["NEDA", "Chemicals", "General"]);
}

#[test]
fn details_placeholder_follows_service() {
    assert!(ServiceKind::Neda.details_placeholder().contains("BCM"));
    assert!(ServiceKind::Chemicals.details_placeholder().contains("Road Length"));
    assert_eq!(ServiceKind::General.details_placeholder(), "How can we help you?");
}

// =============================================================
// Validation
// =============================================================

#[test]
fn empty_name_blocks_submit() {
    let mut form = filled_form();
    form.set_field(ContactField::Name, String::new());
    assert_eq!(form.begin_submit(), Err(ContactError::MissingName));
    assert_eq!(form.status, SubmissionStatus::Idle);
    assert_eq!(form.error, Some(ContactError::MissingName));
}

#[test]
fn empty_email_blocks_submit() {
    let mut form = filled_form();
    form.set_field(ContactField::Email, String::new());
    assert_eq!(form.begin_submit(), Err(ContactError::MissingEmail));
    assert_eq!(form.status, SubmissionStatus::Idle);
}

#[test]
fn whitespace_only_name_counts_as_empty() {
    let mut form = filled_form();
    form.set_field(ContactField::Name, "   ".to_owned());
    assert_eq!(form.begin_submit(), Err(ContactError::MissingName));
}

#[test]
fn email_without_at_sign_is_rejected() {
    let mut form = filled_form();
    form.set_field(ContactField::Email, "jane.x.com".to_owned());
    assert_eq!(form.begin_submit(), Err(ContactError::InvalidEmail));
    assert_eq!(form.status, SubmissionStatus::Idle);
}

#[test]
fn optional_fields_may_be_empty() {
    let form = filled_form();
    assert!(form.submission.company.is_empty());
    assert!(form.submission.phone.is_empty());
    assert_eq!(form.submission.validate(), Ok(()));
}

#[test]
fn editing_a_field_clears_the_error() {
    let mut form = ContactFormState::default();
    let _ = form.begin_submit();
    assert!(form.error.is_some());
    form.set_field(ContactField::Name, "J".to_owned());
    assert!(form.error.is_none());
}

// =============================================================
// Lifecycle
// =============================================================

#[test]
fn submit_walks_idle_submitting_success() {
    let mut form = filled_form();
    assert_eq!(form.begin_submit(), Ok(()));
    assert_eq!(form.status, SubmissionStatus::Submitting);

    let url = form.complete_submit().expect("pending submission yields a link");
    assert_eq!(form.status, SubmissionStatus::Success);
    assert!(url.starts_with("https://wa.me/62882005779991?text="));
    assert!(url.contains("Service:*NEDA"));
    assert!(url.contains("Name:*Jane"));
    assert!(url.contains("Details:%0a100 BCM granite"));
}

#[test]
fn second_submit_while_submitting_is_rejected() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    assert_eq!(form.begin_submit(), Err(ContactError::NotIdle));
    assert_eq!(form.status, SubmissionStatus::Submitting);
}

#[test]
fn complete_without_pending_submit_is_noop() {
    let mut form = filled_form();
    assert_eq!(form.complete_submit(), None);
    assert_eq!(form.status, SubmissionStatus::Idle);
}

#[test]
fn stale_completion_after_success_does_not_relaunch() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    assert!(form.complete_submit().is_some());
    assert_eq!(form.complete_submit(), None);
    assert_eq!(form.status, SubmissionStatus::Success);
}

#[test]
fn reset_returns_to_idle_and_keeps_fields() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    form.complete_submit();
    form.reset();
    assert_eq!(form.status, SubmissionStatus::Idle);
    assert_eq!(form.submission.name, "Jane");
    assert_eq!(form.submission.details, "100 BCM granite");
}

#[test]
fn reset_while_submitting_is_ignored() {
    let mut form = filled_form();
    form.begin_submit().unwrap();
    form.reset();
    assert_eq!(form.status, SubmissionStatus::Submitting);
}

#[test]
fn error_messages_are_user_facing() {
    assert_eq!(ContactError::MissingName.to_string(), "Please enter your full name.");
    assert_eq!(ContactError::NotIdle.to_string(), "A request is already in progress.");
}

#[test]
fn field_accessor_reads_back_edits() {
    let mut form = ContactFormState::default();
    form.set_field(ContactField::Phone, "+62 811".to_owned());
    form.set_field(ContactField::Company, "PT Tambang".to_owned());
    assert_eq!(form.submission.field(ContactField::Phone), "+62 811");
    assert_eq!(form.submission.field(ContactField::Company), "PT Tambang");
    assert_eq!(form.submission.field(ContactField::Details), "");
}
