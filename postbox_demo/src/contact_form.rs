use std::sync::LazyLock;

use postbox_models::contact_form::{ContactFormSubmission, ContactFormValues};

pub static EMPTY_FORM: LazyLock<ContactFormValues> = LazyLock::new(ContactFormValues::default);

pub static CYNTHIA: LazyLock<ContactFormValues> = LazyLock::new(|| ContactFormValues {
    first_name: "Cynthia".into(),
    last_name: "Coronado".into(),
    email: "cynthia.softball12@gmail.com".into(),
    message: String::new(),
});

pub static CYNTHIA_WITH_MESSAGE: LazyLock<ContactFormValues> =
    LazyLock::new(|| ContactFormValues {
        message: "codecodecode".into(),
        ..CYNTHIA.clone()
    });

pub static CYNTHIA_SUBMISSION: LazyLock<ContactFormSubmission> =
    LazyLock::new(|| ContactFormSubmission {
        first_name: "Cynthia".try_into().unwrap(),
        last_name: "Coronado".try_into().unwrap(),
        email: "cynthia.softball12@gmail.com".parse().unwrap(),
        message: None,
    });

pub static CYNTHIA_WITH_MESSAGE_SUBMISSION: LazyLock<ContactFormSubmission> =
    LazyLock::new(|| ContactFormSubmission {
        message: Some("codecodecode".try_into().unwrap()),
        ..CYNTHIA_SUBMISSION.clone()
    });
