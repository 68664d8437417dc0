use postbox_core_contact_form_contracts::validation::ContactFormValidationService;
use postbox_models::{
    contact_form::{
        ContactFirstName, ContactFormErrors, ContactFormField, ContactFormSubmission,
        ContactFormValidationError, ContactFormValues, ContactLastName, ContactMessage,
        FIRST_NAME_MIN_LENGTH,
    },
    email_address::EmailAddress,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct ContactFormValidationServiceImpl;

impl ContactFormValidationService for ContactFormValidationServiceImpl {
    fn validate_field(
        &self,
        field: ContactFormField,
        value: &str,
    ) -> Result<(), ContactFormValidationError> {
        match field {
            ContactFormField::FirstName => first_name(value).map(|_| ()),
            ContactFormField::LastName => last_name(value).map(|_| ()),
            ContactFormField::Email => email(value).map(|_| ()),
            ContactFormField::Message => Ok(()),
        }
    }

    fn validate(
        &self,
        values: &ContactFormValues,
    ) -> Result<ContactFormSubmission, ContactFormErrors> {
        let first_name = first_name(&values.first_name);
        let last_name = last_name(&values.last_name);
        let email = email(&values.email);

        match (first_name, last_name, email) {
            (Ok(first_name), Ok(last_name), Ok(email)) => Ok(ContactFormSubmission {
                first_name,
                last_name,
                email,
                message: ContactMessage::try_new(values.message.clone()).ok(),
            }),
            (first_name, last_name, email) => Err([
                first_name.err(),
                last_name.err(),
                email.err(),
            ]
            .into_iter()
            .flatten()
            .collect()),
        }
    }
}

fn first_name(value: &str) -> Result<ContactFirstName, ContactFormValidationError> {
    ContactFirstName::try_new(value.to_owned()).map_err(|_| ContactFormValidationError::TooShort {
        field: ContactFormField::FirstName,
        min: FIRST_NAME_MIN_LENGTH,
    })
}

fn last_name(value: &str) -> Result<ContactLastName, ContactFormValidationError> {
    ContactLastName::try_new(value.to_owned()).map_err(|_| ContactFormValidationError::Required {
        field: ContactFormField::LastName,
    })
}

fn email(value: &str) -> Result<EmailAddress, ContactFormValidationError> {
    let field = ContactFormField::Email;
    if value.is_empty() {
        return Err(ContactFormValidationError::Required { field });
    }
    value
        .parse()
        .map_err(|_| ContactFormValidationError::InvalidEmail { field })
}

#[cfg(test)]
mod tests {
    use postbox_demo::contact_form::{CYNTHIA, CYNTHIA_SUBMISSION, EMPTY_FORM};
    use pretty_assertions::assert_eq;

    use super::*;

    fn too_short() -> ContactFormValidationError {
        ContactFormValidationError::TooShort {
            field: ContactFormField::FirstName,
            min: FIRST_NAME_MIN_LENGTH,
        }
    }

    #[test]
    fn first_name_boundary() {
        let sut = ContactFormValidationServiceImpl;

        assert_eq!(sut.validate_field(ContactFormField::FirstName, "Cynth"), Ok(()));
        assert_eq!(
            sut.validate_field(ContactFormField::FirstName, "Cynt"),
            Err(too_short())
        );
        assert_eq!(
            sut.validate_field(ContactFormField::FirstName, ""),
            Err(too_short())
        );
    }

    #[test]
    fn last_name_required() {
        let sut = ContactFormValidationServiceImpl;

        assert_eq!(sut.validate_field(ContactFormField::LastName, "C"), Ok(()));
        assert_eq!(
            sut.validate_field(ContactFormField::LastName, ""),
            Err(ContactFormValidationError::Required {
                field: ContactFormField::LastName
            })
        );
    }

    #[test]
    fn email_required_or_invalid() {
        let sut = ContactFormValidationServiceImpl;

        assert_eq!(
            sut.validate_field(ContactFormField::Email, "cynthia.softball12@gmail.com"),
            Ok(())
        );
        assert_eq!(
            sut.validate_field(ContactFormField::Email, ""),
            Err(ContactFormValidationError::Required {
                field: ContactFormField::Email
            })
        );
        assert_eq!(
            sut.validate_field(ContactFormField::Email, "cynthia.softball12@"),
            Err(ContactFormValidationError::InvalidEmail {
                field: ContactFormField::Email
            })
        );
    }

    #[test]
    fn message_is_optional() {
        let sut = ContactFormValidationServiceImpl;

        assert_eq!(sut.validate_field(ContactFormField::Message, ""), Ok(()));
    }

    #[test]
    fn validate_ok() {
        // Arrange
        let sut = ContactFormValidationServiceImpl;

        // Act
        let result = sut.validate(&CYNTHIA);

        // Assert
        assert_eq!(result.unwrap(), *CYNTHIA_SUBMISSION);
    }

    #[test]
    fn validate_empty() {
        // Arrange
        let sut = ContactFormValidationServiceImpl;

        // Act
        let result = sut.validate(&EMPTY_FORM);

        // Assert
        let errors = result.unwrap_err();
        let fields = errors.iter().map(|err| err.field()).collect::<Vec<_>>();
        assert_eq!(
            fields,
            [
                ContactFormField::FirstName,
                ContactFormField::LastName,
                ContactFormField::Email
            ]
        );
    }

    #[test]
    fn validate_missing_email() {
        // Arrange
        let sut = ContactFormValidationServiceImpl;
        let values = ContactFormValues {
            email: String::new(),
            ..CYNTHIA.clone()
        };

        // Act
        let result = sut.validate(&values);

        // Assert
        let errors = result.unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors.get(ContactFormField::Email),
            Some(&ContactFormValidationError::Required {
                field: ContactFormField::Email
            })
        );
    }
}
