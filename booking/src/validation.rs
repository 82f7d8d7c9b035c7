use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::fmt;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Fields of the contact step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Company,
    Message,
}

impl ContactField {
    pub const ALL: [ContactField; 5] = [
        ContactField::Name,
        ContactField::Email,
        ContactField::Phone,
        ContactField::Company,
        ContactField::Message,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Full Name",
            ContactField::Email => "Email Address",
            ContactField::Phone => "Phone Number",
            ContactField::Company => "Company Name",
            ContactField::Message => "Message",
        }
    }

    pub fn is_required(&self) -> bool {
        matches!(self, ContactField::Name | ContactField::Email)
    }
}

/// What the visitor typed into the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub message: String,
}

impl ContactDetails {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Company => &self.company,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        match field {
            ContactField::Name => self.name = value,
            ContactField::Email => self.email = value,
            ContactField::Phone => self.phone = value,
            ContactField::Company => self.company = value,
            ContactField::Message => self.message = value,
        }
    }
}

/// Inline error shown next to a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("This field is required")]
    Required,
    #[error("Please enter a valid email address")]
    InvalidEmail,
}

/// Per-field validation errors, at most one per field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<ContactField, FieldError>);

impl FieldErrors {
    pub fn get(&self, field: ContactField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn insert(&mut self, field: ContactField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn clear(&mut self, field: ContactField) {
        self.0.remove(&field);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (ContactField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, error)| format!("{}: {}", field.label(), error))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Client-side, best-effort checks of the contact step. Name and email
/// are required; phone and the other fields are free-form.
pub fn validate_contact(details: &ContactDetails) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::default();

    for field in ContactField::ALL {
        if field.is_required() && details.get(field).trim().is_empty() {
            errors.insert(field, FieldError::Required);
        }
    }

    if errors.get(ContactField::Email).is_none() && !is_valid_email(&details.email) {
        errors.insert(ContactField::Email, FieldError::InvalidEmail);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn jane() -> ContactDetails {
        ContactDetails {
            name: "Jane Doe".to_string(),
            email: "jane@co.com".to_string(),
            ..ContactDetails::default()
        }
    }

    #[test]
    fn test_minimal_contact_is_valid() {
        assert_eq!(validate_contact(&jane()), Ok(()));
    }

    #[test]
    fn test_name_and_email_required() {
        let errors = validate_contact(&ContactDetails::default()).unwrap_err();
        assert_eq!(errors.get(ContactField::Name), Some(FieldError::Required));
        assert_eq!(errors.get(ContactField::Email), Some(FieldError::Required));
        assert_eq!(errors.len(), 2);

        let mut blank_name = jane();
        blank_name.name = "   ".to_string();
        let errors = validate_contact(&blank_name).unwrap_err();
        assert_eq!(errors.get(ContactField::Name), Some(FieldError::Required));
        assert_eq!(errors.get(ContactField::Email), None);
    }

    #[test]
    fn test_email_format() {
        assert!(is_valid_email("jane@co.com"));
        assert!(is_valid_email(" jane.doe+ai@mail.example.org "));
        assert!(!is_valid_email("jane@co"));
        assert!(!is_valid_email("jane co@co.com"));
        assert!(!is_valid_email("@co.com"));

        let mut details = jane();
        details.email = "not-an-email".to_string();
        let errors = validate_contact(&details).unwrap_err();
        assert_eq!(errors.get(ContactField::Email), Some(FieldError::InvalidEmail));
    }

    #[test]
    fn test_phone_is_free_form() {
        for phone in ["+1 (555) 123-4567", "ext. 42", "12345", "555-CALL"] {
            let mut details = jane();
            details.phone = phone.to_string();
            assert_eq!(validate_contact(&details), Ok(()), "phone {:?}", phone);
        }
    }

    #[test]
    fn test_get_set_round_trip_every_field() {
        let mut details = ContactDetails::default();
        for field in ContactField::ALL {
            details.set(field, field.label().to_string());
        }
        for field in ContactField::ALL {
            assert_eq!(details.get(field), field.label());
        }
    }

    #[test]
    fn test_field_errors_display() {
        let mut errors = FieldErrors::default();
        errors.insert(ContactField::Email, FieldError::InvalidEmail);
        errors.insert(ContactField::Name, FieldError::Required);
        assert_eq!(
            errors.to_string(),
            "Full Name: This field is required; Email Address: Please enter a valid email address"
        );
        errors.clear(ContactField::Name);
        assert_eq!(errors.len(), 1);
    }
}
