//! Sanitization and validation of the optional personal information fields.
//!
//! Every rule runs on every request and all violations are reported together.

use crate::{
    MSG_ADDRESS_EMPTY, MSG_FIRST_NAME_EMPTY, MSG_LAST_NAME_EMPTY, MSG_NO_FIELDS_PROVIDED,
    MSG_PHONE_NUMBER_EMPTY, MSG_PHONE_NUMBER_INVALID, MexicanPhoneNumber, UpdateUserCommand,
};

/// Candidate values that passed sanitization.
///
/// `None` means "leave unchanged", either because the field was not sent or
/// because it failed validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SanitizedFields {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidatedUpdate {
    pub fields: SanitizedFields,
    pub errors: Vec<String>,
}

impl ValidatedUpdate {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Sanitize every field of the command and collect all rule violations.
pub fn validate(command: &UpdateUserCommand) -> ValidatedUpdate {
    let mut errors = Vec::new();

    let first_name = sanitize_text(
        command.first_name.as_deref(),
        MSG_FIRST_NAME_EMPTY,
        &mut errors,
    );
    let last_name = sanitize_text(command.last_name.as_deref(), MSG_LAST_NAME_EMPTY, &mut errors);
    let address = sanitize_text(command.address.as_deref(), MSG_ADDRESS_EMPTY, &mut errors);
    let phone_number = sanitize_phone_number(command.phone_number.as_deref(), &mut errors);

    if !command.has_any_field() {
        errors.push(MSG_NO_FIELDS_PROVIDED.to_string());
    }

    ValidatedUpdate {
        fields: SanitizedFields {
            first_name,
            last_name,
            phone_number,
            address,
        },
        errors,
    }
}

fn sanitize_text(
    raw: Option<&str>,
    empty_message: &str,
    errors: &mut Vec<String>,
) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        errors.push(empty_message.to_string());
        return None;
    }

    Some(trimmed.to_string())
}

fn sanitize_phone_number(raw: Option<&str>, errors: &mut Vec<String>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        errors.push(MSG_PHONE_NUMBER_EMPTY.to_string());
        return None;
    }

    match MexicanPhoneNumber::parse(trimmed) {
        Some(phone) => Some(phone.into_string()),
        None => {
            errors.push(MSG_PHONE_NUMBER_INVALID.to_string());
            None
        }
    }
}
