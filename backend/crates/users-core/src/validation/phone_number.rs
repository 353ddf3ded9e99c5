use crate::{INTERNATIONAL_PHONE_DIGITS, LOCAL_PHONE_DIGITS, MEXICO_COUNTRY_CODE};

use std::fmt;

/// A phone number accepted for Mexico, held in its normalized form.
///
/// Formatting characters are ignored; only ASCII digits count. Ten digits are
/// stored bare, twelve digits starting with the country code are stored with
/// a leading `+`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MexicanPhoneNumber(String);

impl MexicanPhoneNumber {
    /// Parse a raw phone number, returning None if it is not valid for Mexico
    pub fn parse(raw: &str) -> Option<Self> {
        let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

        match digits.len() {
            LOCAL_PHONE_DIGITS => Some(Self(digits)),
            INTERNATIONAL_PHONE_DIGITS if digits.starts_with(MEXICO_COUNTRY_CODE) => {
                Some(Self(format!("+{digits}")))
            }
            _ => None,
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        Self::parse(raw).is_some()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for MexicanPhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<MexicanPhoneNumber> for String {
    fn from(phone: MexicanPhoneNumber) -> Self {
        phone.0
    }
}
