/// Partial update of a user's personal information.
///
/// Each field is `None` when the client did not send it. A field that is
/// present but blank is a validation error, not an omission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateUserCommand {
    pub user_id: i32,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub address: Option<String>,
}

impl UpdateUserCommand {
    pub fn new(user_id: i32) -> Self {
        Self {
            user_id,
            ..Default::default()
        }
    }

    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = Some(value.into());
        self
    }

    pub fn with_last_name(mut self, value: impl Into<String>) -> Self {
        self.last_name = Some(value.into());
        self
    }

    pub fn with_phone_number(mut self, value: impl Into<String>) -> Self {
        self.phone_number = Some(value.into());
        self
    }

    pub fn with_address(mut self, value: impl Into<String>) -> Self {
        self.address = Some(value.into());
        self
    }

    /// True if at least one field was sent, even if blank
    pub fn has_any_field(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.phone_number.is_some()
            || self.address.is_some()
    }
}
