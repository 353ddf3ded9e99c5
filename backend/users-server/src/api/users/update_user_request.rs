use users_core::UpdateUserCommand;

use serde::Deserialize;

/// Body of `PUT /users/{user_id}`. Absent keys stay `None`.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    #[serde(default)]
    pub first_name: Option<String>,

    #[serde(default)]
    pub last_name: Option<String>,

    #[serde(default)]
    pub phone_number: Option<String>,

    #[serde(default)]
    pub address: Option<String>,
}

impl UpdateUserRequest {
    pub fn into_command(self, user_id: i32) -> UpdateUserCommand {
        UpdateUserCommand {
            user_id,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            address: self.address,
        }
    }
}
