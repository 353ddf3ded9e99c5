use crate::UserRecord;

/// Snapshot of the user returned with a successful update
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateUserResponse {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub status: String,
    pub message: String,
}

impl UpdateUserResponse {
    pub fn from_user(user: &UserRecord, message: impl Into<String>) -> Self {
        Self {
            user_id: user.id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone_number: user.phone_number.clone(),
            address: user.address.clone(),
            status: user.status.clone(),
            message: message.into(),
        }
    }
}
