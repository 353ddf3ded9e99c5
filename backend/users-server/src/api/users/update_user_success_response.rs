use users_core::UpdateUserResponse;

use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserSuccessResponse {
    pub user_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub status: String,
    pub message: String,
}

impl From<UpdateUserResponse> for UpdateUserSuccessResponse {
    fn from(r: UpdateUserResponse) -> Self {
        Self {
            user_id: r.user_id,
            first_name: r.first_name,
            last_name: r.last_name,
            phone_number: r.phone_number,
            address: r.address,
            status: r.status,
            message: r.message,
        }
    }
}
