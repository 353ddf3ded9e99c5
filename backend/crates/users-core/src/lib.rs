pub mod error;
pub mod models;
pub mod users;
pub mod validation;


pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::user::UserRecord;
pub use users::update_personal_information_service::UpdatePersonalInformationService;
pub use users::update_user_command::UpdateUserCommand;
pub use users::update_user_outcome::{UpdateUserOutcome, UpdateUserOutcomeKind};
pub use users::update_user_response::UpdateUserResponse;
pub use users::users_repository::UsersRepository;
pub use validation::personal_information_validator::{SanitizedFields, ValidatedUpdate, validate};
pub use validation::phone_number::MexicanPhoneNumber;

pub const MSG_FIRST_NAME_EMPTY: &str = "First name cannot be empty.";
pub const MSG_LAST_NAME_EMPTY: &str = "Last name cannot be empty.";
pub const MSG_ADDRESS_EMPTY: &str = "Address cannot be empty.";
pub const MSG_PHONE_NUMBER_EMPTY: &str = "Phone number cannot be empty.";
pub const MSG_PHONE_NUMBER_INVALID: &str = "Phone number is not valid for Mexico.";
pub const MSG_NO_FIELDS_PROVIDED: &str = "No fields were provided for update.";

pub const MSG_INVALID_USER_DATA: &str = "Invalid user data.";
pub const MSG_USER_NOT_FOUND: &str = "User not found.";
pub const MSG_UPDATE_FAILED: &str = "Could not update user information.";
pub const MSG_UPDATED: &str = "User information updated successfully.";
pub const MSG_NO_CHANGES: &str = "No changes were applied.";

const MEXICO_COUNTRY_CODE: &str = "52";
const LOCAL_PHONE_DIGITS: usize = 10;
const INTERNATIONAL_PHONE_DIGITS: usize = 12;
