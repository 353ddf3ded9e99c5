pub mod personal_information_validator;
pub mod phone_number;
