pub mod update_personal_information_service;
pub mod update_user_command;
pub mod update_user_outcome;
pub mod update_user_response;
pub mod users_repository;
