use crate::tests::users::fake_users_repository::{FakeUsersRepository, existing_user};
use crate::{
    MSG_ADDRESS_EMPTY, MSG_FIRST_NAME_EMPTY, MSG_INVALID_USER_DATA, MSG_LAST_NAME_EMPTY,
    MSG_NO_CHANGES, MSG_NO_FIELDS_PROVIDED, MSG_PHONE_NUMBER_INVALID, MSG_UPDATE_FAILED,
    MSG_UPDATED, MSG_USER_NOT_FOUND, UpdatePersonalInformationService, UpdateUserCommand,
    UpdateUserOutcome, UpdateUserOutcomeKind,
};

use std::sync::Arc;

use tokio_util::sync::CancellationToken;

fn service_with(repository: &Arc<FakeUsersRepository>) -> UpdatePersonalInformationService {
    UpdatePersonalInformationService::new(repository.clone())
}

#[tokio::test]
async fn test_no_fields_returns_validation_failure_without_fetching() {
    let repository = Arc::new(FakeUsersRepository::with_user(existing_user(1)));
    let service = service_with(&repository);

    let outcome = service
        .update(UpdateUserCommand::new(1), &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        UpdateUserOutcome::ValidationFailure {
            errors: vec![MSG_NO_FIELDS_PROVIDED.to_string()],
            message: MSG_INVALID_USER_DATA.to_string(),
        }
    );
    assert_eq!(repository.find_calls(), 0);
    assert_eq!(repository.save_calls(), 0);
}

#[tokio::test]
async fn test_empty_fields_return_every_validation_error() {
    let repository = Arc::new(FakeUsersRepository::default());
    let service = service_with(&repository);
    let command = UpdateUserCommand::new(1)
        .with_first_name(" ")
        .with_last_name(" ")
        .with_address(" ");

    let outcome = service
        .update(command, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.kind(), UpdateUserOutcomeKind::ValidationFailure);
    assert!(!outcome.is_success());
    assert!(outcome.response().is_none());
    assert!(outcome.errors().contains(&MSG_FIRST_NAME_EMPTY.to_string()));
    assert!(outcome.errors().contains(&MSG_LAST_NAME_EMPTY.to_string()));
    assert!(outcome.errors().contains(&MSG_ADDRESS_EMPTY.to_string()));
    assert_eq!(repository.find_calls(), 0);
}

#[tokio::test]
async fn test_invalid_phone_returns_validation_failure() {
    let repository = Arc::new(FakeUsersRepository::with_user(existing_user(1)));
    let service = service_with(&repository);
    let command = UpdateUserCommand::new(1).with_phone_number("12345");

    let outcome = service
        .update(command, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.kind(), UpdateUserOutcomeKind::ValidationFailure);
    assert_eq!(outcome.errors(), [MSG_PHONE_NUMBER_INVALID.to_string()]);
    assert_eq!(outcome.message(), MSG_INVALID_USER_DATA);
    assert_eq!(repository.find_calls(), 0);
}

#[tokio::test]
async fn test_unknown_user_returns_not_found_without_saving() {
    let repository = Arc::new(FakeUsersRepository::default());
    let service = service_with(&repository);
    let command = UpdateUserCommand::new(42)
        .with_first_name("Ana")
        .with_last_name("Lopez");

    let outcome = service
        .update(command, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        UpdateUserOutcome::NotFound {
            message: MSG_USER_NOT_FOUND.to_string()
        }
    );
    assert_eq!(repository.find_calls(), 1);
    assert_eq!(repository.save_calls(), 0);
}

#[tokio::test]
async fn test_identical_values_return_success_without_saving() {
    let user = existing_user(5);
    let repository = Arc::new(FakeUsersRepository::with_user(user.clone()));
    let service = service_with(&repository);
    let command = UpdateUserCommand::new(5)
        .with_first_name("Ana")
        .with_last_name(" Lopez ")
        .with_phone_number("55 1112 2233")
        .with_address("Direccion");

    let outcome = service
        .update(command, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.kind(), UpdateUserOutcomeKind::Success);
    assert_eq!(outcome.message(), MSG_NO_CHANGES);
    let response = outcome.response().unwrap();
    assert_eq!(response.message, MSG_NO_CHANGES);
    assert_eq!(response.first_name, user.first_name);
    assert_eq!(response.status, "ACTIVE");
    assert_eq!(repository.save_calls(), 0);
    assert!(repository.last_saved().is_none());
}

#[tokio::test]
async fn test_failed_save_returns_persistence_failure() {
    let repository = Arc::new(FakeUsersRepository::with_user(existing_user(7)).failing_saves());
    let service = service_with(&repository);
    let command = UpdateUserCommand::new(7).with_first_name("Ana Maria");

    let outcome = service
        .update(command, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(
        outcome,
        UpdateUserOutcome::PersistenceFailure {
            message: MSG_UPDATE_FAILED.to_string()
        }
    );
    assert!(!outcome.is_success());
    assert_eq!(repository.save_calls(), 1);
    assert!(repository.last_saved().is_none());
}

#[tokio::test]
async fn test_valid_changes_are_normalized_and_saved() {
    let user = existing_user(9);
    let previous_updated_at = user.updated_at;
    let repository = Arc::new(FakeUsersRepository::with_user(user.clone()));
    let service = service_with(&repository);
    let command = UpdateUserCommand::new(9)
        .with_first_name(" Ana Maria ")
        .with_phone_number("+52 55 1112 2233")
        .with_address(" Nueva direccion ");

    let outcome = service
        .update(command, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(outcome.kind(), UpdateUserOutcomeKind::Success);
    assert_eq!(outcome.message(), MSG_UPDATED);
    let response = outcome.response().unwrap();
    assert_eq!(response.user_id, 9);
    assert_eq!(response.first_name, "Ana Maria");
    assert_eq!(response.last_name, "Lopez");
    assert_eq!(response.phone_number, "+525511122233");
    assert_eq!(response.address, "Nueva direccion");

    assert_eq!(repository.save_calls(), 1);
    let saved = repository.last_saved().unwrap();
    assert_eq!(saved.first_name, "Ana Maria");
    assert_eq!(saved.phone_number, "+525511122233");
    assert_eq!(saved.address, "Nueva direccion");
    assert_eq!(saved.email, user.email);
    assert_eq!(saved.password_hash, user.password_hash);
    assert_eq!(saved.created_at, user.created_at);
    assert!(saved.updated_at > previous_updated_at);
}

#[tokio::test]
async fn test_repeating_an_update_is_a_no_op() {
    let repository = Arc::new(FakeUsersRepository::with_user(existing_user(3)));
    let service = service_with(&repository);
    let command = UpdateUserCommand::new(3)
        .with_first_name("Beatriz")
        .with_phone_number("525599988877");

    let first = service
        .update(command.clone(), &CancellationToken::new())
        .await
        .unwrap();
    let second = service
        .update(command, &CancellationToken::new())
        .await
        .unwrap();

    assert_eq!(first.message(), MSG_UPDATED);
    assert_eq!(second.message(), MSG_NO_CHANGES);
    assert_eq!(
        second.response().map(|r| r.phone_number.as_str()),
        Some("+525599988877")
    );
    assert_eq!(repository.save_calls(), 1);
}

#[tokio::test]
async fn test_cancelled_fetch_is_propagated() {
    let repository = Arc::new(FakeUsersRepository::with_user(existing_user(1)));
    let service = service_with(&repository);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let result = service
        .update(UpdateUserCommand::new(1).with_first_name("Ana Maria"), &cancel)
        .await;

    assert!(result.unwrap_err().is_cancelled());
    assert_eq!(repository.save_calls(), 0);
}

#[tokio::test]
async fn test_cancelled_save_is_propagated() {
    let user = existing_user(1);
    let repository =
        Arc::new(FakeUsersRepository::with_user(user.clone()).cancelling_after_find());
    let service = service_with(&repository);
    let cancel = CancellationToken::new();

    let result = service
        .update(UpdateUserCommand::new(1).with_first_name("Ana Maria"), &cancel)
        .await;

    assert!(result.unwrap_err().is_cancelled());
    assert_eq!(repository.find_calls(), 1);
    assert_eq!(repository.save_calls(), 1);
    assert!(repository.last_saved().is_none());
    assert_eq!(*repository.stored.lock().unwrap(), Some(user));
}

#[tokio::test]
async fn test_cancelled_request_still_reports_validation_errors() {
    let repository = Arc::new(FakeUsersRepository::default());
    let service = service_with(&repository);
    let cancel = CancellationToken::new();
    cancel.cancel();

    let outcome = service
        .update(UpdateUserCommand::new(1), &cancel)
        .await
        .unwrap();

    assert_eq!(outcome.kind(), UpdateUserOutcomeKind::ValidationFailure);
    assert_eq!(repository.find_calls(), 0);
}
