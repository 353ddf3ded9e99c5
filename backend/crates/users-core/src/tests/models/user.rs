use crate::UserRecord;

#[test]
fn test_apply_change_replaces_different_value() {
    let mut current = "Ana".to_string();

    let changed = UserRecord::apply_change(&mut current, Some("Ana Maria".to_string()));

    assert!(changed);
    assert_eq!(current, "Ana Maria");
}

#[test]
fn test_apply_change_ignores_equal_value() {
    let mut current = "Ana".to_string();

    let changed = UserRecord::apply_change(&mut current, Some("Ana".to_string()));

    assert!(!changed);
    assert_eq!(current, "Ana");
}

#[test]
fn test_apply_change_ignores_missing_value() {
    let mut current = "Ana".to_string();

    let changed = UserRecord::apply_change(&mut current, None);

    assert!(!changed);
    assert_eq!(current, "Ana");
}
