use hotel_auth::error::AuthServiceError;
use hotel_auth::usecase::account::LoginInput;
use hotel_domain::user::UserRole;

use crate::helpers::{Harness, MockUserRepo, stored_user, test_issuer};

fn login_input(email: &str, password: &str) -> LoginInput {
    LoginInput {
        email: email.to_owned(),
        password: password.to_owned(),
    }
}

fn harness_with_staff() -> (Harness, uuid::Uuid) {
    let user = stored_user("staff@hotel.test", "Passw0rd", UserRole::Staff);
    let id = user.id;
    let h = Harness {
        users: MockUserRepo::new(vec![user]),
        ..Harness::default()
    };
    (h, id)
}

#[tokio::test]
async fn should_login_and_record_last_login() {
    let (h, id) = harness_with_staff();

    let session = h
        .login()
        .execute(login_input("staff@hotel.test", "Passw0rd"))
        .await
        .unwrap();

    assert_eq!(session.user.id, id);
    assert!(session.user.last_login_at.is_some());
    assert!(h.users.get(id).unwrap().last_login_at.is_some());

    let claims = test_issuer()
        .verify_access(&session.tokens.access_token)
        .unwrap();
    assert_eq!(claims.role, Some(UserRole::Staff));
    assert!(h.refresh_tokens.find(&session.tokens.refresh_token).is_some());
}

#[tokio::test]
async fn should_normalize_email_on_login() {
    let (h, _) = harness_with_staff();

    let result = h
        .login()
        .execute(login_input(" Staff@Hotel.TEST", "Passw0rd"))
        .await;
    assert!(result.is_ok(), "expected login to succeed, got {result:?}");
}

#[tokio::test]
async fn should_reject_wrong_password_as_invalid_credentials() {
    let (h, id) = harness_with_staff();

    let result = h
        .login()
        .execute(login_input("staff@hotel.test", "Wr0ngPass"))
        .await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
    assert!(h.users.get(id).unwrap().last_login_at.is_none());
    assert!(h.refresh_tokens.all().is_empty());
}

#[tokio::test]
async fn should_reject_unknown_email_with_same_error() {
    let (h, _) = harness_with_staff();

    let result = h
        .login()
        .execute(login_input("nobody@hotel.test", "Passw0rd"))
        .await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_inactive_user_as_invalid_credentials() {
    let (h, id) = harness_with_staff();
    h.users.set_active(id, false);

    let result = h
        .login()
        .execute(login_input("staff@hotel.test", "Passw0rd"))
        .await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidCredentials)),
        "expected InvalidCredentials, got {result:?}"
    );
}

#[tokio::test]
async fn should_require_password() {
    let (h, _) = harness_with_staff();

    let result = h.login().execute(login_input("staff@hotel.test", "")).await;
    assert!(
        matches!(result, Err(AuthServiceError::MissingData)),
        "expected MissingData, got {result:?}"
    );
}

#[tokio::test]
async fn should_issue_new_refresh_token_per_login() {
    let (h, _) = harness_with_staff();

    let first = h
        .login()
        .execute(login_input("staff@hotel.test", "Passw0rd"))
        .await
        .unwrap();
    let second = h
        .login()
        .execute(login_input("staff@hotel.test", "Passw0rd"))
        .await
        .unwrap();

    assert_ne!(first.tokens.refresh_token, second.tokens.refresh_token);
    let stored = h.refresh_tokens.all();
    assert_eq!(stored.len(), 2);
    assert!(stored.iter().all(|r| !r.is_revoked));
}
