use hotel_auth::error::AuthServiceError;
use hotel_domain::user::UserRole;

use crate::helpers::{Harness, MockHasher, register_input, test_issuer};
use hotel_auth::domain::repository::CredentialHasher;

#[tokio::test]
async fn should_register_customer_and_issue_tokens() {
    let h = Harness::new();

    let session = h
        .register()
        .execute(register_input("a@x.com", "Passw0rd"))
        .await
        .unwrap();

    assert_eq!(session.user.email, "a@x.com");
    assert_eq!(session.user.role, UserRole::Customer);
    assert!(session.user.is_active);
    assert_eq!(session.tokens.expires_in, 900);

    let claims = test_issuer()
        .verify_access(&session.tokens.access_token)
        .unwrap();
    assert_eq!(claims.user_id, session.user.id);
    assert_eq!(claims.role, Some(UserRole::Customer));
}

#[tokio::test]
async fn should_store_refresh_token_with_expiry_from_claim() {
    let h = Harness::new();

    let session = h
        .register()
        .execute(register_input("a@x.com", "Passw0rd"))
        .await
        .unwrap();

    let stored = h
        .refresh_tokens
        .find(&session.tokens.refresh_token)
        .expect("refresh token persisted");
    assert!(!stored.is_revoked);
    assert_eq!(stored.user_id, session.user.id);
    let claims = test_issuer()
        .verify_refresh(&session.tokens.refresh_token)
        .unwrap();
    assert_eq!(stored.expires_at.timestamp(), claims.exp);
}

#[tokio::test]
async fn should_hash_password_before_storing() {
    let h = Harness::new();

    let session = h
        .register()
        .execute(register_input("a@x.com", "Passw0rd"))
        .await
        .unwrap();

    let user = h.users.get(session.user.id).unwrap();
    assert_ne!(user.password_hash, "Passw0rd");
    assert!(MockHasher.verify("Passw0rd", &user.password_hash).await.unwrap());
}

#[tokio::test]
async fn should_reject_duplicate_email() {
    let h = Harness::new();
    h.register()
        .execute(register_input("a@x.com", "Passw0rd"))
        .await
        .unwrap();

    let result = h
        .register()
        .execute(register_input("a@x.com", "0therPass"))
        .await;
    assert!(
        matches!(result, Err(AuthServiceError::DuplicateEmail)),
        "expected DuplicateEmail, got {result:?}"
    );
}

#[tokio::test]
async fn should_treat_email_case_insensitively() {
    let h = Harness::new();
    h.register()
        .execute(register_input("a@x.com", "Passw0rd"))
        .await
        .unwrap();

    let result = h
        .register()
        .execute(register_input("  A@X.com ", "Passw0rd"))
        .await;
    assert!(
        matches!(result, Err(AuthServiceError::DuplicateEmail)),
        "expected DuplicateEmail, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_weak_password_without_creating_user() {
    let h = Harness::new();

    let result = h
        .register()
        .execute(register_input("a@x.com", "password"))
        .await;
    assert!(
        matches!(result, Err(AuthServiceError::WeakPassword)),
        "expected WeakPassword, got {result:?}"
    );
    assert!(h.users.users.lock().unwrap().is_empty());
    assert!(h.refresh_tokens.all().is_empty());
}

#[tokio::test]
async fn should_reject_invalid_email() {
    let h = Harness::new();

    let result = h
        .register()
        .execute(register_input("not-an-email", "Passw0rd"))
        .await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidEmail)),
        "expected InvalidEmail, got {result:?}"
    );
}

#[tokio::test]
async fn should_store_blank_phone_as_none() {
    let h = Harness::new();
    let mut input = register_input("a@x.com", "Passw0rd");
    input.phone = Some("   ".to_owned());

    let session = h.register().execute(input).await.unwrap();
    assert_eq!(session.user.phone, None);
}
