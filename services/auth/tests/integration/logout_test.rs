use hotel_auth::error::AuthServiceError;

use crate::helpers::{Harness, register_input};

#[tokio::test]
async fn should_revoke_refresh_token_on_logout() {
    let h = Harness::new();
    let session = h
        .register()
        .execute(register_input("a@x.com", "Passw0rd"))
        .await
        .unwrap();

    h.logout()
        .execute(&session.tokens.refresh_token)
        .await
        .unwrap();

    assert!(
        h.refresh_tokens
            .find(&session.tokens.refresh_token)
            .unwrap()
            .is_revoked
    );
}

#[tokio::test]
async fn should_reject_refresh_after_logout() {
    let h = Harness::new();
    let session = h
        .register()
        .execute(register_input("a@x.com", "Passw0rd"))
        .await
        .unwrap();

    h.logout()
        .execute(&session.tokens.refresh_token)
        .await
        .unwrap();
    let result = h.refresh().execute(&session.tokens.refresh_token).await;

    assert!(
        matches!(result, Err(AuthServiceError::InvalidOrExpiredToken)),
        "expected InvalidOrExpiredToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_succeed_for_unknown_or_repeated_logout() {
    let h = Harness::new();
    let session = h
        .register()
        .execute(register_input("a@x.com", "Passw0rd"))
        .await
        .unwrap();

    assert!(h.logout().execute("never-issued").await.is_ok());
    assert!(h.logout().execute(&session.tokens.refresh_token).await.is_ok());
    assert!(h.logout().execute(&session.tokens.refresh_token).await.is_ok());
}

#[tokio::test]
async fn should_keep_rotated_session_after_logout_of_consumed_token() {
    let h = Harness::new();
    let first = h
        .register()
        .execute(register_input("a@x.com", "Passw0rd"))
        .await
        .unwrap();
    let second = h
        .refresh()
        .execute(&first.tokens.refresh_token)
        .await
        .unwrap();

    h.logout()
        .execute(&first.tokens.refresh_token)
        .await
        .unwrap();

    assert!(h.refresh().execute(&second.refresh_token).await.is_ok());
}
