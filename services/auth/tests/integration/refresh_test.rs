use uuid::Uuid;

use hotel_auth::domain::repository::RefreshTokenRepository;
use hotel_auth::domain::types::RefreshTokenRecord;
use hotel_auth::error::AuthServiceError;
use hotel_auth::usecase::account::{AuthSession, LoginInput};
use hotel_auth::usecase::token::TokenIssuer;

use crate::helpers::{Harness, TEST_ACCESS_SECRET, register_input, test_issuer};

async fn registered(h: &Harness) -> AuthSession {
    h.register()
        .execute(register_input("a@x.com", "Passw0rd"))
        .await
        .unwrap()
}

#[tokio::test]
async fn should_rotate_refresh_token() {
    let h = Harness::new();
    let session = registered(&h).await;
    let original = session.tokens.refresh_token.clone();

    let pair = h.refresh().execute(&original).await.unwrap();

    assert_ne!(pair.refresh_token, original);
    assert_eq!(pair.expires_in, 900);
    assert!(h.refresh_tokens.find(&original).unwrap().is_revoked);
    assert!(!h.refresh_tokens.find(&pair.refresh_token).unwrap().is_revoked);

    let claims = test_issuer().verify_access(&pair.access_token).unwrap();
    assert_eq!(claims.user_id, session.user.id);
}

#[tokio::test]
async fn should_reject_replayed_refresh_token() {
    let h = Harness::new();
    let session = registered(&h).await;
    let original = session.tokens.refresh_token;

    h.refresh().execute(&original).await.unwrap();
    let result = h.refresh().execute(&original).await;

    assert!(
        matches!(result, Err(AuthServiceError::InvalidOrExpiredToken)),
        "expected InvalidOrExpiredToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_allow_chained_rotation() {
    let h = Harness::new();
    let session = registered(&h).await;

    let second = h
        .refresh()
        .execute(&session.tokens.refresh_token)
        .await
        .unwrap();
    let third = h.refresh().execute(&second.refresh_token).await.unwrap();

    assert_ne!(third.refresh_token, second.refresh_token);
    let active: Vec<_> = h
        .refresh_tokens
        .all()
        .into_iter()
        .filter(|r| !r.is_revoked)
        .collect();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].token, third.refresh_token);
}

#[tokio::test]
async fn should_let_exactly_one_concurrent_refresh_win() {
    let h = Harness::new();
    let session = registered(&h).await;
    let token = session.tokens.refresh_token;

    let (first, second) = (h.refresh(), h.refresh());
    let (a, b) = tokio::join!(first.execute(&token), second.execute(&token));

    let successes = [a.is_ok(), b.is_ok()].iter().filter(|ok| **ok).count();
    assert_eq!(successes, 1, "expected exactly one winner, got {a:?} / {b:?}");
    let loser = if a.is_ok() { b } else { a };
    assert!(
        matches!(loser, Err(AuthServiceError::InvalidOrExpiredToken)),
        "expected InvalidOrExpiredToken, got {loser:?}"
    );
}

#[tokio::test]
async fn should_fail_rotation_when_record_was_consumed_after_lookup() {
    let h = Harness::new();
    let session = registered(&h).await;
    let token = session.tokens.refresh_token;
    let record = h.refresh_tokens.find(&token).unwrap();

    // Another request rotated the row between our lookup and our update.
    assert!(h.refresh_tokens.revoke_by_id(record.id).await.unwrap());
    h.refresh_tokens.enable_stale_reads();

    let result = h.refresh().execute(&token).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidOrExpiredToken)),
        "expected InvalidOrExpiredToken, got {result:?}"
    );
    assert_eq!(h.refresh_tokens.all().len(), 1, "no replacement persisted");
}

#[tokio::test]
async fn should_reject_token_whose_stored_expiry_passed() {
    let h = Harness::new();
    let session = registered(&h).await;
    h.refresh_tokens.expire(&session.tokens.refresh_token);

    let result = h.refresh().execute(&session.tokens.refresh_token).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidOrExpiredToken)),
        "expected InvalidOrExpiredToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_valid_jwt_missing_from_store() {
    let h = Harness::new();
    let session = registered(&h).await;
    let unknown = test_issuer()
        .issue_refresh(session.user.id, "a@x.com")
        .unwrap();

    let result = h.refresh().execute(&unknown.token).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidOrExpiredToken)),
        "expected InvalidOrExpiredToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_access_token_presented_as_refresh() {
    let h = Harness::new();
    let session = registered(&h).await;

    let result = h.refresh().execute(&session.tokens.access_token).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidToken)),
        "expected InvalidToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_refresh_token_signed_with_access_secret() {
    let h = Harness::new();
    let session = registered(&h).await;
    let forged = TokenIssuer::new(TEST_ACCESS_SECRET, TEST_ACCESS_SECRET)
        .issue_refresh(session.user.id, "a@x.com")
        .unwrap();

    let result = h.refresh().execute(&forged.token).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidToken)),
        "expected InvalidToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_stored_token_owned_by_another_user() {
    let h = Harness::new();
    let session = registered(&h).await;
    // Row says one user, JWT says another.
    let issued = test_issuer().issue_refresh(Uuid::now_v7(), "b@x.com").unwrap();
    h.refresh_tokens
        .save(&RefreshTokenRecord::new(
            session.user.id,
            issued.token.clone(),
            issued.expires_at,
        ))
        .await
        .unwrap();

    let result = h.refresh().execute(&issued.token).await;
    assert!(
        matches!(result, Err(AuthServiceError::InvalidToken)),
        "expected InvalidToken, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_refresh_for_deleted_user() {
    let h = Harness::new();
    let session = registered(&h).await;
    h.users.remove(session.user.id);

    let result = h.refresh().execute(&session.tokens.refresh_token).await;
    assert!(
        matches!(result, Err(AuthServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_refresh_for_inactive_user() {
    let h = Harness::new();
    let session = registered(&h).await;
    h.users.set_active(session.user.id, false);

    let result = h.refresh().execute(&session.tokens.refresh_token).await;
    assert!(
        matches!(result, Err(AuthServiceError::UserNotFound)),
        "expected UserNotFound, got {result:?}"
    );
    assert!(!h
        .refresh_tokens
        .find(&session.tokens.refresh_token)
        .unwrap()
        .is_revoked);
}

#[tokio::test]
async fn should_complete_register_login_refresh_scenario() {
    let h = Harness::new();
    registered(&h).await;

    let login = h
        .login()
        .execute(LoginInput {
            email: "a@x.com".to_owned(),
            password: "Passw0rd".to_owned(),
        })
        .await
        .unwrap();

    // Access tokens differ even when issued within the same second.
    let refreshed = h
        .refresh()
        .execute(&login.tokens.refresh_token)
        .await
        .unwrap();
    assert_ne!(refreshed.access_token, login.tokens.access_token);

    let replay = h.refresh().execute(&login.tokens.refresh_token).await;
    assert!(
        matches!(replay, Err(AuthServiceError::InvalidOrExpiredToken)),
        "expected InvalidOrExpiredToken, got {replay:?}"
    );
}
