use anyhow::Context as _;
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, SqlErr, TransactionTrait,
};
use uuid::Uuid;

use hotel_auth_schema::{refresh_tokens, users};
use hotel_domain::user::UserRole;

use crate::domain::repository::{RefreshTokenRepository, UserRepository};
use crate::domain::types::{NewUser, RefreshTokenRecord, User};
use crate::error::AuthServiceError;

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbUserRepository {
    pub db: DatabaseConnection,
}

impl UserRepository for DbUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AuthServiceError> {
        let model = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find user by email")?;
        model.map(user_from_model).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AuthServiceError> {
        let model = users::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find user by id")?;
        model.map(user_from_model).transpose()
    }

    async fn create(&self, user: NewUser) -> Result<User, AuthServiceError> {
        let now = Utc::now();
        let result = users::ActiveModel {
            id: Set(Uuid::now_v7()),
            email: Set(user.email),
            password: Set(user.password_hash),
            first_name: Set(user.first_name),
            last_name: Set(user.last_name),
            phone: Set(user.phone),
            role: Set(user.role.as_str().to_owned()),
            is_active: Set(true),
            email_verified: Set(false),
            last_login_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        }
        .insert(&self.db)
        .await;

        match result {
            Ok(model) => user_from_model(model),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Err(AuthServiceError::DuplicateEmail)
            }
            Err(e) => Err(anyhow::Error::new(e).context("insert user").into()),
        }
    }

    async fn touch_last_login(&self, id: Uuid) -> Result<(), AuthServiceError> {
        let now = Utc::now();
        users::Entity::update_many()
            .col_expr(users::Column::LastLoginAt, Expr::value(now))
            .col_expr(users::Column::UpdatedAt, Expr::value(now))
            .filter(users::Column::Id.eq(id))
            .exec(&self.db)
            .await
            .context("update last login")?;
        Ok(())
    }
}

fn user_from_model(m: users::Model) -> Result<User, AuthServiceError> {
    let role = m
        .role
        .parse::<UserRole>()
        .with_context(|| format!("stored role for user {}", m.id))?;
    Ok(User {
        id: m.id,
        email: m.email,
        password_hash: m.password,
        first_name: m.first_name,
        last_name: m.last_name,
        phone: m.phone,
        role,
        is_active: m.is_active,
        email_verified: m.email_verified,
        last_login_at: m.last_login_at,
        created_at: m.created_at,
        updated_at: m.updated_at,
    })
}

// ── Refresh token repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbRefreshTokenRepository {
    pub db: DatabaseConnection,
}

impl RefreshTokenRepository for DbRefreshTokenRepository {
    async fn save(&self, record: &RefreshTokenRecord) -> Result<(), AuthServiceError> {
        insert_refresh_token(&self.db, record)
            .await
            .context("insert refresh token")?;
        Ok(())
    }

    async fn find_active(
        &self,
        token: &str,
    ) -> Result<Option<RefreshTokenRecord>, AuthServiceError> {
        let model = refresh_tokens::Entity::find()
            .filter(refresh_tokens::Column::Token.eq(token))
            .filter(refresh_tokens::Column::IsRevoked.eq(false))
            .one(&self.db)
            .await
            .context("find active refresh token")?;
        Ok(model.map(refresh_token_from_model))
    }

    async fn revoke(&self, token: &str) -> Result<(), AuthServiceError> {
        refresh_tokens::Entity::update_many()
            .col_expr(refresh_tokens::Column::IsRevoked, Expr::value(true))
            .filter(refresh_tokens::Column::Token.eq(token))
            .filter(refresh_tokens::Column::IsRevoked.eq(false))
            .exec(&self.db)
            .await
            .context("revoke refresh token")?;
        Ok(())
    }

    async fn revoke_by_id(&self, id: Uuid) -> Result<bool, AuthServiceError> {
        let revoked = revoke_if_active(&self.db, id)
            .await
            .context("revoke refresh token by id")?;
        Ok(revoked)
    }

    async fn rotate(
        &self,
        consumed_id: Uuid,
        replacement: &RefreshTokenRecord,
    ) -> Result<bool, AuthServiceError> {
        let rotated = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                let replacement = replacement.clone();
                Box::pin(async move {
                    // The conditional update is the check-and-set: a concurrent
                    // rotation of the same row blocks on the row lock, then sees
                    // zero affected rows.
                    if !revoke_if_active(txn, consumed_id).await? {
                        return Ok(false);
                    }
                    insert_refresh_token(txn, &replacement).await?;
                    Ok(true)
                })
            })
            .await
            .context("rotate refresh token")?;
        Ok(rotated)
    }
}

/// Shared check-and-set behind `revoke_by_id` and `rotate`.
async fn revoke_if_active<C: ConnectionTrait>(conn: &C, id: Uuid) -> Result<bool, DbErr> {
    let result = refresh_tokens::Entity::update_many()
        .col_expr(refresh_tokens::Column::IsRevoked, Expr::value(true))
        .filter(refresh_tokens::Column::Id.eq(id))
        .filter(refresh_tokens::Column::IsRevoked.eq(false))
        .exec(conn)
        .await?;
    Ok(result.rows_affected == 1)
}

async fn insert_refresh_token<C: ConnectionTrait>(
    conn: &C,
    record: &RefreshTokenRecord,
) -> Result<(), DbErr> {
    refresh_tokens::ActiveModel {
        id: Set(record.id),
        user_id: Set(record.user_id),
        token: Set(record.token.clone()),
        expires_at: Set(record.expires_at),
        is_revoked: Set(record.is_revoked),
        created_at: Set(record.created_at),
    }
    .insert(conn)
    .await?;
    Ok(())
}

fn refresh_token_from_model(m: refresh_tokens::Model) -> RefreshTokenRecord {
    RefreshTokenRecord {
        id: m.id,
        user_id: m.user_id,
        token: m.token,
        expires_at: m.expires_at,
        is_revoked: m.is_revoked,
        created_at: m.created_at,
    }
}
