use std::sync::Arc;

use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    auth::{event::CreateToken, SessionToken},
    id::UserId,
};
use kernel::repository::auth::AuthRepository;
use shared::error::{AppError, AppResult};

use crate::{
    database::ConnectionPool,
    redis::{
        model::{RedisKey, RedisValue},
        RedisClient,
    },
};

#[derive(new)]
pub struct AuthRepositoryImpl {
    db: ConnectionPool,
    kv: Arc<RedisClient>,
    ttl: u64,
}

#[async_trait]
impl AuthRepository for AuthRepositoryImpl {
    // セッショントークンからユーザー ID を引く
    async fn fetch_user_id_from_token(&self, token: &SessionToken) -> AppResult<Option<UserId>> {
        let key: SessionKey = token.into();
        self.kv.get(&key).await.map(|x| x.map(UserId::from))
    }

    // メールアドレスとパスワードを検証する。
    // 未登録のメールアドレスもパスワード誤りも同じエラーにする
    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        let user_item = sqlx::query_as::<_, UserItem>(
            r#"
                SELECT user_id, password_hash FROM users WHERE email = ?
            "#,
        )
        .bind(email)
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?
        .ok_or(AppError::InvalidCredentials)?;

        let valid = bcrypt::verify(password, &user_item.password_hash)?;
        if !valid {
            return Err(AppError::InvalidCredentials);
        }

        Ok(UserId::from(user_item.user_id))
    }

    // 新しいセッショントークンを発行して TTL 付きで保存する
    async fn create_token(&self, event: CreateToken) -> AppResult<SessionToken> {
        let (key, value) = issue_session(event);
        self.kv.set_ex(&key, &value, self.ttl).await?;
        Ok(key.into())
    }

    // セッショントークンを破棄する。存在しないトークンの削除もエラーにしない
    async fn delete_token(&self, token: SessionToken) -> AppResult<()> {
        let key: SessionKey = (&token).into();
        self.kv.delete(&key).await
    }
}

#[derive(sqlx::FromRow)]
struct UserItem {
    user_id: i64,
    password_hash: String,
}

fn issue_session(event: CreateToken) -> (SessionKey, StoredUserId) {
    (
        SessionKey(uuid::Uuid::new_v4().simple().to_string()),
        StoredUserId(event.user_id),
    )
}

pub struct SessionKey(String);

impl RedisKey for SessionKey {
    type Value = StoredUserId;

    fn inner(&self) -> String {
        format!("session:{}", self.0)
    }
}

impl From<&SessionToken> for SessionKey {
    fn from(token: &SessionToken) -> Self {
        Self(token.0.clone())
    }
}

impl From<SessionKey> for SessionToken {
    fn from(key: SessionKey) -> Self {
        SessionToken(key.0)
    }
}

pub struct StoredUserId(UserId);

impl RedisValue for StoredUserId {
    fn inner(&self) -> String {
        self.0.to_string()
    }
}

impl TryFrom<String> for StoredUserId {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let id = value
            .parse::<i64>()
            .map_err(|e| AppError::ConversionEntityError(e.to_string()))?;
        Ok(Self(UserId::from(id)))
    }
}

impl From<StoredUserId> for UserId {
    fn from(value: StoredUserId) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use kernel::model::{role::Role, user::event::CreateUser};
    use kernel::repository::user::UserRepository;
    use shared::config::RedisConfig;

    use crate::repository::user::UserRepositoryImpl;

    use super::*;

    // Client::open は接続しないので、DB だけで済むテストには実サーバー不要
    fn lazy_redis_client() -> anyhow::Result<Arc<RedisClient>> {
        let config = RedisConfig {
            host: "localhost".into(),
            port: 6379,
        };
        Ok(Arc::new(RedisClient::new(&config)?))
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn verify_user_accepts_the_registered_password(
        pool: sqlx::SqlitePool,
    ) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        let user = UserRepositoryImpl::new(db.clone())
            .create(CreateUser::new(
                "Alice Weber".into(),
                "alice@example.com".into(),
                "secret-pw".into(),
                Role::User,
            ))
            .await?;

        let repo = AuthRepositoryImpl::new(db, lazy_redis_client()?, 3600);
        let verified = repo.verify_user("alice@example.com", "secret-pw").await?;
        assert_eq!(verified, user.user_id);
        Ok(())
    }

    #[sqlx::test(migrations = "../migrations")]
    async fn verify_user_rejects_bad_password_and_unknown_email_alike(
        pool: sqlx::SqlitePool,
    ) -> anyhow::Result<()> {
        let db = ConnectionPool::new(pool);
        UserRepositoryImpl::new(db.clone())
            .create(CreateUser::new(
                "Alice Weber".into(),
                "alice@example.com".into(),
                "secret-pw".into(),
                Role::User,
            ))
            .await?;

        let repo = AuthRepositoryImpl::new(db, lazy_redis_client()?, 3600);

        let wrong_password = repo.verify_user("alice@example.com", "wrong-pw").await;
        assert!(matches!(wrong_password, Err(AppError::InvalidCredentials)));

        let unknown_email = repo.verify_user("nobody@example.com", "secret-pw").await;
        assert!(matches!(unknown_email, Err(AppError::InvalidCredentials)));
        Ok(())
    }

    #[test]
    fn stored_user_id_round_trips_through_its_string_form() {
        let (_, value) = issue_session(CreateToken::new(UserId::from(42)));
        let parsed = StoredUserId::try_from(value.inner()).unwrap();
        assert_eq!(UserId::from(parsed), UserId::from(42));

        assert!(StoredUserId::try_from("not-a-number".to_string()).is_err());
    }

    #[test]
    fn session_keys_are_namespaced_and_unique() {
        let (first, _) = issue_session(CreateToken::new(UserId::from(1)));
        let (second, _) = issue_session(CreateToken::new(UserId::from(1)));
        assert!(first.inner().starts_with("session:"));
        assert_ne!(first.inner(), second.inner());

        let token = SessionToken::from(first);
        let key = SessionKey::from(&token);
        assert_eq!(format!("session:{}", token.0), key.inner());
    }
}
