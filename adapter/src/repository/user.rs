use async_trait::async_trait;
use derive_new::new;
use kernel::model::{
    id::UserId,
    user::{
        event::{CreateUser, DeleteUser, UpdateUserProfile},
        User,
    },
};
use kernel::repository::user::UserRepository;
use shared::error::{AppError, AppResult};

use crate::database::{model::user::UserRow, ConnectionPool};

#[derive(new)]
pub struct UserRepositoryImpl {
    db: ConnectionPool,
}

#[async_trait]
impl UserRepository for UserRepositoryImpl {
    // ユーザーを登録する（メールアドレス重複は EmailTaken）
    async fn create(&self, event: CreateUser) -> AppResult<User> {
        let mut tx = self.db.begin().await?;

        // 重複チェックは UNIQUE 制約に任せず先に行い、ドメインエラーとして返す
        let registered = sqlx::query_scalar::<_, i64>(
            r#"
                SELECT COUNT(*) FROM users WHERE email = ?
            "#,
        )
        .bind(&event.email)
        .fetch_one(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if registered > 0 {
            return Err(AppError::EmailTaken);
        }

        let password_hash = bcrypt::hash(&event.password, bcrypt::DEFAULT_COST)?;

        let res = sqlx::query(
            r#"
                INSERT INTO users (user_name, email, password_hash, role)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(&password_hash)
        .bind(event.role.as_ref())
        .execute(&mut *tx)
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::NoRowsAffectedError(
                "No user record has been created".into(),
            ));
        }
        let user_id = UserId::from(res.last_insert_rowid());

        tx.commit().await.map_err(AppError::TransactionError)?;

        Ok(User {
            user_id,
            user_name: event.user_name,
            email: event.email,
            role: event.role,
        })
    }

    // ログイン中ユーザーの情報を取得する
    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>> {
        self.find_by_id(current_user_id).await
    }

    // ユーザー ID からユーザーを取得する
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT user_id, user_name, email, role
                FROM users
                WHERE user_id = ?
            "#,
        )
        .bind(user_id.raw())
        .fetch_optional(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        row.map(User::try_from).transpose()
    }

    // すべてのユーザーを登録順に取得する
    async fn find_all(&self) -> AppResult<Vec<User>> {
        let rows = sqlx::query_as::<_, UserRow>(
            r#"
                SELECT user_id, user_name, email, role
                FROM users
                ORDER BY user_id ASC
            "#,
        )
        .fetch_all(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        rows.into_iter().map(User::try_from).collect()
    }

    // 管理画面からの編集。メールアドレスの重複チェックは登録時のみ
    async fn update_profile(&self, event: UpdateUserProfile) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                UPDATE users
                SET user_name = ?, email = ?, role = ?
                WHERE user_id = ?
            "#,
        )
        .bind(&event.user_name)
        .bind(&event.email)
        .bind(event.role.as_ref())
        .bind(event.user_id.raw())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified user not found".into()));
        }
        Ok(())
    }

    // ユーザーを削除する。予約は外部キーの ON DELETE CASCADE で一緒に消える
    async fn delete(&self, event: DeleteUser) -> AppResult<()> {
        let res = sqlx::query(
            r#"
                DELETE FROM users WHERE user_id = ?
            "#,
        )
        .bind(event.user_id.raw())
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        if res.rows_affected() < 1 {
            return Err(AppError::EntityNotFound("specified user not found".into()));
        }
        Ok(())
    }

    // 起動時処理。該当アカウントが admin 以外なら昇格させ、昇格したかを返す
    async fn promote_to_admin(&self, email: &str) -> AppResult<bool> {
        let res = sqlx::query(
            r#"
                UPDATE users SET role = 'admin'
                WHERE email = ? AND role <> 'admin'
            "#,
        )
        .bind(email)
        .execute(self.db.inner_ref())
        .await
        .map_err(AppError::SpecificOperationError)?;

        Ok(res.rows_affected() > 0)
    }
}
