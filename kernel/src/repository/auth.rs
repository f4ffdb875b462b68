use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    auth::{event::CreateToken, SessionToken},
    id::UserId,
};

#[async_trait]
pub trait AuthRepository: Send + Sync {
    // セッショントークンからユーザー ID を引く
    async fn fetch_user_id_from_token(&self, token: &SessionToken) -> AppResult<Option<UserId>>;
    // メールアドレスとパスワードを検証する
    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId>;
    // 新しいセッショントークンを発行する
    async fn create_token(&self, event: CreateToken) -> AppResult<SessionToken>;
    // セッショントークンを破棄する
    async fn delete_token(&self, token: SessionToken) -> AppResult<()>;
}
