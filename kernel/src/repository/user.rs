use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    id::UserId,
    user::{
        event::{CreateUser, DeleteUser, UpdateUserProfile},
        User,
    },
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    // ユーザーを登録する（メールアドレス重複は EmailTaken）
    async fn create(&self, event: CreateUser) -> AppResult<User>;
    // ログイン中ユーザーの情報を取得する
    async fn find_current_user(&self, current_user_id: UserId) -> AppResult<Option<User>>;
    // ユーザー ID からユーザーを取得する
    async fn find_by_id(&self, user_id: UserId) -> AppResult<Option<User>>;
    // すべてのユーザーを取得する
    async fn find_all(&self) -> AppResult<Vec<User>>;
    // 管理画面からの編集。メールアドレスの重複チェックは登録時のみ
    async fn update_profile(&self, event: UpdateUserProfile) -> AppResult<()>;
    // ユーザーを削除する
    async fn delete(&self, event: DeleteUser) -> AppResult<()>;
    // 起動時処理。該当アカウントが admin 以外なら昇格させ、昇格したかを返す
    async fn promote_to_admin(&self, email: &str) -> AppResult<bool>;
}
