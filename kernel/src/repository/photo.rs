use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::photo::PhotoUpload;

#[async_trait]
pub trait PhotoStorage: Send + Sync {
    // 写真を保存し、保存したファイル名を返す。
    // 添付なし・サニタイズで名前が空になった場合は None を返す
    async fn store(&self, upload: Option<PhotoUpload>) -> AppResult<Option<String>>;
}
