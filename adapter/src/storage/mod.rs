use std::path::PathBuf;

use async_trait::async_trait;
use derive_new::new;
use kernel::{model::photo::PhotoUpload, repository::photo::PhotoStorage};
use shared::error::{AppError, AppResult};

#[derive(new)]
pub struct PhotoStorageImpl {
    upload_dir: PathBuf,
}

#[async_trait]
impl PhotoStorage for PhotoStorageImpl {
    async fn store(&self, upload: Option<PhotoUpload>) -> AppResult<Option<String>> {
        let Some(upload) = upload else {
            return Ok(None);
        };
        let Some(filename) = sanitize_filename(&upload.filename) else {
            return Ok(None);
        };

        tokio::fs::create_dir_all(&self.upload_dir)
            .await
            .map_err(AppError::FileStoreError)?;
        tokio::fs::write(self.upload_dir.join(&filename), &upload.content)
            .await
            .map_err(AppError::FileStoreError)?;

        Ok(Some(filename))
    }
}

// ファイル名からディレクトリ部分を取り除き、英数字と「._-」以外の文字を捨てる。
// 先頭のドットも落とす（"../../etc/passwd" は "passwd" になる）
pub fn sanitize_filename(name: &str) -> Option<String> {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    let cleaned: String = base
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-'))
        .collect();
    let cleaned = cleaned.trim_start_matches('.').to_string();
    (!cleaned.is_empty()).then_some(cleaned)
}
