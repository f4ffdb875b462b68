use derive_new::new;

// フォームから受け取った写真。ファイル名はまだサニタイズ前
#[derive(Debug, new)]
pub struct PhotoUpload {
    pub filename: String,
    pub content: Vec<u8>,
}
