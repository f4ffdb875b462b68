pub mod event;

// セッション Cookie に入る不透明トークン。KVS 側で user_id に対応付ける
pub struct SessionToken(pub String);
