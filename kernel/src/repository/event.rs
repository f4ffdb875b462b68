use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    event::{event::CreateEvent, Event},
    id::EventId,
};

#[async_trait]
pub trait EventRepository: Send + Sync {
    // イベントを登録する
    async fn create(&self, event: CreateEvent) -> AppResult<EventId>;
    // すべてのイベントを取得する
    async fn find_all(&self) -> AppResult<Vec<Event>>;
    // イベント ID からイベントを取得する
    async fn find_by_id(&self, event_id: EventId) -> AppResult<Option<Event>>;
    // 登録済みイベント数。初期データ投入は 0 件のときだけ行う
    async fn count(&self) -> AppResult<i64>;
}
