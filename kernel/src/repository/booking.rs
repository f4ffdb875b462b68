use async_trait::async_trait;
use shared::error::AppResult;

use crate::model::{
    booking::{event::CreateBooking, Booking},
    id::{BookingId, UserId},
};

#[async_trait]
pub trait BookingRepository: Send + Sync {
    // 予約を登録する
    async fn create(&self, event: CreateBooking) -> AppResult<BookingId>;
    // すべての予約を新しい順に取得する
    async fn find_all(&self) -> AppResult<Vec<Booking>>;
    // ユーザー ID に紐づく予約を登録順に取得する
    async fn find_by_user_id(&self, user_id: UserId) -> AppResult<Vec<Booking>>;
}
