use chrono::{DateTime, Utc};

use crate::model::id::{BookingId, EventId, UserId};

pub mod event;

// 一覧画面用に、イベント情報と予約者情報を結合した予約データ
#[derive(Debug)]
pub struct Booking {
    pub booking_id: BookingId,
    pub booked_by: UserId,
    pub user_name: String,
    pub user_email: String,
    pub num_adults: i64,
    pub num_children: i64,
    pub seat_type: String,
    pub adult_photo_filename: Option<String>,
    pub created_at: DateTime<Utc>,
    pub event: BookingEvent,
}

#[derive(Debug)]
pub struct BookingEvent {
    pub event_id: EventId,
    pub event_name: String,
    pub date: String,
    pub location: String,
}
