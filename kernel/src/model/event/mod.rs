use shared::error::{AppError, AppResult};

use crate::model::id::EventId;

pub mod event;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub event_id: EventId,
    pub event_name: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub policy: BookingPolicy,
}

// イベントごとの予約ルール
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookingPolicy {
    pub requires_adult: bool,
    pub max_tickets_per_booking: i64,
}

impl BookingPolicy {
    // 大人必須チェックを先に、枚数上限チェックをあとに評価する
    // （両方違反している場合は大人エラーを返す）
    pub fn validate(&self, num_adults: i64, num_children: i64) -> AppResult<()> {
        if self.requires_adult && num_adults < 1 {
            return Err(AppError::AdultRequired);
        }
        // 合計は飽和加算。i64 を超える申込は上限超過として扱う
        if num_adults.saturating_add(num_children) > self.max_tickets_per_booking {
            return Err(AppError::TooManyTickets(self.max_tickets_per_booking));
        }
        Ok(())
    }
}

// events テーブルが空のときに投入する初期データ
pub fn sample_events() -> Vec<event::CreateEvent> {
    use event::CreateEvent;
    vec![
        CreateEvent::new(
            "Christmas Circus".into(),
            "A festive circus show with acrobats, clowns, and live music.".into(),
            "24 December 2025, 18:00".into(),
            "Main Big Top Arena".into(),
            true,
            8,
        ),
        CreateEvent::new(
            "Santa Steam Train".into(),
            "Ride the historic steam train with Santa and his elves.".into(),
            "25 December 2025, 14:00".into(),
            "Park Railway Station".into(),
            true,
            8,
        ),
        CreateEvent::new(
            "Winter Water Show".into(),
            "Illuminated fountains, music, and light projections over the lake.".into(),
            "26 December 2025, 19:30".into(),
            "Park Lakeside Stage".into(),
            false,
            10,
        ),
    ]
}
