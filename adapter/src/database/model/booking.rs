use kernel::model::{
    booking::{Booking, BookingEvent},
    id::{BookingId, EventId, UserId},
};
use sqlx::types::chrono::{DateTime, Utc};

// 一覧取得時に使う型。bookings に users と events を JOIN した形
#[derive(sqlx::FromRow)]
pub struct BookingRow {
    pub booking_id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub email: String,
    pub num_adults: i64,
    pub num_children: i64,
    pub seat_type: String,
    pub adult_photo_filename: Option<String>,
    pub created_at: DateTime<Utc>,
    pub event_id: i64,
    pub event_name: String,
    pub date: String,
    pub location: String,
}

impl From<BookingRow> for Booking {
    fn from(value: BookingRow) -> Self {
        let BookingRow {
            booking_id,
            user_id,
            user_name,
            email,
            num_adults,
            num_children,
            seat_type,
            adult_photo_filename,
            created_at,
            event_id,
            event_name,
            date,
            location,
        } = value;
        Booking {
            booking_id: BookingId::from(booking_id),
            booked_by: UserId::from(user_id),
            user_name,
            user_email: email,
            num_adults,
            num_children,
            seat_type,
            adult_photo_filename,
            created_at,
            event: BookingEvent {
                event_id: EventId::from(event_id),
                event_name,
                date,
                location,
            },
        }
    }
}
