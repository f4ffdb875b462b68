use derive_new::new;

use crate::model::id::{EventId, UserId};

#[derive(new)]
pub struct CreateBooking {
    pub user_id: UserId,
    pub event_id: EventId,
    pub num_adults: i64,
    pub num_children: i64,
    pub seat_type: String,
    pub adult_photo_filename: Option<String>,
}
