use kernel::model::{
    event::{BookingPolicy, Event},
    id::EventId,
};

#[derive(sqlx::FromRow)]
pub struct EventRow {
    pub event_id: i64,
    pub event_name: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub requires_adult: bool,
    pub max_tickets_per_booking: i64,
}

impl From<EventRow> for Event {
    fn from(value: EventRow) -> Self {
        let EventRow {
            event_id,
            event_name,
            description,
            date,
            location,
            requires_adult,
            max_tickets_per_booking,
        } = value;
        Event {
            event_id: EventId::from(event_id),
            event_name,
            description,
            date,
            location,
            policy: BookingPolicy {
                requires_adult,
                max_tickets_per_booking,
            },
        }
    }
}
