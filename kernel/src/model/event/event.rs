use derive_new::new;

#[derive(Debug, new)]
pub struct CreateEvent {
    pub event_name: String,
    pub description: String,
    pub date: String,
    pub location: String,
    pub requires_adult: bool,
    pub max_tickets_per_booking: i64,
}
