use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::booking::{book_event, book_event_page, my_bookings};

pub fn build_booking_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/book/:event_id", get(book_event_page).post(book_event))
        .route("/my_bookings", get(my_bookings))
}
