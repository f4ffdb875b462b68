pub mod admin;
pub mod auth;
pub mod booking;
pub mod event;
pub mod health;

use axum::Router;
use registry::AppRegistry;

use self::{
    admin::build_admin_routers, auth::build_auth_routers, booking::build_booking_routers,
    event::build_event_routers, health::build_health_check_routers,
};

pub fn routes() -> Router<AppRegistry> {
    Router::new()
        .merge(build_health_check_routers())
        .merge(build_event_routers())
        .merge(build_auth_routers())
        .merge(build_booking_routers())
        .merge(build_admin_routers())
}
