use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::event::show_event_list;

pub fn build_event_routers() -> Router<AppRegistry> {
    Router::new().route("/", get(show_event_list))
}
