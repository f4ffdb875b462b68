use axum::{
    routing::{get, post},
    Router,
};
use registry::AppRegistry;

use crate::handler::admin::{
    admin_bookings, admin_dashboard, create_admin, create_admin_page, delete_user, edit_user,
    edit_user_page,
};

pub fn build_admin_routers() -> Router<AppRegistry> {
    let routers = Router::new()
        .route("/", get(admin_dashboard))
        .route("/bookings", get(admin_bookings))
        .route("/user/:user_id/edit", get(edit_user_page).post(edit_user))
        .route("/user/:user_id/delete", post(delete_user))
        .route("/create_admin", get(create_admin_page).post(create_admin));

    Router::new().nest("/admin", routers)
}
