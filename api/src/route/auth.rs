use axum::{routing::get, Router};
use registry::AppRegistry;

use crate::handler::auth::{
    admin_login, admin_login_page, admin_register, admin_register_page, login, login_page, logout,
    register, register_page,
};

pub fn build_auth_routers() -> Router<AppRegistry> {
    Router::new()
        .route("/register", get(register_page).post(register))
        .route("/login", get(login_page).post(login))
        .route("/logout", get(logout))
        .route("/admin_login", get(admin_login_page).post(admin_login))
        .route(
            "/admin_register",
            get(admin_register_page).post(admin_register),
        )
}
