pub mod auth;
pub mod booking;
pub mod event;
pub mod id;
pub mod photo;
pub mod role;
pub mod user;
