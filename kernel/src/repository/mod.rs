pub mod auth;
pub mod booking;
pub mod event;
pub mod health;
pub mod photo;
pub mod user;
