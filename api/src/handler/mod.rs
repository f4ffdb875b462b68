pub mod admin;
pub mod auth;
pub mod booking;
pub mod event;
pub mod health;
