use derive_new::new;

use crate::model::{id::UserId, role::Role};

#[derive(new)]
pub struct CreateUser {
    pub user_name: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(new)]
pub struct UpdateUserProfile {
    pub user_id: UserId,
    pub user_name: String,
    pub email: String,
    pub role: Role,
}

#[derive(new)]
pub struct DeleteUser {
    pub user_id: UserId,
}
