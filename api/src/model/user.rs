use derive_new::new;
use garde::Validate;
use kernel::model::{id::UserId, role::Role, user::event::UpdateUserProfile};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleName {
    Admin,
    User,
}

impl From<Role> for RoleName {
    fn from(value: Role) -> Self {
        match value {
            Role::Admin => Self::Admin,
            Role::User => Self::User,
        }
    }
}

impl From<RoleName> for Role {
    fn from(value: RoleName) -> Self {
        match value {
            RoleName::Admin => Self::Admin,
            RoleName::User => Self::User,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct EditUserForm {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(skip)]
    pub role: RoleName,
}

#[derive(new)]
pub struct EditUserFormWithUserId(UserId, EditUserForm);

impl From<EditUserFormWithUserId> for UpdateUserProfile {
    fn from(value: EditUserFormWithUserId) -> Self {
        let EditUserFormWithUserId(user_id, EditUserForm { name, email, role }) = value;
        UpdateUserProfile {
            user_id,
            user_name: name,
            email,
            role: Role::from(role),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateAdminForm {
    #[garde(length(min = 1))]
    pub name: String,
    #[garde(email)]
    pub email: String,
    #[garde(length(min = 1))]
    pub password: String,
}
