use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::CookieJar;
use garde::Validate;
use kernel::model::{
    id::UserId,
    role::Role,
    user::event::{CreateUser, DeleteUser},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::AdminUser,
    flash,
    model::user::{CreateAdminForm, EditUserForm, EditUserFormWithUserId},
    view,
};

pub async fn admin_dashboard(
    _admin: AdminUser,
    State(registry): State<AppRegistry>,
    jar: CookieJar,
) -> AppResult<Response> {
    let users = registry.user_repository().find_all().await?;
    let (jar, notice) = flash::take_notice(jar);
    Ok((jar, view::admin_dashboard_page(notice.as_deref(), &users)).into_response())
}

pub async fn admin_bookings(
    _admin: AdminUser,
    State(registry): State<AppRegistry>,
    jar: CookieJar,
) -> AppResult<Response> {
    let bookings = registry.booking_repository().find_all().await?;
    let (jar, notice) = flash::take_notice(jar);
    Ok((jar, view::admin_bookings_page(notice.as_deref(), &bookings)).into_response())
}

pub async fn edit_user_page(
    _admin: AdminUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
    jar: CookieJar,
) -> AppResult<Response> {
    let user = registry
        .user_repository()
        .find_by_id(user_id)
        .await?
        .ok_or_else(|| AppError::EntityNotFound(format!("User ({user_id}) was not found")))?;
    let (jar, notice) = flash::take_notice(jar);
    Ok((jar, view::edit_user_page(notice.as_deref(), &user)).into_response())
}

pub async fn edit_user(
    _admin: AdminUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
    jar: CookieJar,
    Form(form): Form<EditUserForm>,
) -> AppResult<Response> {
    form.validate(&())?;

    registry
        .user_repository()
        .update_profile(EditUserFormWithUserId::new(user_id, form).into())
        .await?;
    Ok((
        flash::set_notice(jar, "User updated"),
        Redirect::to("/admin"),
    )
        .into_response())
}

pub async fn delete_user(
    _admin: AdminUser,
    Path(user_id): Path<UserId>,
    State(registry): State<AppRegistry>,
    jar: CookieJar,
) -> AppResult<Response> {
    registry
        .user_repository()
        .delete(DeleteUser::new(user_id))
        .await?;
    Ok((
        flash::set_notice(jar, "User deleted"),
        Redirect::to("/admin"),
    )
        .into_response())
}

pub async fn create_admin_page(_admin: AdminUser, jar: CookieJar) -> impl IntoResponse {
    let (jar, notice) = flash::take_notice(jar);
    (jar, view::create_admin_page(notice.as_deref()))
}

pub async fn create_admin(
    _admin: AdminUser,
    State(registry): State<AppRegistry>,
    jar: CookieJar,
    Form(form): Form<CreateAdminForm>,
) -> AppResult<Response> {
    form.validate(&())?;

    let event = CreateUser::new(form.name, form.email, form.password, Role::Admin);
    match registry.user_repository().create(event).await {
        Ok(_) => Ok((
            flash::set_notice(jar, "New admin account created successfully"),
            Redirect::to("/admin"),
        )
            .into_response()),
        // この画面だけ文言が他と揃っていない
        Err(AppError::EmailTaken) => Ok((
            flash::set_notice(jar, "Email is already registered"),
            Redirect::to("/admin/create_admin"),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}
