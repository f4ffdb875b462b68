use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Form,
};
use axum_extra::extract::{
    cookie::{Cookie, SameSite},
    CookieJar,
};
use garde::Validate;
use kernel::model::{
    auth::{event::CreateToken, SessionToken},
    role::Role,
    user::event::CreateUser,
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};

use crate::{
    extractor::{AuthorizedUser, SESSION_COOKIE},
    flash,
    model::auth::{AdminRegisterForm, LoginForm, RegisterForm},
    view,
};

fn session_cookie(token: SessionToken) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.0))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}

pub async fn register_page(jar: CookieJar) -> impl IntoResponse {
    let (jar, notice) = flash::take_notice(jar);
    (jar, view::register_page(notice.as_deref()))
}

pub async fn register(
    State(registry): State<AppRegistry>,
    jar: CookieJar,
    Form(form): Form<RegisterForm>,
) -> AppResult<Response> {
    form.validate(&())?;

    let event = CreateUser::new(form.name, form.email, form.password, Role::User);
    match registry.user_repository().create(event).await {
        Ok(_) => Ok((
            flash::set_notice(jar, "Registration successful, please log in"),
            Redirect::to("/login"),
        )
            .into_response()),
        Err(e @ AppError::EmailTaken) => Ok((
            flash::set_notice(jar, &e.to_string()),
            Redirect::to("/register"),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}

pub async fn login_page(jar: CookieJar) -> impl IntoResponse {
    let (jar, notice) = flash::take_notice(jar);
    (jar, view::login_page(notice.as_deref()))
}

pub async fn login(
    State(registry): State<AppRegistry>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    match registry
        .auth_repository()
        .verify_user(&form.email, &form.password)
        .await
    {
        Ok(user_id) => {
            let token = registry
                .auth_repository()
                .create_token(CreateToken::new(user_id))
                .await?;
            let jar = jar.add(session_cookie(token));
            let jar = flash::set_notice(jar, "Logged in successfully");
            Ok((jar, Redirect::to("/")).into_response())
        }
        // 認証失敗はリダイレクトせず、メッセージ付きで同じ画面を出し直す
        Err(e @ AppError::InvalidCredentials) => {
            Ok(view::login_page(Some(&e.to_string())).into_response())
        }
        Err(e) => Err(e),
    }
}

pub async fn logout(
    user: AuthorizedUser,
    State(registry): State<AppRegistry>,
    jar: CookieJar,
) -> AppResult<Response> {
    registry
        .auth_repository()
        .delete_token(user.session_token)
        .await?;
    let jar = jar.remove(Cookie::build(SESSION_COOKIE).path("/").build());
    let jar = flash::set_notice(jar, "Logged out");
    Ok((jar, Redirect::to("/")).into_response())
}

pub async fn admin_login_page(jar: CookieJar) -> impl IntoResponse {
    let (jar, notice) = flash::take_notice(jar);
    (jar, view::admin_login_page(notice.as_deref()))
}

pub async fn admin_login(
    State(registry): State<AppRegistry>,
    jar: CookieJar,
    Form(form): Form<LoginForm>,
) -> AppResult<Response> {
    // ① まず通常の認証を通す
    let user_id = match registry
        .auth_repository()
        .verify_user(&form.email, &form.password)
        .await
    {
        Ok(user_id) => user_id,
        Err(e @ AppError::InvalidCredentials) => {
            return Ok((
                flash::set_notice(jar, &e.to_string()),
                Redirect::to("/admin_login"),
            )
                .into_response());
        }
        Err(e) => return Err(e),
    };

    // ② 管理者でなければセッションを発行しない
    let user = registry
        .user_repository()
        .find_current_user(user_id)
        .await?
        .ok_or(AppError::InvalidCredentials)?;
    if user.role != Role::Admin {
        return Ok((
            flash::set_notice(jar, "This account is not authorised as admin"),
            Redirect::to("/admin_login"),
        )
            .into_response());
    }

    // ③ 管理者ダッシュボードへ
    let token = registry
        .auth_repository()
        .create_token(CreateToken::new(user_id))
        .await?;
    let jar = jar.add(session_cookie(token));
    let jar = flash::set_notice(jar, "Admin login successful");
    Ok((jar, Redirect::to("/admin")).into_response())
}

pub async fn admin_register_page(jar: CookieJar) -> impl IntoResponse {
    let (jar, notice) = flash::take_notice(jar);
    (jar, view::admin_register_page(notice.as_deref()))
}

pub async fn admin_register(
    State(registry): State<AppRegistry>,
    jar: CookieJar,
    Form(form): Form<AdminRegisterForm>,
) -> AppResult<Response> {
    form.validate(&())?;

    if form.password != form.confirm_password {
        return Ok((
            flash::set_notice(jar, &AppError::PasswordMismatch.to_string()),
            Redirect::to("/admin_register"),
        )
            .into_response());
    }

    let event = CreateUser::new(form.name, form.email, form.password, Role::Admin);
    match registry.user_repository().create(event).await {
        Ok(_) => Ok((
            flash::set_notice(jar, "Admin account created successfully. Please log in."),
            Redirect::to("/admin_login"),
        )
            .into_response()),
        Err(e @ AppError::EmailTaken) => Ok((
            flash::set_notice(jar, &e.to_string()),
            Redirect::to("/admin_register"),
        )
            .into_response()),
        Err(e) => Err(e),
    }
}
