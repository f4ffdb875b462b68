use async_trait::async_trait;
use axum::{extract::FromRequestParts, http::request::Parts};
use axum_extra::extract::CookieJar;
use kernel::model::{auth::SessionToken, id::UserId, role::Role, user::User};
use registry::AppRegistry;
use shared::error::AppError;

// セッショントークンを載せる Cookie の名前
pub const SESSION_COOKIE: &str = "session_token";

pub struct AuthorizedUser {
    pub session_token: SessionToken,
    pub user: User,
}

impl AuthorizedUser {
    pub fn id(&self) -> UserId {
        self.user.user_id
    }

    pub fn is_admin(&self) -> bool {
        self.user.role == Role::Admin
    }
}

#[async_trait]
impl FromRequestParts<AppRegistry> for AuthorizedUser {
    type Rejection = AppError;

    // Cookie のトークンからログイン中のユーザーを引き当てる
    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let cookie = jar
            .get(SESSION_COOKIE)
            .ok_or(AppError::UnauthenticatedError)?;
        let session_token = SessionToken(cookie.value().to_string());

        let user_id = registry
            .auth_repository()
            .fetch_user_id_from_token(&session_token)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;
        let user = registry
            .user_repository()
            .find_current_user(user_id)
            .await?
            .ok_or(AppError::UnauthenticatedError)?;

        Ok(Self {
            session_token,
            user,
        })
    }
}

pub struct AdminUser(pub AuthorizedUser);

#[async_trait]
impl FromRequestParts<AppRegistry> for AdminUser {
    type Rejection = AppError;

    // 未ログインも権限不足も区別せず管理者ログインへ流す
    async fn from_request_parts(
        parts: &mut Parts,
        registry: &AppRegistry,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthorizedUser::from_request_parts(parts, registry)
            .await
            .map_err(|_| AppError::ForbiddenOperation)?;
        if !user.is_admin() {
            return Err(AppError::ForbiddenOperation);
        }
        Ok(Self(user))
    }
}
