use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

// フラッシュメッセージ用 Cookie 名。リダイレクト時にセットし、画面描画時に読み捨てる
pub const FLASH_COOKIE: &str = "flash";

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Email already registered")]
    EmailTaken,
    #[error("Invalid email or password")]
    InvalidCredentials,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("At least one adult is required for this event")]
    AdultRequired,
    #[error("Maximum {0} tickets allowed in one booking")]
    TooManyTickets(i64),
    #[error("{0}")]
    EntityNotFound(String),
    #[error("Please log in to access this page.")]
    UnauthenticatedError,
    #[error("Admin access required")]
    ForbiddenOperation,
    #[error("{0}")]
    UnprocessableEntity(String),
    #[error("{0}")]
    ValidationError(#[from] garde::Report),
    #[error("failed to run a database transaction")]
    TransactionError(#[source] sqlx::Error),
    #[error("database query failed")]
    SpecificOperationError(#[source] sqlx::Error),
    #[error("{0}")]
    NoRowsAffectedError(String),
    #[error("{0}")]
    KeyValueStoreError(#[from] redis::RedisError),
    #[error("{0}")]
    BcryptError(#[from] bcrypt::BcryptError),
    #[error("{0}")]
    ConversionEntityError(String),
    #[error("failed to run database migrations")]
    MigrationError(#[source] sqlx::migrate::MigrateError),
    #[error("failed to store an uploaded file")]
    FileStoreError(#[source] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status_code = match &self {
            // 未ログインはログイン画面へ、管理者権限なしは管理者ログイン画面へ
            // リダイレクトする（ステータスコードだけを返さない）
            AppError::UnauthenticatedError => {
                return flash_redirect("/login", &self.to_string());
            }
            AppError::ForbiddenOperation => {
                return flash_redirect("/admin_login", &self.to_string());
            }
            AppError::EntityNotFound(_) => StatusCode::NOT_FOUND,
            AppError::EmailTaken
            | AppError::InvalidCredentials
            | AppError::PasswordMismatch
            | AppError::AdultRequired
            | AppError::TooManyTickets(_)
            | AppError::UnprocessableEntity(_)
            | AppError::ValidationError(_) => StatusCode::UNPROCESSABLE_ENTITY,
            e @ (AppError::TransactionError(_)
            | AppError::SpecificOperationError(_)
            | AppError::NoRowsAffectedError(_)
            | AppError::KeyValueStoreError(_)
            | AppError::BcryptError(_)
            | AppError::ConversionEntityError(_)
            | AppError::MigrationError(_)
            | AppError::FileStoreError(_)) => {
                tracing::error!(
                    error.cause_chain = ?e,
                    error.message = %e,
                    "unexpected error happened"
                );
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        status_code.into_response()
    }
}

fn flash_redirect(location: &str, notice: &str) -> Response {
    let cookie = format!("{FLASH_COOKIE}={}; Path=/", urlencoding::encode(notice));
    (
        StatusCode::SEE_OTHER,
        [
            (header::LOCATION, location.to_string()),
            (header::SET_COOKIE, cookie),
        ],
    )
        .into_response()
}
