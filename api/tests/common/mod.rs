use std::{
    collections::HashMap,
    str::FromStr,
    sync::{Arc, Mutex},
};

use adapter::{
    database::ConnectionPool,
    repository::{
        booking::BookingRepositoryImpl, event::EventRepositoryImpl,
        health::HealthCheckRepositoryImpl, user::UserRepositoryImpl,
    },
    storage::PhotoStorageImpl,
};
use api::route::routes;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, Method, Request},
    response::Response,
    Router,
};
use kernel::{
    model::{
        auth::{event::CreateToken, SessionToken},
        event::sample_events,
        id::UserId,
        role::Role,
        user::{event::CreateUser, User},
    },
    repository::{auth::AuthRepository, event::EventRepository},
};
use registry::AppRegistry;
use shared::error::{AppError, AppResult};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tempfile::TempDir;
use tower::ServiceExt;

pub const BOUNDARY: &str = "test-boundary";

// Redis を立てずにセッションを持ち回るテスト用ストア。
// パスワード照合だけは本物と同じく DB を見る
pub struct InMemorySessionStore {
    db: ConnectionPool,
    sessions: Mutex<HashMap<String, UserId>>,
}

impl InMemorySessionStore {
    pub fn new(db: ConnectionPool) -> Self {
        Self {
            db,
            sessions: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl AuthRepository for InMemorySessionStore {
    async fn fetch_user_id_from_token(&self, token: &SessionToken) -> AppResult<Option<UserId>> {
        Ok(self.sessions.lock().unwrap().get(&token.0).copied())
    }

    async fn verify_user(&self, email: &str, password: &str) -> AppResult<UserId> {
        let row: Option<(i64, String)> =
            sqlx::query_as("SELECT user_id, password_hash FROM users WHERE email = ?")
                .bind(email)
                .fetch_optional(self.db.inner_ref())
                .await
                .map_err(AppError::SpecificOperationError)?;
        let (user_id, password_hash) = row.ok_or(AppError::InvalidCredentials)?;
        if !bcrypt::verify(password, &password_hash)? {
            return Err(AppError::InvalidCredentials);
        }
        Ok(UserId::from(user_id))
    }

    async fn create_token(&self, event: CreateToken) -> AppResult<SessionToken> {
        let token = uuid::Uuid::new_v4().simple().to_string();
        self.sessions
            .lock()
            .unwrap()
            .insert(token.clone(), event.user_id);
        Ok(SessionToken(token))
    }

    async fn delete_token(&self, token: SessionToken) -> AppResult<()> {
        self.sessions.lock().unwrap().remove(&token.0);
        Ok(())
    }
}

pub struct TestApp {
    pub router: Router,
    pub registry: AppRegistry,
    pub upload_dir: TempDir,
}

// インメモリ SQLite の上にアプリ一式を組み立てる。
// 起動時と同じ 3 つのイベントを登録しておく
pub async fn test_app() -> anyhow::Result<TestApp> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await?;
    sqlx::migrate!("../migrations").run(&pool).await?;
    let pool = ConnectionPool::new(pool);

    let event_repository = EventRepositoryImpl::new(pool.clone());
    for event in sample_events() {
        event_repository.create(event).await?;
    }

    let upload_dir = tempfile::tempdir()?;
    let registry = AppRegistry::from_parts(
        Arc::new(HealthCheckRepositoryImpl::new(pool.clone())),
        Arc::new(UserRepositoryImpl::new(pool.clone())),
        Arc::new(event_repository),
        Arc::new(BookingRepositoryImpl::new(pool.clone())),
        Arc::new(InMemorySessionStore::new(pool.clone())),
        Arc::new(PhotoStorageImpl::new(upload_dir.path().to_path_buf())),
    );
    let router = routes().with_state(registry.clone());

    Ok(TestApp {
        router,
        registry,
        upload_dir,
    })
}

impl TestApp {
    pub async fn request(&self, req: Request<Body>) -> Response {
        self.router.clone().oneshot(req).await.unwrap()
    }

    pub async fn get(&self, uri: &str) -> Response {
        self.request(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
    }

    pub async fn get_with_session(&self, uri: &str, token: &str) -> Response {
        self.request(
            Request::builder()
                .uri(uri)
                .header(header::COOKIE, format!("session_token={token}"))
                .body(Body::empty())
                .unwrap(),
        )
        .await
    }

    pub async fn post_form(&self, uri: &str, body: &str, session: Option<&str>) -> Response {
        let mut builder = Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
        if let Some(token) = session {
            builder = builder.header(header::COOKIE, format!("session_token={token}"));
        }
        self.request(builder.body(Body::from(body.to_string())).unwrap())
            .await
    }

    pub async fn post_multipart(&self, uri: &str, body: Vec<u8>, session: &str) -> Response {
        self.request(
            Request::builder()
                .method(Method::POST)
                .uri(uri)
                .header(
                    header::CONTENT_TYPE,
                    format!("multipart/form-data; boundary={BOUNDARY}"),
                )
                .header(header::COOKIE, format!("session_token={session}"))
                .body(Body::from(body))
                .unwrap(),
        )
        .await
    }

    pub async fn register_user(&self, name: &str, email: &str, password: &str, role: Role) -> User {
        self.registry
            .user_repository()
            .create(CreateUser::new(
                name.into(),
                email.into(),
                password.into(),
                role,
            ))
            .await
            .unwrap()
    }

    pub async fn login(&self, email: &str, password: &str) -> String {
        let res = self
            .post_form("/login", &format!("email={email}&password={password}"), None)
            .await;
        session_cookie_value(&res).expect("login should set a session cookie")
    }
}

pub fn location(res: &Response) -> &str {
    res.headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

fn cookie_value(res: &Response, name: &str) -> Option<String> {
    res.headers()
        .get_all(header::SET_COOKIE)
        .iter()
        .find_map(|header_value| {
            let raw = header_value.to_str().ok()?;
            let (cookie_name, rest) = raw.split_once('=')?;
            if cookie_name != name {
                return None;
            }
            Some(rest.split(';').next().unwrap_or(rest).to_string())
        })
}

pub fn session_cookie_value(res: &Response) -> Option<String> {
    cookie_value(res, "session_token")
}

pub fn flash_message(res: &Response) -> Option<String> {
    let raw = cookie_value(res, "flash")?;
    Some(
        urlencoding::decode(&raw)
            .map(|decoded| decoded.into_owned())
            .unwrap_or(raw),
    )
}

pub async fn body_text(res: Response) -> String {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
    let mut body = Vec::new();
    for (name, value) in fields {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
    }
    if let Some((filename, content)) = file {
        body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"adult_photo\"; filename=\"{filename}\"\r\nContent-Type: image/png\r\n\r\n"
            )
            .as_bytes(),
        );
        body.extend_from_slice(content);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    body
}
