use std::{env, path::PathBuf};

use anyhow::Result;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub auth: AuthConfig,
    pub storage: StorageConfig,
    pub seed: SeedConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            filename: var_or("DATABASE_FILENAME", "ticketbooth.db"),
        };
        let redis = RedisConfig {
            host: var_or("REDIS_HOST", "localhost"),
            port: var_or("REDIS_PORT", "6379").parse()?,
        };
        let auth = AuthConfig {
            // セッショントークンの有効期限（秒）
            ttl: var_or("AUTH_TOKEN_TTL", "86400").parse()?,
        };
        let storage = StorageConfig {
            upload_dir: PathBuf::from(var_or("UPLOAD_DIR", "uploads")),
        };
        let seed = SeedConfig {
            admin_email: env::var("BOOTSTRAP_ADMIN_EMAIL").ok(),
        };
        Ok(Self {
            database,
            redis,
            auth,
            storage,
            seed,
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub filename: String,
}

#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub ttl: u64,
}

#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub upload_dir: PathBuf,
}

#[derive(Debug, Clone)]
pub struct SeedConfig {
    // 起動時に管理者へ昇格させるメールアドレス。未設定なら何もしない
    pub admin_email: Option<String>,
}
