//! # Email Service 設定
//!
//! 環境変数からサービスの設定を読み込む。
//! 起動時に一度だけ構築し、ルーター構築関数に値として渡す（グローバル変数は使わない）。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `DB_SERVER` | **Yes** | - | DB ホスト |
//! | `DB_PORT` | No | `5432` | DB ポート |
//! | `DB_USER` | **Yes** | - | DB ユーザー |
//! | `DB_PASSWORD` | No | 空文字 | DB パスワード |
//! | `DB_NAME` | **Yes** | - | DB 名 |
//! | `HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `PORT` | No | `5050` | HTTP ポート |
//! | `APP_MODE` | No | `release` | 動作モード（`debug` / `release` / `test`） |
//! | `ENABLE_READ_ONE` | No | `false` | `GET /emails/{id}` を有効にする |

use std::{env, fmt};

use contas_email_shared::RunMode;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5050;
const DEFAULT_DB_PORT: u16 = 5432;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    #[error("{name} は有効なポート番号である必要があります: {value:?}")]
    InvalidPort { name: &'static str, value: String },
}

/// HTTP サーバー設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// データベース接続設定
///
/// `Debug` 出力ではパスワードを伏せる。
#[derive(Clone, PartialEq, Eq)]
pub struct DatabaseConfig {
    pub host:     String,
    pub port:     u16,
    pub user:     String,
    pub password: String,
    pub name:     String,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("user", &self.user)
            .field("password", &"********")
            .field("name", &self.name)
            .finish()
    }
}

/// サービス全体の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub server:          ServerConfig,
    pub database:        DatabaseConfig,
    pub mode:            RunMode,
    /// `GET /emails/{id}` を登録するか
    pub enable_read_one: bool,
}

impl AppConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 任意のキー検索関数から設定を読み込む
    ///
    /// 空文字列の値は未設定として扱う。
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).filter(|v| !v.is_empty());
        let required = |key: &'static str| get(key).ok_or(ConfigError::Missing(key));
        let port = |key: &'static str, default: u16| match get(key) {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort { name: key, value }),
            None => Ok(default),
        };

        Ok(Self {
            server:          ServerConfig {
                host: get("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: port("PORT", DEFAULT_PORT)?,
            },
            database:        DatabaseConfig {
                host:     required("DB_SERVER")?,
                port:     port("DB_PORT", DEFAULT_DB_PORT)?,
                user:     required("DB_USER")?,
                password: get("DB_PASSWORD").unwrap_or_default(),
                name:     required("DB_NAME")?,
            },
            mode:            get("APP_MODE").map_or_else(RunMode::default, |v| RunMode::parse(&v)),
            enable_read_one: get("ENABLE_READ_ONE").is_some_and(|v| parse_flag(&v)),
        })
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}
