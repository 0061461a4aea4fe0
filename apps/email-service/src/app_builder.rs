//! # アプリケーション構築
//!
//! State の初期化とルーター構築を担当する。
//! `main.rs` は設定読み込み・DB 接続・サーバー起動に集中する。

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get},
};
use contas_email_infra::{db::ConnectionChecker, repository::EmailAccountRepository};
use contas_email_shared::RunMode;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    config::AppConfig,
    handler::{
        EmailState,
        ReadinessState,
        create_email,
        delete_email,
        get_email,
        health_check,
        list_emails,
        readiness_check,
    },
};

/// ルーター構築時に参照するオプション
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AppOptions {
    pub mode:            RunMode,
    /// `GET /emails/{id}` を登録するか
    pub enable_read_one: bool,
}

impl From<&AppConfig> for AppOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            mode:            config.mode,
            enable_read_one: config.enable_read_one,
        }
    }
}

/// ルーターを構築する
///
/// 全ルートに CORS（全オリジン許可）とリクエストトレースを適用する。
pub fn build_app(
    options: AppOptions,
    repository: Arc<dyn EmailAccountRepository>,
    checker: Arc<dyn ConnectionChecker>,
) -> Router {
    let email_state = Arc::new(EmailState { repository });
    let readiness_state = Arc::new(ReadinessState { checker });

    let mut email_item = delete(delete_email);
    if options.enable_read_one {
        email_item = email_item.get(get_email);
    }

    if options.mode == RunMode::Debug {
        for (method, path) in route_table(options) {
            tracing::debug!("route: {method:<6} {path}");
        }
    }

    Router::new()
        .route("/health", get(health_check))
        .merge(
            Router::new()
                .route("/health/ready", get(readiness_check))
                .with_state(readiness_state),
        )
        .merge(
            Router::new()
                .route("/emails", get(list_emails).post(create_email))
                .route("/emails/{id}", email_item)
                .with_state(email_state),
        )
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// 登録されるルートの一覧（メソッド, パス）
pub fn route_table(options: AppOptions) -> Vec<(&'static str, &'static str)> {
    let mut routes = vec![
        ("GET", "/health"),
        ("GET", "/health/ready"),
        ("GET", "/emails"),
        ("POST", "/emails"),
        ("DELETE", "/emails/{id}"),
    ];
    if options.enable_read_one {
        routes.push(("GET", "/emails/{id}"));
    }
    routes
}
