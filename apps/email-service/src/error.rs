//! # Email Service エラー定義
//!
//! ハンドラが返すエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | HTTP ステータス | detail |
//! |--------|-----------------|--------|
//! | `BadRequest` | 400 | 固定メッセージ（`Invalid JSON` / `Invalid ID`） |
//! | `NotFound` | 404 | 固定メッセージ |
//! | `Database` | 500 | ドライバのエラー文字列そのまま |
//!
//! ## ワイヤ形式の変更
//!
//! 旧サービスのエラーボディは `{"error": "<msg>"}` だった。
//! 本サービスは RFC 9457 形式 `{"type", "title", "status", "detail"}` を返し、
//! 旧 `error` の文字列は `detail` にそのまま入る。
//! `.error` を読むクライアントは `.detail` に移行する必要がある。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use contas_email_infra::InfraError;
use contas_email_shared::ErrorResponse;
use thiserror::Error;

/// 不正な JSON ボディ
pub const INVALID_JSON: &str = "Invalid JSON";
/// 整数として解釈できないパスパラメータ
pub const INVALID_ID: &str = "Invalid ID";
/// 該当レコードなし
pub const EMAIL_NOT_FOUND: &str = "Email not found";

/// Email Service で発生するエラー
#[derive(Debug, Error)]
pub enum EmailServiceError {
    /// クライアント入力の不備
    #[error("不正なリクエスト: {0}")]
    BadRequest(&'static str),

    /// リソースが見つからない
    #[error("リソースが見つかりません: {0}")]
    NotFound(&'static str),

    /// データベースエラー
    #[error("データベースエラー: {0}")]
    Database(#[from] InfraError),
}

impl IntoResponse for EmailServiceError {
    fn into_response(self) -> Response {
        let body = match self {
            EmailServiceError::BadRequest(msg) => ErrorResponse::bad_request(msg),
            EmailServiceError::NotFound(msg) => ErrorResponse::not_found(msg),
            EmailServiceError::Database(e) => {
                tracing::error!(error = ?e, "データベースエラー");
                ErrorResponse::internal_error(e.driver_message())
            }
        };

        let status =
            StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(body)).into_response()
    }
}
