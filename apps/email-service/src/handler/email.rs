//! # メールアカウントハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /emails` - 全件取得
//! - `POST /emails` - 登録
//! - `DELETE /emails/{id}` - 削除（冪等）
//! - `GET /emails/{id}` - 1 件取得（`ENABLE_READ_ONE=true` の場合のみ登録）
//!
//! ## JSON フィールド名
//!
//! ワイヤ上のフィールド名は既存クライアントとの互換のため
//! `id` / `conta` / `empresa_id` / `crd_id` / `tipo_conta` を維持する。

use std::sync::Arc;

use axum::{
    Json,
    extract::{
        Path,
        State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
    response::IntoResponse,
};
use contas_email_domain::{EmailAccount, EmailAccountId, NewEmailAccount};
use contas_email_infra::repository::EmailAccountRepository;
use serde::{Deserialize, Serialize};

use crate::error::{EMAIL_NOT_FOUND, EmailServiceError, INVALID_ID, INVALID_JSON};

/// メールアカウント API の共有状態
pub struct EmailState {
    pub repository: Arc<dyn EmailAccountRepository>,
}

// --- リクエスト/レスポンス型 ---

/// メールアカウント DTO
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailDto {
    pub id:         i64,
    pub conta:      String,
    pub empresa_id: i64,
    pub crd_id:     Option<String>,
    pub tipo_conta: String,
}

impl From<&EmailAccount> for EmailDto {
    fn from(account: &EmailAccount) -> Self {
        Self {
            id:         account.id().as_i64(),
            conta:      account.account().to_string(),
            empresa_id: account.company_id(),
            crd_id:     account.credential_id().map(str::to_string),
            tipo_conta: account.account_type().to_string(),
        }
    }
}

/// 登録リクエスト
///
/// `id` は整数であることだけを検査し、値は使わない（採番は DB が行う）。
/// `crd_id` は省略または `null` で「認証情報なし」。
#[derive(Debug, Deserialize)]
pub struct CreateEmailRequest {
    #[serde(default)]
    pub id:         Option<i64>,
    pub conta:      String,
    pub empresa_id: i64,
    #[serde(default)]
    pub crd_id:     Option<String>,
    pub tipo_conta: String,
}

impl From<CreateEmailRequest> for NewEmailAccount {
    fn from(req: CreateEmailRequest) -> Self {
        Self {
            account:       req.conta,
            company_id:    req.empresa_id,
            credential_id: req.crd_id,
            account_type:  req.tipo_conta,
        }
    }
}

/// 削除完了メッセージ
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

// --- ハンドラ ---

/// GET /emails
///
/// 全件を DB の返す順序のまま返す。0 件なら `[]`。
pub async fn list_emails(
    State(state): State<Arc<EmailState>>,
) -> Result<impl IntoResponse, EmailServiceError> {
    let accounts = state.repository.find_all().await?;

    let items: Vec<EmailDto> = accounts.iter().map(EmailDto::from).collect();
    Ok((StatusCode::OK, Json(items)))
}

/// POST /emails
///
/// ## レスポンス
///
/// - `201 Created`: 入力値に採番済みの `id` を付けて返す
/// - `400 Bad Request`: JSON が不正、必須フィールド欠落、型不一致
/// - `500 Internal Server Error`: 挿入失敗
pub async fn create_email(
    State(state): State<Arc<EmailState>>,
    payload: Result<Json<CreateEmailRequest>, JsonRejection>,
) -> Result<impl IntoResponse, EmailServiceError> {
    let Json(req) = payload.map_err(|rejection| {
        tracing::debug!(%rejection, "リクエストボディを解釈できません");
        EmailServiceError::BadRequest(INVALID_JSON)
    })?;

    let account = state.repository.insert(req.into()).await?;
    tracing::info!(id = %account.id(), "メールアカウントを登録しました");

    Ok((StatusCode::CREATED, Json(EmailDto::from(&account))))
}

/// DELETE /emails/{id}
///
/// 該当行がなくても 200 を返す。
pub async fn delete_email(
    State(state): State<Arc<EmailState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, EmailServiceError> {
    let id = parse_id(id)?;

    let deleted = state.repository.delete(id).await?;
    tracing::info!(%id, deleted, "メールアカウントを削除しました");

    Ok((
        StatusCode::OK,
        Json(MessageResponse {
            message: "Email deleted".to_string(),
        }),
    ))
}

/// GET /emails/{id}
///
/// ## レスポンス
///
/// - `200 OK`: 該当レコード
/// - `400 Bad Request`: ID が整数でない
/// - `404 Not Found`: 該当なし
pub async fn get_email(
    State(state): State<Arc<EmailState>>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<impl IntoResponse, EmailServiceError> {
    let id = parse_id(id)?;

    let account = state
        .repository
        .find_by_id(id)
        .await?
        .ok_or(EmailServiceError::NotFound(EMAIL_NOT_FOUND))?;

    Ok((StatusCode::OK, Json(EmailDto::from(&account))))
}

fn parse_id(id: Result<Path<i64>, PathRejection>) -> Result<EmailAccountId, EmailServiceError> {
    let Path(id) = id.map_err(|rejection| {
        tracing::debug!(%rejection, "パスパラメータを解釈できません");
        EmailServiceError::BadRequest(INVALID_ID)
    })?;
    Ok(EmailAccountId::new(id))
}
