//! # EmailAccountRepository
//!
//! `contas_email` テーブルへのアクセスを担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **ID は `RETURNING id` で取得**: 挿入と同じ文で identity 列の値を受け取る。
//!   「最後に挿入された ID」を別途問い合わせる方式は使わない
//! - **`crd_id` の有無で INSERT を分岐**: `None` の場合は列自体を省略し、DB のデフォルト（NULL）に任せる
//! - **削除は冪等**: 該当行がなくてもエラーにしない

use async_trait::async_trait;
use contas_email_domain::{EmailAccount, EmailAccountId, NewEmailAccount};
use sqlx::PgPool;

use crate::error::InfraError;

/// メールアカウントリポジトリトレイト
#[async_trait]
pub trait EmailAccountRepository: Send + Sync {
    /// 全件を取得する（順序は DB 任せ）
    async fn find_all(&self) -> Result<Vec<EmailAccount>, InfraError>;

    /// ID で検索する
    async fn find_by_id(&self, id: EmailAccountId) -> Result<Option<EmailAccount>, InfraError>;

    /// 1 行挿入し、DB が採番した ID を含むエンティティを返す
    async fn insert(&self, input: NewEmailAccount) -> Result<EmailAccount, InfraError>;

    /// ID で削除する
    ///
    /// 戻り値は実際に行が削除されたかどうか。該当なしでも `Ok(false)` を返す。
    async fn delete(&self, id: EmailAccountId) -> Result<bool, InfraError>;
}

/// `contas_email` の 1 行
#[derive(Debug, sqlx::FromRow)]
struct EmailAccountRow {
    id:         i64,
    conta:      String,
    empresa_id: i64,
    crd_id:     Option<String>,
    tipo_conta: String,
}

impl From<EmailAccountRow> for EmailAccount {
    fn from(row: EmailAccountRow) -> Self {
        EmailAccount::from_db(
            EmailAccountId::new(row.id),
            row.conta,
            row.empresa_id,
            row.crd_id,
            row.tipo_conta,
        )
    }
}

/// PostgreSQL 実装の EmailAccountRepository
#[derive(Debug, Clone)]
pub struct PostgresEmailAccountRepository {
    pool: PgPool,
}

impl PostgresEmailAccountRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EmailAccountRepository for PostgresEmailAccountRepository {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn find_all(&self) -> Result<Vec<EmailAccount>, InfraError> {
        let rows = sqlx::query_as::<_, EmailAccountRow>(
            r#"
            SELECT id, conta, empresa_id, crd_id, tipo_conta
            FROM contas_email
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(EmailAccount::from).collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(&self, id: EmailAccountId) -> Result<Option<EmailAccount>, InfraError> {
        let row = sqlx::query_as::<_, EmailAccountRow>(
            r#"
            SELECT id, conta, empresa_id, crd_id, tipo_conta
            FROM contas_email
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(EmailAccount::from))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(has_credential = input.credential_id.is_some()))]
    async fn insert(&self, input: NewEmailAccount) -> Result<EmailAccount, InfraError> {
        let id: i64 = match &input.credential_id {
            Some(credential_id) => {
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO contas_email (conta, empresa_id, crd_id, tipo_conta)
                    VALUES ($1, $2, $3, $4)
                    RETURNING id
                    "#,
                )
                .bind(&input.account)
                .bind(input.company_id)
                .bind(credential_id)
                .bind(&input.account_type)
                .fetch_one(&self.pool)
                .await?
            }
            None => {
                sqlx::query_scalar::<_, i64>(
                    r#"
                    INSERT INTO contas_email (conta, empresa_id, tipo_conta)
                    VALUES ($1, $2, $3)
                    RETURNING id
                    "#,
                )
                .bind(&input.account)
                .bind(input.company_id)
                .bind(&input.account_type)
                .fetch_one(&self.pool)
                .await?
            }
        };

        Ok(EmailAccount::from_new(EmailAccountId::new(id), input))
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn delete(&self, id: EmailAccountId) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            DELETE FROM contas_email
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
