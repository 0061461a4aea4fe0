//! # PostgreSQL データベース接続管理
//!
//! 接続プールの作成と疎通確認を行う。
//!
//! ## 設計方針
//!
//! - **接続プール**: 起動時に一度だけ作成し、全リクエストで共有する
//! - **文ごとの接続取得**: リポジトリは `&PgPool` に対して直接クエリを発行し、
//!   接続の取得・返却は sqlx に任せる
//! - **接続情報は個別の値から組み立てる**: ホスト・ポート・ユーザー・パスワード・DB 名を
//!   URL 文字列に連結せず [`PgConnectOptions`] に渡す（パスワードのエスケープが不要）

use std::time::Duration;

use async_trait::async_trait;
use sqlx::{
    PgPool,
    postgres::{PgConnectOptions, PgPoolOptions},
};

use crate::error::InfraError;

/// 個別の接続情報から [`PgConnectOptions`] を組み立てる
pub fn connect_options(
    host: &str,
    port: u16,
    user: &str,
    password: &str,
    database: &str,
) -> PgConnectOptions {
    PgConnectOptions::new()
        .host(host)
        .port(port)
        .username(user)
        .password(password)
        .database(database)
}

/// PostgreSQL 接続プールを作成する
///
/// `connect_with` は最初の接続を確立してから返るため、
/// DB に到達できない場合はここでエラーになる（起動失敗）。
///
/// # 設定値
///
/// - `max_connections(10)`
/// - `acquire_timeout(5秒)`
pub async fn create_pool(options: PgConnectOptions) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(5))
        .connect_with(options)
        .await
}

/// DB 疎通確認
///
/// Readiness Check から利用する。
#[async_trait]
pub trait ConnectionChecker: Send + Sync {
    async fn ping(&self) -> Result<(), InfraError>;
}

/// PostgreSQL 用 ConnectionChecker 実装
#[derive(Debug, Clone)]
pub struct PgConnectionChecker {
    pool: PgPool,
}

impl PgConnectionChecker {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ConnectionChecker for PgConnectionChecker {
    #[tracing::instrument(skip_all, level = "debug")]
    async fn ping(&self) -> Result<(), InfraError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_connect_optionsに接続情報が反映される() {
        let options = connect_options("db.internal", 6543, "app", "p@ss;word", "contas");

        assert_eq!(options.get_host(), "db.internal");
        assert_eq!(options.get_port(), 6543);
        assert_eq!(options.get_username(), "app");
        assert_eq!(options.get_database(), Some("contas"));
    }

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_connection_checker_traitはsendとsyncを実装している() {
        assert_send_sync::<Box<dyn ConnectionChecker>>();
    }
}
