//! # Contas Email インフラ層
//!
//! PostgreSQL との接続と、メールアカウントの永続化を担当する。
//!
//! ## 責務
//!
//! - **データベース接続**: 接続プールの作成と疎通確認
//! - **リポジトリ実装**: [`repository::EmailAccountRepository`] の PostgreSQL 実装
//! - **テスト支援**: `test-utils` feature でインメモリ実装（[`mock`]）を公開
//!
//! ## 依存関係
//!
//! ```text
//! service → infra → domain
//! ```
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use contas_email_infra::{db, repository::PostgresEmailAccountRepository};
//!
//! let options = db::connect_options("localhost", 5432, "app", "secret", "contas");
//! let pool = db::create_pool(options).await?;
//! let repository = PostgresEmailAccountRepository::new(pool);
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
