//! # リポジトリ実装
//!
//! ## 設計方針
//!
//! - **トレイト経由のアクセス**: ハンドラは `Arc<dyn EmailAccountRepository>` のみに依存する
//! - **1 操作 1 SQL 文**: 複数文にまたがるトランザクションは持たない

pub mod email_account_repository;

pub use email_account_repository::{EmailAccountRepository, PostgresEmailAccountRepository};
