//! # Contas Email Service
//!
//! メールアカウント（`contas_email` テーブル）の一覧・登録・削除を提供する HTTP サービス。
//!
//! - [`config`]: 環境変数からの設定読み込み
//! - [`handler`]: axum ハンドラ
//! - [`app_builder`]: State の組み立てとルーター構築
//! - [`error`]: エラーと HTTP レスポンスへの変換

pub mod app_builder;
pub mod config;
pub mod error;
pub mod handler;
