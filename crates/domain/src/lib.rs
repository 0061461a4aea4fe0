//! # Contas Email ドメイン層
//!
//! メールアカウント記録（`contas_email` テーブルの 1 行）を表現するドメインモデル。
//!
//! ## 依存関係の方向
//!
//! ```text
//! service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、外部サービス）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`email_account`] - メールアカウントエンティティと識別子

pub mod email_account;

pub use email_account::{EmailAccount, EmailAccountId, NewEmailAccount};
