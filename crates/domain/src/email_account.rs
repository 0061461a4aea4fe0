//! # メールアカウント
//!
//! 企業に紐づくメールアカウントの記録。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 備考 |
//! |---|------------|------|
//! | [`EmailAccount`] | メールアカウント（conta） | 永続化済みの 1 レコード |
//! | [`NewEmailAccount`] | 登録入力 | ID を持たない。ID は挿入時に DB が採番する |
//! | [`EmailAccountId`] | 識別子 | DB の identity 列。作成後は不変 |
//!
//! ## 設計方針
//!
//! - **ID は DB が一度だけ採番する**: 登録入力 [`NewEmailAccount`] は `id` フィールドを持たず、
//!   クライアントが送った ID が挿入に使われることは型レベルで起こらない
//! - **認証情報 ID は任意**: `credential_id` は `Option` で表現し、番兵値は使わない
//! - **検証しない**: 形式・一意性・参照整合性はアプリケーション層では検査しない
//!
//! ## 使用例
//!
//! ```rust
//! use contas_email_domain::{EmailAccount, EmailAccountId, NewEmailAccount};
//!
//! let input = NewEmailAccount {
//!    account:       "financeiro@example.com".to_string(),
//!    company_id:    42,
//!    credential_id: None,
//!    account_type:  "imap".to_string(),
//! };
//!
//! // 挿入後、DB が返した ID と組み合わせる
//! let account = EmailAccount::from_new(EmailAccountId::new(1), input);
//! assert_eq!(account.id().as_i64(), 1);
//! assert!(account.credential_id().is_none());
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// メールアカウント ID（DB の identity 列）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
#[serde(transparent)]
pub struct EmailAccountId(i64);

impl EmailAccountId {
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

/// メールアカウントの登録入力
///
/// 挿入前の値。`id` は存在しない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmailAccount {
    /// メールアドレス / ログイン識別子
    pub account:       String,
    /// 所属企業の ID（存在確認はしない）
    pub company_id:    i64,
    /// 紐づく認証情報の ID。`None` なら認証情報なし
    pub credential_id: Option<String>,
    /// アカウント種別（自由記述）
    pub account_type:  String,
}

/// メールアカウントエンティティ
///
/// # 不変条件
///
/// - `id` は挿入時に DB が一度だけ採番し、以後変わらない
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAccount {
    id:            EmailAccountId,
    account:       String,
    company_id:    i64,
    credential_id: Option<String>,
    account_type:  String,
}

impl EmailAccount {
    /// 挿入で採番された ID と登録入力からエンティティを組み立てる
    pub fn from_new(id: EmailAccountId, input: NewEmailAccount) -> Self {
        Self {
            id,
            account: input.account,
            company_id: input.company_id,
            credential_id: input.credential_id,
            account_type: input.account_type,
        }
    }

    /// DB の行からエンティティを復元する
    pub fn from_db(
        id: EmailAccountId,
        account: String,
        company_id: i64,
        credential_id: Option<String>,
        account_type: String,
    ) -> Self {
        Self {
            id,
            account,
            company_id,
            credential_id,
            account_type,
        }
    }

    pub fn id(&self) -> EmailAccountId {
        self.id
    }

    pub fn account(&self) -> &str {
        &self.account
    }

    pub fn company_id(&self) -> i64 {
        self.company_id
    }

    pub fn credential_id(&self) -> Option<&str> {
        self.credential_id.as_deref()
    }

    pub fn account_type(&self) -> &str {
        &self.account_type
    }
}
