//! # テスト用モック
//!
//! ハンドラテストで使用するインメモリ実装。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! contas-email-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use contas_email_domain::{EmailAccount, EmailAccountId, NewEmailAccount};

use crate::{db::ConnectionChecker, error::InfraError, repository::EmailAccountRepository};

// ===== MockEmailAccountRepository =====

#[derive(Default)]
struct MockState {
    accounts: Vec<EmailAccount>,
    last_id:  i64,
}

/// インメモリの EmailAccountRepository
///
/// ID は identity 列と同様に 1 から単調増加で採番する。
/// [`failing`](Self::failing) で作成すると、全操作が同じメッセージで失敗する。
#[derive(Clone, Default)]
pub struct MockEmailAccountRepository {
    state:   Arc<Mutex<MockState>>,
    failure: Option<String>,
}

impl MockEmailAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// 全操作が `message` で失敗するリポジトリを作成する
    pub fn failing(message: impl Into<String>) -> Self {
        Self {
            state:   Arc::default(),
            failure: Some(message.into()),
        }
    }

    /// 保持している全レコードのスナップショット
    pub fn snapshot(&self) -> Vec<EmailAccount> {
        self.state.lock().unwrap().accounts.clone()
    }

    fn check_failure(&self) -> Result<(), InfraError> {
        match &self.failure {
            Some(message) => Err(InfraError::unexpected(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl EmailAccountRepository for MockEmailAccountRepository {
    async fn find_all(&self) -> Result<Vec<EmailAccount>, InfraError> {
        self.check_failure()?;
        Ok(self.snapshot())
    }

    async fn find_by_id(&self, id: EmailAccountId) -> Result<Option<EmailAccount>, InfraError> {
        self.check_failure()?;
        Ok(self
            .state
            .lock()
            .unwrap()
            .accounts
            .iter()
            .find(|a| a.id() == id)
            .cloned())
    }

    async fn insert(&self, input: NewEmailAccount) -> Result<EmailAccount, InfraError> {
        self.check_failure()?;
        let mut state = self.state.lock().unwrap();
        state.last_id += 1;
        let account = EmailAccount::from_new(EmailAccountId::new(state.last_id), input);
        state.accounts.push(account.clone());
        Ok(account)
    }

    async fn delete(&self, id: EmailAccountId) -> Result<bool, InfraError> {
        self.check_failure()?;
        let mut state = self.state.lock().unwrap();
        let before = state.accounts.len();
        state.accounts.retain(|a| a.id() != id);
        Ok(state.accounts.len() < before)
    }
}

// ===== MockConnectionChecker =====

/// 固定結果を返す ConnectionChecker
#[derive(Clone, Copy)]
pub struct MockConnectionChecker {
    healthy: bool,
}

impl MockConnectionChecker {
    pub fn healthy() -> Self {
        Self { healthy: true }
    }

    pub fn unhealthy() -> Self {
        Self { healthy: false }
    }
}

#[async_trait]
impl ConnectionChecker for MockConnectionChecker {
    async fn ping(&self) -> Result<(), InfraError> {
        if self.healthy {
            Ok(())
        } else {
            Err(InfraError::unexpected("connection refused"))
        }
    }
}
