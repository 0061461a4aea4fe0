//! # HTTP リクエストハンドラ
//!
//! 各ハンドラはサブモジュールに配置し、ここで re-export する。

pub mod email;
pub mod health;

pub use email::{EmailState, create_email, delete_email, get_email, list_emails};
pub use health::{ReadinessState, health_check, readiness_check};
