//! # Observability 基盤
//!
//! 動作モード（`APP_MODE`）の定義と、トレーシング初期化を提供する。
//!
//! 動作モードごとにログ出力形式とデフォルトのログレベルが決まる:
//!
//! | モード | 出力形式 | デフォルトフィルタ |
//! |--------|----------|--------------------|
//! | `debug` | Pretty | `debug,tower_http=debug` |
//! | `release` | JSON | `info` |
//! | `test` | Pretty | `warn` |
//!
//! `RUST_LOG` が設定されている場合はそちらが優先される。

use std::str::FromStr;

/// サービスの動作モード
///
/// 値が未設定または不正な場合は [`Release`](RunMode::Release) にフォールバックする。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, strum::Display, strum::EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RunMode {
    /// 開発向け（詳細ログ、ルート一覧の出力）
    Debug,
    /// 本番向け（JSON ログ）
    #[default]
    Release,
    /// テスト向け（警告以上のみ）
    Test,
}

impl RunMode {
    /// 文字列から動作モードをパースする
    ///
    /// 不正な値の場合は [`Release`](RunMode::Release) にフォールバックし、
    /// stderr に警告を出力する（トレーシング初期化前に呼ばれるため）。
    pub fn parse(s: &str) -> Self {
        RunMode::from_str(s).unwrap_or_else(|_| {
            eprintln!("WARNING: unknown APP_MODE={s:?}, falling back to release");
            Self::Release
        })
    }

    /// このモードで使用するログ出力形式
    pub fn log_format(self) -> LogFormat {
        match self {
            Self::Release => LogFormat::Json,
            Self::Debug | Self::Test => LogFormat::Pretty,
        }
    }

    /// `RUST_LOG` 未設定時のフィルタ
    pub fn default_filter(self) -> &'static str {
        match self {
            Self::Debug => "debug,tower_http=debug",
            Self::Release => "info",
            Self::Test => "warn",
        }
    }
}

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// JSON 形式（本番環境向け）
    Json,
    /// 人間が読みやすい形式（開発環境向け）
    Pretty,
}

/// トレーシングを初期化する
///
/// プロセス起動時に一度だけ呼び出す。
/// `tracing_error::ErrorLayer` を含むため、`InfraError` の `SpanTrace` が記録される。
#[cfg(feature = "observability")]
pub fn init_tracing(mode: RunMode) {
    use tracing_subscriber::{Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| mode.default_filter().into());

    let fmt_layer = match mode.log_format() {
        LogFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .flatten_event(true)
            .with_target(true)
            .with_current_span(true)
            .with_span_list(false)
            .boxed(),
        LogFormat::Pretty => tracing_subscriber::fmt::layer().boxed(),
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .with(tracing_error::ErrorLayer::default())
        .init();
}
