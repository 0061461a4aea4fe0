//! # Contas Email Service サーバー
//!
//! ## 起動シーケンス
//!
//! 1. `.env` 読み込み（存在すれば）
//! 2. 環境変数から設定を構築
//! 3. トレーシング初期化（`APP_MODE` に応じて JSON / pretty）
//! 4. PostgreSQL 接続プール作成と疎通確認（失敗したら起動しない）
//! 5. ルーター構築とリッスン開始
//!
//! ## 起動方法
//!
//! ```bash
//! DB_SERVER=localhost DB_USER=postgres DB_NAME=contas cargo run -p contas-email-service
//! ```

use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use contas_email_infra::{
    db::{self, ConnectionChecker, PgConnectionChecker},
    repository::PostgresEmailAccountRepository,
};
use contas_email_service::{
    app_builder::{AppOptions, build_app, route_table},
    config::AppConfig,
};
use contas_email_shared::observability::init_tracing;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("設定の読み込みに失敗しました")?;

    init_tracing(config.mode);

    tracing::info!(
        mode = %config.mode,
        enable_read_one = config.enable_read_one,
        "Contas Email Service サーバーを起動します: {}:{}",
        config.server.host,
        config.server.port
    );
    tracing::debug!(database = ?config.database, "データベース設定");

    let options = db::connect_options(
        &config.database.host,
        config.database.port,
        &config.database.user,
        &config.database.password,
        &config.database.name,
    );
    let pool = db::create_pool(options)
        .await
        .context("データベース接続に失敗しました")?;

    let checker = PgConnectionChecker::new(pool.clone());
    checker
        .ping()
        .await
        .context("データベースの疎通確認に失敗しました")?;
    tracing::info!("データベースに接続しました");

    let app_options = AppOptions::from(&config);
    let app = build_app(
        app_options,
        Arc::new(PostgresEmailAccountRepository::new(pool)),
        Arc::new(checker),
    );
    tracing::info!(routes = route_table(app_options).len(), "ルーターを構築しました");

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("バインドアドレスが不正です")?;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("{addr} にバインドできません"))?;
    tracing::info!("Contas Email Service サーバーが起動しました: {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
