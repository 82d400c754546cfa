//! # MPHE API サーバー
//!
//! マイクロプラスチック健康評価システムのバックエンド API。
//!
//! ## 役割
//!
//! フロントエンドのフォームから送信されたフィールド群を受け取り、
//! 合計スコアとリスク階層を返す。状態を持たず、永続化も行わない。
//!
//! ```text
//! ┌──────────────┐     POST /evaluate      ┌──────────────┐
//! │   Browser    │────────────────────────▶│   MPHE API   │
//! │  (form UI)   │◀────────────────────────│  port: 3000  │
//! └──────────────┘  { total, health }      └──────────────┘
//! ```
//!
//! フロントエンドは静的アセットとして別途配信されるため、この API は
//! 任意のオリジンからのクロスオリジンリクエストを許可する。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `API_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `API_PORT` | No | ポート番号（デフォルト: `3000`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env ファイルを使用）
//! cargo run -p mphe-api
//!
//! # 本番環境（環境変数を直接指定）
//! API_PORT=8080 cargo run -p mphe-api --release
//! ```

mod config;
mod error;
mod handler;

use std::net::SocketAddr;

use axum::{
    Router,
    routing::{get, post},
};
use config::ApiConfig;
use handler::{evaluate_record, health_check};
use tokio::net::TcpListener;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// ルーターを構築する
///
/// フロントエンドは任意のオリジンから POST するため、CORS は全開放とする。
/// 認証もクレデンシャルも扱わないエンドポイントなので制限する理由がない。
fn app() -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health_check))
        .route("/evaluate", post(evaluate_record))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// API サーバーのエントリーポイント
///
/// 以下の順序で初期化を行う:
///
/// 1. 環境変数の読み込み（.env ファイル）
/// 2. トレーシングの初期化
/// 3. アプリケーション設定の読み込み
/// 4. ルーターの構築
/// 5. HTTP サーバーの起動
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env ファイルを読み込む（存在する場合）
    // 本番環境では .env ファイルは使用せず、環境変数を直接設定する
    dotenvy::dotenv().ok();

    // トレーシング初期化
    // RUST_LOG 環境変数でログレベルを制御可能
    // 例: RUST_LOG=debug,tower_http=trace
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,mphe=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 設定読み込み
    let config = ApiConfig::from_env();

    tracing::info!(
        "API サーバーを起動します: {}:{}",
        config.host,
        config.port
    );

    // ルーター構築
    let app = app();

    // サーバー起動
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .expect("アドレスのパースに失敗しました");

    let listener = TcpListener::bind(addr).await?;
    tracing::info!("API サーバーが起動しました: {}", addr);

    // Graceful shutdown は axum::serve が自動的に処理する
    axum::serve(listener, app).await?;

    Ok(())
}
