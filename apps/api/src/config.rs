//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。

use std::env;

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バインドアドレス
    pub host: String,
    /// ポート番号
    pub port: u16,
}

impl ApiConfig {
    /// 環境変数から設定を読み込む
    ///
    /// すべての項目にデフォルト値があるため、環境変数なしでも起動できる。
    /// プロセス起動時に 1 回だけ呼び出し、結果をブートストラップに
    /// 明示的に渡す。グローバル変数としては保持しない。
    pub fn from_env() -> Self {
        Self {
            host: env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("API_PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .expect("API_PORT は有効なポート番号である必要があります"),
        }
    }
}
