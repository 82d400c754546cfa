//! # API エラーハンドリング
//!
//! HTTP API のエラー定義と、axum レスポンスへの変換。
//!
//! 評価処理自体は全域関数でありエラーを持たないため、ここで扱うのは
//! トランスポート境界のエラー（不正なリクエストボディ）と想定外の
//! 内部エラーのみ。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

/// API 層で発生するエラー
///
/// `IntoResponse` を実装しているため、axum が自動的に HTTP レスポンスに変換する。
#[derive(Debug, Error)]
pub enum ApiError {
    /// リクエストボディが不正（400 Bad Request）
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// 内部サーバーエラー（500 Internal Server Error）
    #[error("内部サーバーエラー")]
    Internal(#[from] anyhow::Error),
}

/// RFC 7807 準拠のエラーレスポンス
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// エラーの種類を識別する URI
    #[serde(rename = "type")]
    pub error_type: String,
    /// エラーの概要
    pub title: String,
    /// HTTP ステータスコード
    pub status: u16,
    /// エラーの詳細情報（オプション）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            ApiError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error_type: "about:blank".to_string(),
                    title: "バリデーションエラー".to_string(),
                    status: 400,
                    detail: Some(msg),
                },
            ),
            ApiError::Internal(err) => {
                // セキュリティ: 内部エラー詳細はログのみ
                tracing::error!("内部エラー: {:?}", err);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error_type: "about:blank".to_string(),
                        title: "内部サーバーエラー".to_string(),
                        status: 500,
                        detail: None,
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}
