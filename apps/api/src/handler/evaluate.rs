//! # 評価 API ハンドラ
//!
//! フォーム送信されたフィールド群を受け取り、リスク評価結果を返す。
//!
//! ## エンドポイント
//!
//! ```text
//! POST /evaluate
//! ```
//!
//! ## リクエスト例
//!
//! ```json
//! { "exposure": 50, "intake": "60" }
//! ```
//!
//! ## レスポンス例
//!
//! ```json
//! { "total": 110.0, "health": "high-risk" }
//! ```
//!
//! レスポンスはエンベロープなしのフラットな形式。フロントエンドの
//! フォーム UI がそのまま表示に使うことを想定している。

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use mphe_domain::{InputRecord, evaluate};

use crate::error::ApiError;

/// 評価エンドポイント
///
/// ボディの JSON オブジェクトを [`InputRecord`] として受け取り、
/// ドメイン層の [`evaluate`] に委譲する。評価自体は全域関数なので、
/// このハンドラが失敗するのはボディが JSON オブジェクトとして
/// 解釈できない場合（400）だけ。
///
/// 個々のフィールド値の型は検証しない。数値に変換できない値は
/// ドメイン層で寄与 0 として扱われる。
#[tracing::instrument(skip_all)]
pub async fn evaluate_record(
    body: Result<Json<InputRecord>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(fields) = body.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    let result = evaluate(&fields);

    tracing::debug!(
        field_count = fields.len(),
        total = result.total,
        "評価が完了しました"
    );

    Ok((StatusCode::OK, Json(result)).into_response())
}

#[cfg(test)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Method, Request, header},
        routing::post,
    };
    use pretty_assertions::assert_eq;
    use tower::ServiceExt;

    use super::*;

    fn create_test_app() -> Router {
        Router::new().route("/evaluate", post(evaluate_record))
    }

    fn post_json(body: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/evaluate")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    // テストケース

    #[tokio::test]
    async fn test_数値フィールドの合計で高リスクを返す() {
        let sut = create_test_app();

        let response = sut
            .oneshot(post_json(r#"{ "a": 50, "b": 60 }"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["total"], 110.0);
        assert_eq!(json["health"], "high-risk");
    }

    #[tokio::test]
    async fn test_合計100ちょうどは低リスクを返す() {
        let sut = create_test_app();

        let response = sut.oneshot(post_json(r#"{ "a": 100 }"#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["total"], 100.0);
        assert_eq!(json["health"], "low-risk");
    }

    #[tokio::test]
    async fn test_数値でない値は寄与0として評価される() {
        let sut = create_test_app();

        let response = sut
            .oneshot(post_json(r#"{ "a": "oops", "b": 30 }"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["total"], 30.0);
        assert_eq!(json["health"], "low-risk");
    }

    #[tokio::test]
    async fn test_空オブジェクトは合計0で低リスクを返す() {
        let sut = create_test_app();

        let response = sut.oneshot(post_json("{}")).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["total"], 0.0);
        assert_eq!(json["health"], "low-risk");
    }

    #[tokio::test]
    async fn test_壊れたjsonボディは400を返す() {
        let sut = create_test_app();

        let response = sut.oneshot(post_json(r#"{ "a": "#)).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["status"], 400);
        assert_eq!(json["title"], "バリデーションエラー");
    }

    #[tokio::test]
    async fn test_オブジェクト以外のボディは400を返す() {
        let sut = create_test_app();

        let response = sut.oneshot(post_json("[1, 2, 3]")).await.unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}
