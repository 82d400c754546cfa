//! # 健康リスク評価
//!
//! フォームから送信されたフィールド群を合計し、固定しきい値でリスク階層を
//! 判定する。システムの中核ロジックはこのモジュールだけに存在する。
//!
//! ## 評価ルール
//!
//! 1. 各フィールド値を数値に変換する（変換できない値は 0）
//! 2. 変換結果を合計して `total` とする
//! 3. `total > 100` なら高リスク、それ以外（100 ちょうどを含む）は低リスク
//!
//! フィールド名は一切解釈しない。キーごとの重み付けは行わず、送信された
//! 全フィールドの単純合計のみでスコアを決める。

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// リスク判定のしきい値
///
/// `total` がこの値を超えた場合のみ高リスクと判定する。
/// しきい値ちょうどは低リスク側に属する。
pub const RISK_THRESHOLD: f64 = 100.0;

/// クライアントが送信するフラットなフィールド集合
///
/// キーは呼び出し側が自由に決める。許可リストによる検証は行わず、
/// 値の型も制限しない。リクエストごとに構築され、レスポンス生成後に破棄される。
pub type InputRecord = serde_json::Map<String, Value>;

/// リスク階層
///
/// 合計スコアのみから決まる二値分類。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RiskTier {
    /// 高リスク（`total > 100`）
    #[serde(rename = "high-risk")]
    HighRisk,
    /// 低リスク（`total <= 100`）
    #[serde(rename = "low-risk")]
    LowRisk,
}

impl RiskTier {
    /// 合計スコアからリスク階層を判定する
    ///
    /// しきい値 [`RISK_THRESHOLD`] との比較のみで決まる純粋関数。
    pub fn from_total(total: f64) -> Self {
        if total > RISK_THRESHOLD {
            Self::HighRisk
        } else {
            Self::LowRisk
        }
    }
}

/// 評価結果
///
/// リクエストごとに 1 回構築され、そのままシリアライズされて破棄される。
/// `total` は常に有限値（変換関数が非有限値を 0 に潰すため）。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct EvaluationResult {
    /// 全フィールドの数値変換後の合計
    pub total:  f64,
    /// 合計から決まるリスク階層
    pub health: RiskTier,
}

/// JSON 値を数値の寄与分に変換する
///
/// 変換ルール:
///
/// | 入力 | 結果 |
/// |------|------|
/// | 数値 | そのまま |
/// | 数値として解釈できる文字列 | パース結果 |
/// | 空文字列・数値でない文字列 | 0 |
/// | `true` / `false` | 1 / 0 |
/// | `null`・配列・オブジェクト | 0 |
///
/// 不正な入力でリクエストを失敗させるのではなく、寄与 0 として扱う。
/// `"inf"` のような非有限値へのパース結果も 0 に潰し、合計が常に
/// 有限値であることを保証する。
pub fn coerce_to_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()).unwrap_or(0.0),
        Value::String(s) => s
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|n| n.is_finite())
            .unwrap_or(0.0),
        Value::Bool(b) => {
            if *b {
                1.0
            } else {
                0.0
            }
        }
        Value::Null | Value::Array(_) | Value::Object(_) => 0.0,
    }
}

/// 入力レコードを評価する
///
/// 全フィールドを [`coerce_to_number`] で変換して合計し、
/// [`RiskTier::from_total`] で分類する。
///
/// どんな入力に対しても必ず結果を返す全域関数であり、副作用を持たない。
/// 空のレコードは `total = 0`・低リスクになる。
///
/// ## 使用例
///
/// ```
/// use mphe_domain::{RiskTier, evaluate};
/// use serde_json::json;
///
/// let fields = json!({ "exposure": 50, "intake": 60 })
///     .as_object()
///     .cloned()
///     .unwrap();
/// let result = evaluate(&fields);
///
/// assert_eq!(result.total, 110.0);
/// assert_eq!(result.health, RiskTier::HighRisk);
/// ```
pub fn evaluate(fields: &InputRecord) -> EvaluationResult {
    let total: f64 = fields.values().map(coerce_to_number).sum();

    EvaluationResult {
        total,
        health: RiskTier::from_total(total),
    }
}
