//! # MPHE ドメイン層
//!
//! マイクロプラスチック健康評価のスコアリングロジックを定義する。
//!
//! ## 設計方針
//!
//! - トランスポート層（HTTP、JSON ボディの取り出し）には一切依存しない
//! - 評価は全域関数として定義する: どんな入力に対しても必ず結果を返し、
//!   エラー型を持たない
//! - 数値変換ルール（変換できない値は 0 扱い）は暗黙の型変換に頼らず、
//!   明示的な関数 [`evaluation::coerce_to_number`] として公開する
//!
//! ## モジュール構成
//!
//! - [`evaluation`] - 入力レコードの合計とリスク判定

pub mod evaluation;

pub use evaluation::{EvaluationResult, InputRecord, RISK_THRESHOLD, RiskTier, evaluate};
