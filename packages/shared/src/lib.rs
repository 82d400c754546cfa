//! # MPHE 共有ユーティリティ
//!
//! サービス間で共有される共通レスポンス型を提供する。
//!
//! ## 設計方針
//!
//! - ビジネスロジックを含まない純粋な型定義のみを配置
//! - 外部クレートへの依存は最小限に抑える

pub mod health;

pub use health::HealthResponse;
