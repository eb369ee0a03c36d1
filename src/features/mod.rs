//! 機能別モジュール
//!
//! 各機能モジュールは、その機能に関連するモデル・コントローラー・
//! シームを含む自己完結型のユニットです。
pub mod auth;
pub mod bills;
pub mod dashboard;
