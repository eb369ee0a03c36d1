//! 共有モジュール
//!
//! 機能横断で使用するエラー型・設定・HTTPクライアント・ルート定義。
pub mod api_client;
pub mod config;
pub mod errors;
pub mod routes;
