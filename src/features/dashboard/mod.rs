//! 管理者ダッシュボード機能モジュール
//!
//! ステータスバケットの開閉・チケット選択・承認/却下の決定を扱います。
pub mod cards;
pub mod review;

pub use review::{
    filtered_bills, Bucket, DashboardController, DashboardView, Decision, ReviewFilter,
};
