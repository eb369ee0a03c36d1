//! リモート経費ストアのシーム
//!
//! ネットワーク越しの永続化は2フェーズで行う:
//! 1. `create` — レシートファイルをマルチパートで保存し参照を得る
//! 2. `update` — 組み立て済みレコードで最終化（パッチ）する
use crate::features::bills::models::{Bill, CreateBillBody, NewReceiptPayload};
use crate::shared::errors::AppError;
use async_trait::async_trait;

/// リモート経費ストア
#[async_trait]
pub trait BillStore: Send + Sync {
    /// レシートファイルを保存し、参照を含む生レスポンスを返す
    async fn create(&self, payload: NewReceiptPayload) -> Result<CreateBillBody, AppError>;

    /// レコードを最終化（更新）する
    async fn update(&self, bill: &Bill) -> Result<(), AppError>;

    /// 全ユーザーの経費申請を取得する
    async fn list(&self) -> Result<Vec<Bill>, AppError>;
}
