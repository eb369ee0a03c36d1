//! 経費精算クライアントコア
//!
//! 従業員による経費申請（レシート添付・2フェーズ永続化）と、
//! 管理者によるレビュー（承認・却下）のワークフローを提供します。
//! ルーティング・画面テンプレート・認証は外部コラボレーターとして
//! シーム（トレイト）越しに注入されます。

pub mod features;
pub mod shared;

#[cfg(test)]
pub(crate) mod test_support;

pub use features::auth::{MemorySession, SessionStore};
pub use features::bills::{
    format_display_date, sort_bills_for_display, Bill, BillForm, BillStatus, BillStore,
    DisplayBill, FileCandidate, NewBillController, ReceiptRef, ReceiptUploader, SubmissionState,
    SubmissionView,
};
pub use features::dashboard::{
    Bucket, DashboardController, DashboardView, Decision, ReviewFilter,
};
pub use shared::api_client::HttpBillStore;
pub use shared::config::{initialize_logging, ApiConfig};
pub use shared::errors::AppError;
pub use shared::routes::{Navigator, Route};
