//! 経費申請機能モジュール
//!
//! このモジュールは経費申請の提出ワークフローに関連する機能を提供します：
//! - レシートファイルのバリデーション
//! - 2フェーズのリモート永続化（アップロード → 最終化）
//! - 申請セッションの状態管理
//! - 一覧表示用の整形
pub mod formatter;
pub mod models;
pub mod store;
pub mod submission;
pub mod uploader;
pub mod validator;

// モデル
pub use models::{Bill, BillForm, BillStatus, CreateBillBody, FileCandidate, ReceiptRef};

// ワークフロー
pub use formatter::{format_display_date, sort_bills_for_display, DisplayBill};
pub use store::BillStore;
pub use submission::{NewBillController, SubmissionState, SubmissionView};
pub use uploader::ReceiptUploader;
pub use validator::is_supported_receipt;
