//! 認証機能モジュール
//!
//! ログイン・ログアウトは対象外。コアが依存するのはセッション情報の
//! 読み出しシームのみ。
pub mod session;

pub use session::{MemorySession, SessionStore};
