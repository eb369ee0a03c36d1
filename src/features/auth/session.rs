//! セッションストアのシーム
//!
//! ログイン処理そのものは対象外。コアが必要とするのは
//! 現在ユーザーのメールアドレスと認証トークンの読み出しのみ。
use std::sync::Mutex;

/// セッション情報を提供するコラボレーター
pub trait SessionStore: Send + Sync {
    /// 現在ログイン中のユーザーのメールアドレスを取得する
    fn current_user_email(&self) -> String;

    /// 認証トークンを取得する（未ログイン時はNone）
    fn auth_token(&self) -> Option<String>;
}

/// メモリ上に保持する単純なセッションストア
pub struct MemorySession {
    email: String,
    token: Mutex<Option<String>>,
}

impl MemorySession {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            token: Mutex::new(None),
        }
    }

    /// 認証トークンを設定する
    pub fn set_token(&self, token: Option<String>) {
        *self.token.lock().expect("セッションロックは毒化しない") = token;
    }
}

impl SessionStore for MemorySession {
    fn current_user_email(&self) -> String {
        self.email.clone()
    }

    fn auth_token(&self) -> Option<String> {
        self.token
            .lock()
            .expect("セッションロックは毒化しない")
            .clone()
    }
}
