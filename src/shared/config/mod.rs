//! 環境設定モジュール
//!
//! バックエンドAPIの接続先やタイムアウトを環境変数から読み込みます。
use log::debug;

/// APIクライアント設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// バックエンドAPIのオリジン（末尾スラッシュなし）
    pub base_url: String,
    pub timeout_seconds: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5678".to_string(),
            timeout_seconds: 30,
        }
    }
}

impl ApiConfig {
    /// 環境変数からAPIクライアント設定を読み込む
    ///
    /// # 戻り値
    /// `BACKEND_URL` と `API_TIMEOUT_SECONDS` を反映した設定。
    /// 未設定の場合はデフォルト値を使用する。
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = std::env::var("BACKEND_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);
        let timeout_seconds = std::env::var("API_TIMEOUT_SECONDS")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(defaults.timeout_seconds);

        debug!("API設定読み込み: base_url={base_url}, timeout={timeout_seconds}s");
        Self {
            base_url,
            timeout_seconds,
        }
    }
}

/// ログシステムを初期化する
///
/// `RUST_LOG` 未設定時は info レベルで出力する。多重初期化は無視される。
pub fn initialize_logging() {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .try_init();
}
