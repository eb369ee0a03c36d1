use thiserror::Error;

/// ファイル形式エラー時のユーザー向けメッセージ
pub const UNSUPPORTED_FORMAT_MESSAGE: &str =
    "サポートされていないファイル形式です（.png / .jpg / .jpeg のみ）";

/// 404エラー時のユーザー向けメッセージ
pub const NOT_FOUND_MESSAGE: &str = "エラー404: リソースが見つからないため保存できません";

/// 500エラー時のユーザー向けメッセージ
pub const SERVER_ERROR_MESSAGE: &str = "エラー500: サーバーエラーが発生しました";

/// その他の保存失敗時のユーザー向けメッセージ
pub const GENERIC_SAVE_ERROR_MESSAGE: &str =
    "保存できませんでした。時間をおいて再度お試しください";

/// アプリケーション全体で使用される統一エラー型
#[derive(Debug, Error)]
pub enum AppError {
    /// バリデーション関連のエラー
    #[error("バリデーションエラー: {0}")]
    Validation(String),

    /// APIサーバーがエラーステータスを返した場合のエラー
    #[error("APIサーバーエラー: HTTP {status} - {body}")]
    Http { status: u16, body: String },

    /// APIサーバーへの接続自体に失敗した場合のエラー
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// リクエストは成功したがレスポンスに必須項目が欠けている場合のエラー
    #[error("不正なレスポンス: {0}")]
    MalformedResponse(String),

    /// 設定関連のエラー
    #[error("設定エラー: {0}")]
    Configuration(String),

    /// JSON解析エラー
    #[error("JSON解析エラー: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// エラーに対応するHTTPステータスコードを取得
    ///
    /// # 戻り値
    /// ステータス起因のエラーであればそのコード、それ以外はNone
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Http { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// ユーザーに表示するためのメッセージを取得
    ///
    /// 申請ワークフローの契約として、404・500・その他の3分類を
    /// メッセージ上で区別できるようにする。
    pub fn user_message(&self) -> &'static str {
        match self {
            AppError::Validation(_) => UNSUPPORTED_FORMAT_MESSAGE,
            AppError::Http { status: 404, .. } => NOT_FOUND_MESSAGE,
            AppError::Http { status: 500, .. } => SERVER_ERROR_MESSAGE,
            _ => GENERIC_SAVE_ERROR_MESSAGE,
        }
    }
}
