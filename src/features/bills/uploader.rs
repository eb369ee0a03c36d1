//! レシートアップロード
//!
//! createエンドポイントへの呼び出しと、レスポンスからの参照解決を担う。
//! 呼び出し側の状態は一切変更しない。
use crate::features::bills::models::{CreateBillBody, FileCandidate, NewReceiptPayload, ReceiptRef};
use crate::features::bills::store::BillStore;
use crate::shared::errors::AppError;
use log::{debug, info};
use std::sync::Arc;

/// レシートアップローダー
pub struct ReceiptUploader {
    store: Arc<dyn BillStore>,
    /// `filePath` 形式のレスポンスを絶対URLへ変換するためのオリジン
    backend_origin: String,
}

impl ReceiptUploader {
    pub fn new(store: Arc<dyn BillStore>, backend_origin: impl Into<String>) -> Self {
        Self {
            store,
            backend_origin: backend_origin.into(),
        }
    }

    /// ファイルと申請者メールをcreateエンドポイントへ送信し参照ペアを得る
    ///
    /// # 引数
    /// * `file` - ステージ済みのレシートファイル
    /// * `email` - 申請者のメールアドレス
    ///
    /// # 戻り値
    /// `(billId, fileUrl)` の参照ペア。リモート呼び出しの失敗、または
    /// レスポンスに参照の片方でも欠けている場合はエラー。
    pub async fn upload(
        &self,
        file: &FileCandidate,
        email: &str,
    ) -> Result<ReceiptRef, AppError> {
        info!("レシートアップロード開始: file_name={}", file.name);

        let payload = NewReceiptPayload {
            file_name: file.name.clone(),
            bytes: file.bytes.clone(),
            email: email.to_string(),
        };
        let body = self.store.create(payload).await?;
        let receipt = resolve_receipt_ref(&body, &self.backend_origin)?;

        info!(
            "レシートアップロード成功: bill_id={}, file_url={}",
            receipt.bill_id, receipt.file_url
        );
        Ok(receipt)
    }
}

/// createレスポンスから参照ペアを解決する
///
/// トップレベルと `data` エンベロープの両形を許容し、URLは絶対URLの
/// `fileUrl` を優先、無ければ `filePath` の区切り文字を正規化して
/// バックエンドオリジンと結合する。
pub fn resolve_receipt_ref(
    body: &CreateBillBody,
    backend_origin: &str,
) -> Result<ReceiptRef, AppError> {
    let nested = body.data.as_deref();

    let id_value = body
        .id
        .as_ref()
        .or_else(|| nested.and_then(|inner| inner.id.as_ref()));
    let bill_id = id_value.and_then(|value| match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    });

    let file_url = body
        .file_url
        .clone()
        .or_else(|| nested.and_then(|inner| inner.file_url.clone()))
        .or_else(|| {
            body.file_path
                .as_deref()
                .or_else(|| nested.and_then(|inner| inner.file_path.as_deref()))
                .map(|path| join_origin(backend_origin, path))
        });

    debug!("参照解決: id={bill_id:?}, url={file_url:?}");

    match (bill_id, file_url) {
        (Some(bill_id), Some(file_url)) => Ok(ReceiptRef { bill_id, file_url }),
        (None, _) => Err(AppError::MalformedResponse(
            "createレスポンスにidがありません".to_string(),
        )),
        (_, None) => Err(AppError::MalformedResponse(
            "createレスポンスにfileUrl/filePathがありません".to_string(),
        )),
    }
}

/// パス区切りをスラッシュに正規化してオリジンと結合する
fn join_origin(origin: &str, path: &str) -> String {
    let normalized = path.replace('\\', "/");
    format!(
        "{}/{}",
        origin.trim_end_matches('/'),
        normalized.trim_start_matches('/')
    )
}
