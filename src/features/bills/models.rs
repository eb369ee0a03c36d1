use serde::{Deserialize, Serialize};

/// 経費申請のステータス
///
/// 遷移は `pending → accepted` と `pending → refused` のみ。
/// 終端ステータスがこのワークフローで再変更されることはない。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

/// 経費申請データモデル
///
/// バックエンドとのやり取りはcamelCaseのJSONで行う。
/// `id` は初回永続化（create）でバックエンドが採番するため、それ以前はNone。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    #[serde(default)]
    pub id: Option<String>,
    pub email: String,
    #[serde(rename = "type")]
    pub bill_type: String,
    pub name: String,
    pub amount: i64,
    pub date: String,
    pub vat: String,
    pub pct: i64,
    pub commentary: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    pub status: BillStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

/// 申請フォームの入力値
///
/// フォームから届く値は全て文字列のまま保持し、数値変換は
/// 組み立て時に寛容に行う（変換不能な `pct` は20、`amount` は0）。
#[derive(Debug, Clone, Default)]
pub struct BillForm {
    pub bill_type: String,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

impl BillForm {
    /// 金額を整数として取得（変換不能時は0）
    pub fn amount_value(&self) -> i64 {
        self.amount.trim().parse().unwrap_or(0)
    }

    /// 税率（%）を整数として取得（変換不能時は20）
    pub fn pct_value(&self) -> i64 {
        self.pct.trim().parse().unwrap_or(20)
    }
}

/// 選択されたレシートファイルの候補
#[derive(Debug, Clone, PartialEq)]
pub struct FileCandidate {
    pub name: String,
    /// 宣言されたMIMEタイプ（ブラウザ等が付与しない場合はNone）
    pub mime_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// アップロード成功時に得られる参照ペア
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReceiptRef {
    pub bill_id: String,
    pub file_url: String,
}

/// createエンドポイントへ送るマルチパートペイロード
#[derive(Debug, Clone)]
pub struct NewReceiptPayload {
    pub file_name: String,
    pub bytes: Vec<u8>,
    pub email: String,
}

/// createエンドポイントのレスポンスボディ
///
/// バックエンドの変種により、参照がトップレベルに現れる場合と
/// `data` エンベロープ下に現れる場合の両方がある。URLも絶対URLの
/// `fileUrl` と、オリジン結合が必要な `filePath` の2形がある。
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBillBody {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_path: Option<String>,
    #[serde(default)]
    pub data: Option<Box<CreateBillBody>>,
}
