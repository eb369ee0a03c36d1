//! レシートファイルのバリデーション
//!
//! 受理条件はファイル名の拡張子（.png / .jpg / .jpeg、大文字小文字不問）
//! または宣言されたMIMEタイプのどちらか一方を満たすこと。
//! 判定は純粋な述語であり、入力欄のクリアやエラー表示は呼び出し側の責務。
use once_cell::sync::Lazy;
use regex::Regex;

static SUPPORTED_EXTENSION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\.(png|jpe?g)$").expect("拡張子パターンは常に有効"));

/// 受理するMIMEタイプ
const SUPPORTED_MIME_TYPES: [&str; 3] = ["image/png", "image/jpeg", "image/jpg"];

/// レシートとして受理可能なファイルかを判定する
///
/// # 引数
/// * `file_name` - 選択されたファイル名
/// * `mime_type` - 宣言されたMIMEタイプ（不明な場合はNone）
///
/// # 戻り値
/// 受理可能であればtrue
pub fn is_supported_receipt(file_name: &str, mime_type: Option<&str>) -> bool {
    let name_ok = SUPPORTED_EXTENSION.is_match(file_name);
    let type_ok = mime_type
        .map(|mime| SUPPORTED_MIME_TYPES.contains(&mime))
        .unwrap_or(false);
    name_ok || type_ok
}
