//! 経費一覧の整形
//!
//! 一覧表示用に日付の降順ソートと表示用フォーマットを行う。
//! 不正な日付でソートが落ちてはならず、不正日付のレコードは末尾に回す。
use crate::features::bills::models::Bill;
use chrono::NaiveDate;

/// 表示用に整形された経費申請
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayBill {
    pub bill: Bill,
    /// ロケール形式の表示用日付
    pub display_date: String,
}

/// ISO形式の日付文字列を解析する
pub fn parse_bill_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

/// 表示用の日付文字列を生成する
///
/// 解析できない入力はそのまま返す（表示を壊さない）。
pub fn format_display_date(date: &str) -> String {
    match parse_bill_date(date) {
        Some(parsed) => parsed.format("%Y年%-m月%-d日").to_string(),
        None => date.to_string(),
    }
}

/// 経費申請を表示用に整列する
///
/// # 戻り値
/// 日付の降順（新しい順）。日付が解析できないレコードは
/// 例外を投げる代わりに全ての有効日付レコードの後ろに置く。
pub fn sort_bills_for_display(bills: Vec<Bill>) -> Vec<DisplayBill> {
    let mut entries: Vec<(Option<NaiveDate>, Bill)> = bills
        .into_iter()
        .map(|bill| (parse_bill_date(&bill.date), bill))
        .collect();

    entries.sort_by(|(a, _), (b, _)| match (a, b) {
        (Some(left), Some(right)) => right.cmp(left),
        (Some(_), None) => std::cmp::Ordering::Less,
        (None, Some(_)) => std::cmp::Ordering::Greater,
        (None, None) => std::cmp::Ordering::Equal,
    });

    entries
        .into_iter()
        .map(|(_, bill)| {
            let display_date = format_display_date(&bill.date);
            DisplayBill { bill, display_date }
        })
        .collect()
}
