//! チケットカードのレンダリング
//!
//! コントローラーはマークアップ断片を文字列として生成し、表示側
//! コラボレーターへ渡すだけでレイアウトは所有しない。
use crate::features::bills::formatter::format_display_date;
use crate::features::bills::models::Bill;

/// メールアドレスのローカル部から表示用の氏名を取り出す
///
/// `taro.yamada@...` 形式は（名, 姓）に分割し、ドットが無い場合は
/// 全体を姓として扱う。
fn names_from_email(email: &str) -> (String, String) {
    let local_part = email.split('@').next().unwrap_or_default();
    match local_part.split_once('.') {
        Some((first, last)) => (first.to_string(), last.to_string()),
        None => (String::new(), local_part.to_string()),
    }
}

/// 1件のチケットカードを描画する
pub fn card(bill: &Bill) -> String {
    let (first_name, last_name) = names_from_email(&bill.email);
    let id = bill.id.as_deref().unwrap_or_default();

    format!(
        r#"
    <div class='bill-card' id='open-bill{id}' data-testid='open-bill{id}'>
      <div class='bill-card-name-container'>
        <div class='bill-card-name'> {first_name} {last_name} </div>
        <span class='bill-card-grey'> ... </span>
      </div>
      <div class='name-price-container'>
        <span> {name} </span>
        <span> {amount} 円 </span>
      </div>
      <div class='date-type-container'>
        <span> {date} </span>
        <span> {bill_type} </span>
      </div>
    </div>
  "#,
        name = bill.name,
        amount = bill.amount,
        date = format_display_date(&bill.date),
        bill_type = bill.bill_type,
    )
}

/// チケットカードの一覧を描画する
pub fn cards(bills: &[Bill]) -> String {
    bills.iter().map(card).collect()
}

/// 選択中チケットの編集フォームを描画する
pub fn edit_form(bill: &Bill) -> String {
    let id = bill.id.as_deref().unwrap_or_default();
    format!(
        r#"
    <div class='dashboard-form' data-testid='dashboard-form-{id}'>
      <div class='vertical-form-element'> <span> 種別: </span> <span> {bill_type} </span> </div>
      <div class='vertical-form-element'> <span> 件名: </span> <span> {name} </span> </div>
      <div class='vertical-form-element'> <span> 日付: </span> <span> {date} </span> </div>
      <div class='vertical-form-element'> <span> 金額: </span> <span> {amount} 円 </span> </div>
      <div class='vertical-form-element'> <span> 備考: </span> <span> {commentary} </span> </div>
      <div id='icon-eye-d' data-testid='icon-eye-d' data-bill-url='{file_url}'></div>
      <textarea id='commentary2' data-testid='commentary2'></textarea>
      <button id='btn-accept-bill' data-testid='btn-accept-bill'>承認</button>
      <button id='btn-refuse-bill' data-testid='btn-refuse-bill'>却下</button>
    </div>
  "#,
        bill_type = bill.bill_type,
        name = bill.name,
        date = format_display_date(&bill.date),
        amount = bill.amount,
        commentary = bill.commentary,
        file_url = bill.file_url.as_deref().unwrap_or_default(),
    )
}

/// 選択中チケットの領収書プレビューを描画する
///
/// fileUrlが未設定のチケットには代替メッセージを表示する。
pub fn receipt_preview(bill: &Bill) -> String {
    match bill.file_url.as_deref() {
        Some(url) => format!(
            r#"<div style='text-align: center;'><img src="{url}" alt="領収書"/></div>"#
        ),
        None => {
            r#"<div style='text-align: center; color: #888;'>利用可能な領収書はありません。</div>"#
                .to_string()
        }
    }
}
