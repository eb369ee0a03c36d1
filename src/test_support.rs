//! テスト用のモックコラボレーター
//!
//! コントローラーのテストで使う記録型モック群。呼び出し内容を
//! Mutexで記録し、キューに積んだ結果を順に返す。
use crate::features::auth::session::SessionStore;
use crate::features::bills::models::{
    Bill, BillForm, BillStatus, CreateBillBody, FileCandidate, NewReceiptPayload,
};
use crate::features::bills::store::BillStore;
use crate::features::bills::submission::SubmissionView;
use crate::features::dashboard::review::{Bucket, DashboardView};
use crate::shared::errors::AppError;
use crate::shared::routes::{Navigator, Route};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// 記録型のモックストア
///
/// キューが空の場合、createは参照の欠けたボディ、updateとlistは成功を返す。
#[derive(Default)]
pub struct MockBillStore {
    create_calls: Mutex<Vec<NewReceiptPayload>>,
    update_calls: Mutex<Vec<Bill>>,
    create_results: Mutex<VecDeque<Result<CreateBillBody, AppError>>>,
    update_errors: Mutex<VecDeque<AppError>>,
    list_bills: Mutex<Vec<Bill>>,
}

impl MockBillStore {
    /// 次のcreate呼び出しに返すJSONボディを積む
    pub fn queue_create_ok(&self, json: &str) {
        let body: CreateBillBody = serde_json::from_str(json).expect("テスト用JSONは有効");
        self.create_results.lock().unwrap().push_back(Ok(body));
    }

    /// 次のcreate呼び出しで返すエラーを積む
    pub fn queue_create_err(&self, error: AppError) {
        self.create_results.lock().unwrap().push_back(Err(error));
    }

    /// 次のupdate呼び出しで返すエラーを積む
    pub fn queue_update_err(&self, error: AppError) {
        self.update_errors.lock().unwrap().push_back(error);
    }

    /// listが返す申請一覧を設定する
    pub fn set_list(&self, bills: Vec<Bill>) {
        *self.list_bills.lock().unwrap() = bills;
    }

    pub fn create_calls(&self) -> Vec<NewReceiptPayload> {
        self.create_calls.lock().unwrap().clone()
    }

    pub fn update_calls(&self) -> Vec<Bill> {
        self.update_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl BillStore for MockBillStore {
    async fn create(&self, payload: NewReceiptPayload) -> Result<CreateBillBody, AppError> {
        self.create_calls.lock().unwrap().push(payload);
        self.create_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(CreateBillBody::default()))
    }

    async fn update(&self, bill: &Bill) -> Result<(), AppError> {
        self.update_calls.lock().unwrap().push(bill.clone());
        match self.update_errors.lock().unwrap().pop_front() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    async fn list(&self) -> Result<Vec<Bill>, AppError> {
        Ok(self.list_bills.lock().unwrap().clone())
    }
}

/// 申請フォームの表示側モック
#[derive(Default)]
pub struct MockView {
    errors: Mutex<Vec<Option<String>>>,
    clear_count: Mutex<usize>,
}

impl MockView {
    /// 最後に表示されたエラーメッセージ（クリア済みならNone）
    pub fn last_error(&self) -> Option<String> {
        self.errors.lock().unwrap().last().cloned().flatten()
    }

    pub fn clear_count(&self) -> usize {
        *self.clear_count.lock().unwrap()
    }
}

impl SubmissionView for MockView {
    fn show_file_error(&self, message: Option<&str>) {
        self.errors
            .lock()
            .unwrap()
            .push(message.map(|m| m.to_string()));
    }

    fn clear_file_input(&self) {
        *self.clear_count.lock().unwrap() += 1;
    }
}

/// ダッシュボードの表示側モック
#[derive(Default)]
pub struct MockDashboardView {
    bucket_renders: Mutex<Vec<(Bucket, String)>>,
    edit_forms: Mutex<Vec<String>>,
    default_panel_count: Mutex<usize>,
    previews: Mutex<Vec<String>>,
}

impl MockDashboardView {
    pub fn last_bucket_render(&self) -> Option<(Bucket, String)> {
        self.bucket_renders.lock().unwrap().last().cloned()
    }

    pub fn last_edit_form(&self) -> Option<String> {
        self.edit_forms.lock().unwrap().last().cloned()
    }

    pub fn default_panel_count(&self) -> usize {
        *self.default_panel_count.lock().unwrap()
    }

    pub fn last_preview(&self) -> Option<String> {
        self.previews.lock().unwrap().last().cloned()
    }
}

impl DashboardView for MockDashboardView {
    fn render_bucket(&self, bucket: Bucket, html: &str) {
        self.bucket_renders
            .lock()
            .unwrap()
            .push((bucket, html.to_string()));
    }

    fn render_edit_form(&self, html: &str) {
        self.edit_forms.lock().unwrap().push(html.to_string());
    }

    fn show_default_panel(&self) {
        *self.default_panel_count.lock().unwrap() += 1;
    }

    fn show_receipt_preview(&self, html: &str) {
        self.previews.lock().unwrap().push(html.to_string());
    }
}

/// 遷移先を記録するモックナビゲーター
#[derive(Default)]
pub struct MockNavigator {
    routes: Mutex<Vec<Route>>,
}

impl MockNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for MockNavigator {
    fn navigate_to(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// テスト用の固定セッション
pub struct TestSession {
    email: String,
}

impl TestSession {
    pub fn new(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
        }
    }
}

impl SessionStore for TestSession {
    fn current_user_email(&self) -> String {
        self.email.clone()
    }

    fn auth_token(&self) -> Option<String> {
        Some("test-jwt".to_string())
    }
}

/// PNGのファイル候補を生成する
pub fn png_candidate(name: &str) -> FileCandidate {
    FileCandidate {
        name: name.to_string(),
        mime_type: Some("image/png".to_string()),
        bytes: b"img".to_vec(),
    }
}

/// 入力済みの申請フォームを生成する
pub fn sample_form() -> BillForm {
    BillForm {
        bill_type: "Transports".to_string(),
        name: "タクシー代".to_string(),
        amount: "42".to_string(),
        date: "2023-01-01".to_string(),
        vat: "20".to_string(),
        pct: "10".to_string(),
        commentary: "空港までの移動".to_string(),
    }
}

/// 指定ステータスの申請を生成する
pub fn bill_with_status(id: &str, email: &str, status: BillStatus) -> Bill {
    Bill {
        id: Some(id.to_string()),
        email: email.to_string(),
        bill_type: "Transports".to_string(),
        name: format!("経費 {id}"),
        amount: 100,
        date: "2023-01-01".to_string(),
        vat: "20".to_string(),
        pct: 20,
        commentary: String::new(),
        file_url: None,
        file_name: None,
        status,
        comment_admin: None,
    }
}
