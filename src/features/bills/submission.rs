//! 経費申請ワークフロー
//!
//! ファイル選択 → バリデーション → アップロード → レコード組み立て →
//! 最終化 → 画面遷移、という一連の流れを1つの申請セッションとして
//! 管理するコントローラー。
//!
//! セッション状態はタグ付きユニオンで表現し、「アップロード参照が無い
//! まま最終化される」といった不正状態を型レベルで排除する。
use crate::features::auth::session::SessionStore;
use crate::features::bills::models::{Bill, BillForm, BillStatus, FileCandidate, ReceiptRef};
use crate::features::bills::store::BillStore;
use crate::features::bills::uploader::ReceiptUploader;
use crate::features::bills::validator::is_supported_receipt;
use crate::shared::errors::UNSUPPORTED_FORMAT_MESSAGE;
use crate::shared::routes::{Navigator, Route};
use log::{info, warn};
use std::sync::Arc;

/// 申請セッションの状態
#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionState {
    /// ファイル未選択
    Idle,
    /// バリデーション済みファイルをステージ中（未アップロード）
    FileStaged { file: FileCandidate },
    /// アップロード済み（参照ペア取得済み、最終化前）
    Uploaded {
        file_name: String,
        receipt: ReceiptRef,
    },
    /// 最終化完了（このセッションの終端）
    Submitted,
}

/// 申請フォームの表示側コラボレーター
///
/// コントローラーはDOMを直接触らず、エラー表示と入力欄クリアだけを依頼する。
pub trait SubmissionView: Send + Sync {
    /// エラーメッセージを表示する（Noneでクリア）
    fn show_file_error(&self, message: Option<&str>);

    /// ファイル入力欄の値をクリアする
    fn clear_file_input(&self);
}

/// 経費申請コントローラー
pub struct NewBillController {
    uploader: ReceiptUploader,
    store: Arc<dyn BillStore>,
    session: Arc<dyn SessionStore>,
    view: Arc<dyn SubmissionView>,
    navigator: Arc<dyn Navigator>,
    state: SubmissionState,
    /// 非同期ステップ実行中の再入ガード
    in_flight: bool,
}

impl NewBillController {
    pub fn new(
        store: Arc<dyn BillStore>,
        session: Arc<dyn SessionStore>,
        view: Arc<dyn SubmissionView>,
        navigator: Arc<dyn Navigator>,
        backend_origin: impl Into<String>,
    ) -> Self {
        Self {
            uploader: ReceiptUploader::new(Arc::clone(&store), backend_origin),
            store,
            session,
            view,
            navigator,
            state: SubmissionState::Idle,
            in_flight: false,
        }
    }

    /// 現在のセッション状態を取得する
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// ファイル選択イベントを処理する
    ///
    /// * 未選択（None）は中立的なリセット: ステージ状態とエラーをクリア
    /// * 不合格: ステージ解除・入力欄クリア・固定メッセージ表示
    /// * 合格: 新しい候補で前の候補を置き換えてステージ、エラーをクリア
    pub fn handle_file_changed(&mut self, candidate: Option<FileCandidate>) {
        let Some(file) = candidate else {
            self.state = SubmissionState::Idle;
            self.view.show_file_error(None);
            return;
        };

        if !is_supported_receipt(&file.name, file.mime_type.as_deref()) {
            info!("レシート拒否: file_name={}", file.name);
            self.state = SubmissionState::Idle;
            self.view.clear_file_input();
            self.view.show_file_error(Some(UNSUPPORTED_FORMAT_MESSAGE));
            return;
        }

        info!("レシートをステージ: file_name={}", file.name);
        self.state = SubmissionState::FileStaged { file };
        self.view.show_file_error(None);
    }

    /// 送信イベントを処理する
    ///
    /// アップロードと最終化はそれぞれ1回の送信につき最大1回だけ実行し、
    /// 自動リトライは行わない。失敗時はメッセージを表示してフォームに
    /// 留まり、ユーザーの再送信で最初からやり直す。
    /// エラーはすべてここで捕捉され、表示スロットへ変換される。
    pub async fn handle_submit(&mut self, form: BillForm) {
        // 前の送信が未完了の間の再送信は無視する
        if self.in_flight {
            warn!("送信中のため再送信を無視します");
            return;
        }

        let file = match &self.state {
            SubmissionState::FileStaged { file } => file.clone(),
            _ => {
                self.view.show_file_error(Some(UNSUPPORTED_FORMAT_MESSAGE));
                return;
            }
        };

        // 防御的な再バリデーション
        if !is_supported_receipt(&file.name, file.mime_type.as_deref()) {
            self.state = SubmissionState::Idle;
            self.view.clear_file_input();
            self.view.show_file_error(Some(UNSUPPORTED_FORMAT_MESSAGE));
            return;
        }

        self.in_flight = true;
        let email = self.session.current_user_email();

        let receipt = match self.uploader.upload(&file, &email).await {
            Ok(receipt) => receipt,
            Err(error) => {
                warn!("アップロード失敗: {error}");
                self.view.show_file_error(Some(error.user_message()));
                // ステージは維持し、再送信で最初からアップロードし直す
                self.in_flight = false;
                return;
            }
        };

        self.state = SubmissionState::Uploaded {
            file_name: file.name.clone(),
            receipt: receipt.clone(),
        };

        let bill = Bill {
            id: Some(receipt.bill_id.clone()),
            email,
            bill_type: form.bill_type.clone(),
            name: form.name.clone(),
            amount: form.amount_value(),
            date: form.date.clone(),
            vat: form.vat.clone(),
            pct: form.pct_value(),
            commentary: form.commentary.clone(),
            file_url: Some(receipt.file_url.clone()),
            file_name: Some(file.name.clone()),
            status: BillStatus::Pending,
            comment_admin: None,
        };

        match self.store.update(&bill).await {
            Ok(()) => {
                info!("経費申請の最終化成功: bill_id={}", receipt.bill_id);
                self.state = SubmissionState::Submitted;
                self.in_flight = false;
                self.view.show_file_error(None);
                self.navigator.navigate_to(Route::Bills);
            }
            Err(error) => {
                warn!("経費申請の最終化失敗: {error}");
                self.view.show_file_error(Some(error.user_message()));
                // 失敗したアップロードをキャッシュせず、再送信でやり直す
                self.state = SubmissionState::FileStaged { file };
                self.in_flight = false;
            }
        }
    }
}
