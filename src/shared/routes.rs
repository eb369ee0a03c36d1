//! 画面遷移モジュール
//!
//! ルーティング本体は外部コラボレーターであり、コアは不透明な
//! ルートキーを渡すだけで画面遷移を依頼します。

/// アプリケーション内のルートキー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// 従業員の経費一覧画面
    Bills,
    /// 経費申請フォーム画面
    NewBill,
    /// 管理者ダッシュボード画面
    Dashboard,
}

/// 画面遷移を行うコラボレーター
pub trait Navigator: Send + Sync {
    /// 指定されたルートへ遷移する
    fn navigate_to(&self, route: Route);
}
