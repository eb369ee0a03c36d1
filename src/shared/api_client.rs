//! リモート経費ストアのHTTP実装
//!
//! バックエンドAPIとの通信を行うクライアント。
//! create（マルチパートPOST）、update（PATCH）、list（GET）の
//! 3つの呼び出しだけを公開し、タイムアウトはHTTP層の責務とする。
use crate::features::auth::session::SessionStore;
use crate::features::bills::models::{Bill, CreateBillBody, NewReceiptPayload};
use crate::features::bills::store::BillStore;
use crate::shared::config::ApiConfig;
use crate::shared::errors::AppError;
use async_trait::async_trait;
use log::{info, warn};
use reqwest::{multipart, Client, RequestBuilder, Response};
use std::sync::Arc;
use std::time::Duration;

/// HTTP経由の経費ストア
pub struct HttpBillStore {
    client: Client,
    config: ApiConfig,
    session: Arc<dyn SessionStore>,
}

impl HttpBillStore {
    /// 新しいクライアントを作成する
    pub fn new(config: ApiConfig, session: Arc<dyn SessionStore>) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::Configuration(format!("HTTPクライアント初期化失敗: {e}")))?;

        Ok(Self {
            client,
            config,
            session,
        })
    }

    /// 環境設定からクライアントを作成する
    pub fn from_env(session: Arc<dyn SessionStore>) -> Result<Self, AppError> {
        Self::new(ApiConfig::from_env(), session)
    }

    /// 設定中のバックエンドオリジンを取得する
    pub fn backend_origin(&self) -> &str {
        &self.config.base_url
    }

    /// 認証トークンがあればAuthorizationヘッダを付与する
    fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match self.session.auth_token() {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    /// エラーステータスのレスポンスをAppErrorへ変換する
    async fn error_from_response(response: Response) -> AppError {
        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "レスポンス読み取り失敗".to_string());
        warn!("APIサーバーエラー: status={status}, body={body}");
        AppError::Http { status, body }
    }

    /// ファイル名からContent-Typeを決定する
    fn content_type(file_name: &str) -> &'static str {
        let extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or("")
            .to_lowercase();

        match extension.as_str() {
            "jpg" | "jpeg" => "image/jpeg",
            "png" => "image/png",
            _ => "application/octet-stream",
        }
    }
}

#[async_trait]
impl BillStore for HttpBillStore {
    async fn create(&self, payload: NewReceiptPayload) -> Result<CreateBillBody, AppError> {
        info!(
            "レシート保存リクエスト送信: file_name={}",
            payload.file_name
        );
        let url = format!("{}/bills", self.config.base_url);

        let part = multipart::Part::bytes(payload.bytes)
            .file_name(payload.file_name.clone())
            .mime_str(Self::content_type(&payload.file_name))
            .map_err(|e| AppError::Validation(format!("MIMEタイプ設定エラー: {e}")))?;
        let form = multipart::Form::new()
            .part("file", part)
            .text("email", payload.email);

        let response = self
            .with_auth(self.client.post(&url).multipart(form))
            .send()
            .await
            .map_err(|e| AppError::Network(format!("APIサーバーへの接続に失敗しました: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<CreateBillBody>()
            .await
            .map_err(|e| AppError::MalformedResponse(format!("createレスポンス解析エラー: {e}")))
    }

    async fn update(&self, bill: &Bill) -> Result<(), AppError> {
        let id = bill
            .id
            .as_deref()
            .ok_or_else(|| AppError::Validation("idのない申請は更新できません".to_string()))?;

        info!("申請更新リクエスト送信: bill_id={id}");
        let url = format!("{}/bills/{id}", self.config.base_url);

        let response = self
            .with_auth(self.client.patch(&url).json(bill))
            .send()
            .await
            .map_err(|e| AppError::Network(format!("APIサーバーへの接続に失敗しました: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        info!("申請更新成功: bill_id={id}");
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Bill>, AppError> {
        let url = format!("{}/bills", self.config.base_url);

        let response = self
            .with_auth(self.client.get(&url))
            .send()
            .await
            .map_err(|e| AppError::Network(format!("APIサーバーへの接続に失敗しました: {e}")))?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        let bills = response
            .json::<Vec<Bill>>()
            .await
            .map_err(|e| AppError::MalformedResponse(format!("listレスポンス解析エラー: {e}")))?;
        info!("申請一覧取得成功: count={}", bills.len());
        Ok(bills)
    }
}
