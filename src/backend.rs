//! 認証・テーブルAPIクライアント（CLI版）
//!
//! Web版と同じURL・リクエスト形状（common::backend）をreqwestで送受信する。
//! セッションはメモリ上にだけ保持する。

use std::cell::RefCell;

use nailist_crm_common::backend::{extract_error_message, parse_token_response, PasswordBody};
use nailist_crm_common::{
    AuthBackend, BackendConfig, Credentials, Customer, CustomerBackend, Error, Result, Session,
};
use reqwest::{Client, Method};

pub struct RestClient {
    http: Client,
    config: BackendConfig,
    session: RefCell<Option<Session>>,
}

impl RestClient {
    pub fn new(http: Client, config: BackendConfig) -> Self {
        Self { http, config, session: RefCell::new(None) }
    }

    async fn send(
        &self,
        method: Method,
        url: &str,
        body: Option<String>,
        session: Option<&Session>,
    ) -> Result<String> {
        tracing::debug!(%method, url, "request");

        let mut request = self
            .http
            .request(method, url)
            .header("apikey", &self.config.anon_key)
            .header("Authorization", self.config.bearer(session))
            .header("Content-Type", "application/json");
        if let Some(body) = body {
            request = request.body(body);
        }

        let response = request
            .send()
            .await
            .map_err(|e| Error::Backend(e.to_string()))?;
        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::Backend(e.to_string()))?;

        if !status.is_success() {
            tracing::debug!(status = status.as_u16(), body = %text, "request failed");
            return Err(Error::Backend(extract_error_message(status.as_u16(), &text)));
        }
        Ok(text)
    }

    pub async fn sign_out(&self) -> Result<()> {
        let session = self.session.borrow_mut().take();
        match session {
            Some(session) => self
                .send(Method::POST, &self.config.sign_out_url(), None, Some(&session))
                .await
                .map(|_| ()),
            None => Ok(()),
        }
    }
}

impl CustomerBackend for RestClient {
    async fn current_session(&self) -> Result<Option<Session>> {
        let session = self.session.borrow().clone();
        Ok(session.filter(|s| !s.is_expired(chrono::Utc::now().timestamp())))
    }

    async fn fetch_customers(&self, session: &Session) -> Result<Vec<Customer>> {
        let text = self
            .send(Method::GET, &self.config.customers_url(), None, Some(session))
            .await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl AuthBackend for RestClient {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session> {
        let body = serde_json::to_string(&PasswordBody {
            email: &credentials.email,
            password: &credentials.password,
        })?;
        let text = self
            .send(Method::POST, &self.config.sign_in_url(), Some(body), None)
            .await?;
        let session = parse_token_response(&text, chrono::Utc::now().timestamp())?;
        *self.session.borrow_mut() = Some(session.clone());
        Ok(session)
    }

    async fn sign_up(&self, credentials: &Credentials, redirect_to: &str) -> Result<()> {
        let body = serde_json::to_string(&PasswordBody {
            email: &credentials.email,
            password: &credentials.password,
        })?;
        self.send(Method::POST, &self.config.sign_up_url(redirect_to), Some(body), None)
            .await
            .map(|_| ())
    }
}
