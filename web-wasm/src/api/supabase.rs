//! 認証・テーブルAPIクライアント（fetch）
//!
//! 起動時に1回だけ作成し、以後は全画面で同じインスタンスを使う。

use std::sync::OnceLock;

use gloo::storage::{LocalStorage, Storage};
use nailist_crm_common::backend::{
    extract_error_message, parse_token_response, BackendConfig, PasswordBody, SESSION_STORAGE_KEY,
};
use nailist_crm_common::{
    AuthBackend, Credentials, Customer, CustomerBackend, Error, Result, Session,
};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::api::js_error_message;

static CLIENT: OnceLock<SupabaseClient> = OnceLock::new();

/// 画面間で共有するクライアント
pub type ClientHandle = &'static SupabaseClient;

/// 共有クライアントを作成（2回目以降は最初のインスタンスを返す）
pub fn install(config: BackendConfig) -> ClientHandle {
    CLIENT.get_or_init(|| SupabaseClient { config })
}

pub struct SupabaseClient {
    config: BackendConfig,
}

fn network_error(value: JsValue) -> Error {
    Error::Backend(js_error_message(&value))
}

fn now_secs() -> i64 {
    (js_sys::Date::now() / 1000.0) as i64
}

impl SupabaseClient {
    pub fn config(&self) -> &BackendConfig {
        &self.config
    }

    /// リクエスト送信。HTTPステータスに関わらず (status, body) を返す
    async fn fetch_raw(
        &self,
        method: &str,
        url: &str,
        body: Option<String>,
        session: Option<&Session>,
    ) -> Result<(u16, String)> {
        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);
        if let Some(body) = &body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(url, &opts).map_err(network_error)?;
        let headers = request.headers();
        headers.set("apikey", &self.config.anon_key).map_err(network_error)?;
        headers
            .set("Authorization", &self.config.bearer(session))
            .map_err(network_error)?;
        headers.set("Content-Type", "application/json").map_err(network_error)?;

        let window = web_sys::window().ok_or_else(|| Error::Backend("windowが取得できません".into()))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(network_error)?;
        let resp: Response = resp_value.dyn_into().map_err(network_error)?;

        let text = JsFuture::from(resp.text().map_err(network_error)?)
            .await
            .map_err(network_error)?;
        Ok((resp.status(), text.as_string().unwrap_or_default()))
    }

    /// 2xx以外はバックエンドのメッセージでエラーにする
    async fn send(
        &self,
        method: &str,
        url: &str,
        body: Option<String>,
        session: Option<&Session>,
    ) -> Result<String> {
        let (status, text) = self.fetch_raw(method, url, body, session).await?;
        if !(200..300).contains(&status) {
            return Err(Error::Backend(extract_error_message(status, &text)));
        }
        Ok(text)
    }

    fn stored_session(&self) -> Option<Session> {
        LocalStorage::get(SESSION_STORAGE_KEY).ok()
    }

    fn store_session(&self, session: &Session) {
        if let Err(e) = LocalStorage::set(SESSION_STORAGE_KEY, session) {
            web_sys::console::warn_1(&format!("セッション保存失敗: {}", e).into());
        }
    }

    fn clear_session(&self) {
        LocalStorage::delete(SESSION_STORAGE_KEY);
    }

    /// ログアウト。サーバー側の失敗に関わらず保存済みセッションは消す
    pub async fn sign_out(&self) -> Result<()> {
        let session = self.stored_session();
        self.clear_session();
        match session {
            Some(session) => self
                .send("POST", &self.config.sign_out_url(), None, Some(&session))
                .await
                .map(|_| ()),
            None => Ok(()),
        }
    }
}

impl CustomerBackend for SupabaseClient {
    async fn current_session(&self) -> Result<Option<Session>> {
        let Some(session) = self.stored_session() else {
            return Ok(None);
        };
        if session.is_expired(now_secs()) {
            self.clear_session();
            return Ok(None);
        }

        let (status, text) = self
            .fetch_raw("GET", &self.config.user_url(), None, Some(&session))
            .await?;
        match status {
            200..=299 => Ok(Some(session)),
            401 | 403 => {
                self.clear_session();
                Ok(None)
            }
            _ => Err(Error::Backend(extract_error_message(status, &text))),
        }
    }

    async fn fetch_customers(&self, session: &Session) -> Result<Vec<Customer>> {
        let text = self
            .send("GET", &self.config.customers_url(), None, Some(session))
            .await?;
        Ok(serde_json::from_str(&text)?)
    }
}

impl AuthBackend for SupabaseClient {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session> {
        let body = serde_json::to_string(&PasswordBody {
            email: &credentials.email,
            password: &credentials.password,
        })?;
        let text = self
            .send("POST", &self.config.sign_in_url(), Some(body), None)
            .await?;
        let session = parse_token_response(&text, now_secs())?;
        self.store_session(&session);
        Ok(session)
    }

    async fn sign_up(&self, credentials: &Credentials, redirect_to: &str) -> Result<()> {
        let body = serde_json::to_string(&PasswordBody {
            email: &credentials.email,
            password: &credentials.password,
        })?;
        self.send("POST", &self.config.sign_up_url(redirect_to), Some(body), None)
            .await
            .map(|_| ())
    }
}
