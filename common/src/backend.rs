//! バックエンド（認証 + テーブルAPI）の接続設定とリクエスト形状
//!
//! HTTPの送受信はCLI（reqwest）とWeb（fetch）それぞれで行い、
//! ここではURL・リクエストボディ・レスポンスの解釈だけを共有する。

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::types::{Session, SessionUser};

/// 顧客テーブル名
pub const CUSTOMERS_TABLE: &str = "customers";

/// ブラウザにセッションを保存するキー
pub const SESSION_STORAGE_KEY: &str = "nailist-crm.session";

/// 接続設定（サービスURLと公開キー）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendConfig {
    pub url: String,
    pub anon_key: String,
    /// 新規登録フォームへの切り替えを許可するか
    pub signup_enabled: bool,
}

impl BackendConfig {
    /// URLとキーを検証して設定を作る
    ///
    /// どちらかが未設定の場合は起動できない設定ミスとしてエラーを返す。
    pub fn new(url: Option<&str>, anon_key: Option<&str>) -> Result<Self> {
        let url = url
            .map(str::trim)
            .filter(|u| !u.is_empty())
            .ok_or_else(|| Error::Config("SUPABASE_URLが設定されていません".into()))?;
        let anon_key = anon_key
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| Error::Config("SUPABASE_ANON_KEYが設定されていません".into()))?;

        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(Error::Config(format!("SUPABASE_URLが不正です: {}", url)));
        }

        Ok(Self {
            url: url.trim_end_matches('/').to_string(),
            anon_key: anon_key.to_string(),
            signup_enabled: false,
        })
    }

    pub fn with_signup(mut self, enabled: bool) -> Self {
        self.signup_enabled = enabled;
        self
    }

    pub fn sign_in_url(&self) -> String {
        format!("{}/auth/v1/token?grant_type=password", self.url)
    }

    pub fn sign_up_url(&self, redirect_to: &str) -> String {
        format!("{}/auth/v1/signup?redirect_to={}", self.url, encode_query_value(redirect_to))
    }

    pub fn sign_out_url(&self) -> String {
        format!("{}/auth/v1/logout", self.url)
    }

    pub fn user_url(&self) -> String {
        format!("{}/auth/v1/user", self.url)
    }

    /// 全列を登録日時の降順で取得するURL
    pub fn customers_url(&self) -> String {
        format!("{}/rest/v1/{}?select=*&order=created_at.desc", self.url, CUSTOMERS_TABLE)
    }

    /// `Authorization` ヘッダ値（セッションがなければ公開キー）
    pub fn bearer(&self, session: Option<&Session>) -> String {
        match session {
            Some(s) => format!("Bearer {}", s.access_token),
            None => format!("Bearer {}", self.anon_key),
        }
    }
}

/// 真偽値の環境変数を解釈（`1`/`true`/`yes`/`on`）
pub fn parse_flag(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}

/// クエリ文字列の値をパーセントエンコード
fn encode_query_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// メール・パスワードのリクエストボディ
#[derive(Debug, Serialize)]
pub struct PasswordBody<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// パスワード認証のレスポンス
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: String,
    #[serde(default)]
    expires_in: Option<i64>,
    #[serde(default)]
    expires_at: Option<i64>,
    user: SessionUser,
}

/// パスワード認証のレスポンスからセッションを作る
///
/// `expires_at` がなければ `now + expires_in` を使う。
pub fn parse_token_response(body: &str, now: i64) -> Result<Session> {
    let token: TokenResponse = serde_json::from_str(body)?;
    let expires_at = token
        .expires_at
        .or_else(|| token.expires_in.map(|secs| now + secs));

    Ok(Session {
        access_token: token.access_token,
        refresh_token: token.refresh_token,
        expires_at,
        user: token.user,
    })
}

/// エラーレスポンスからメッセージを取り出す
///
/// `msg` → `message` → `error_description` → `error` の順に探し、
/// どれもなければ `HTTP <status>` を返す。
pub fn extract_error_message(status: u16, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["msg", "message", "error_description", "error"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                if !msg.is_empty() {
                    return msg.to_string();
                }
            }
        }
    }
    format!("HTTP {}", status)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> BackendConfig {
        BackendConfig::new(Some("https://example.supabase.co/"), Some("anon-key")).unwrap()
    }

    #[test]
    fn test_config_requires_both_values() {
        assert!(matches!(BackendConfig::new(None, Some("k")), Err(Error::Config(_))));
        assert!(matches!(BackendConfig::new(Some("https://x"), Some("  ")), Err(Error::Config(_))));
        assert!(matches!(BackendConfig::new(Some("example.com"), Some("k")), Err(Error::Config(_))));
    }

    #[test]
    fn test_config_trims_trailing_slash() {
        let config = config();
        assert_eq!(config.url, "https://example.supabase.co");
        assert!(!config.signup_enabled);
        assert!(config.with_signup(true).signup_enabled);
    }

    #[test]
    fn test_endpoint_urls() {
        let config = config();
        assert_eq!(
            config.customers_url(),
            "https://example.supabase.co/rest/v1/customers?select=*&order=created_at.desc"
        );
        assert_eq!(
            config.sign_in_url(),
            "https://example.supabase.co/auth/v1/token?grant_type=password"
        );
        assert_eq!(
            config.sign_up_url("https://crm.example.com/auth"),
            "https://example.supabase.co/auth/v1/signup?redirect_to=https%3A%2F%2Fcrm.example.com%2Fauth"
        );
    }

    #[test]
    fn test_bearer_prefers_session_token() {
        let config = config();
        let session = Session {
            access_token: "user-token".to_string(),
            refresh_token: String::new(),
            expires_at: None,
            user: SessionUser::default(),
        };
        assert_eq!(config.bearer(Some(&session)), "Bearer user-token");
        assert_eq!(config.bearer(None), "Bearer anon-key");
    }

    #[test]
    fn test_parse_flag() {
        assert!(parse_flag(Some("true")));
        assert!(parse_flag(Some(" 1 ")));
        assert!(!parse_flag(Some("false")));
        assert!(!parse_flag(None));
    }

    #[test]
    fn test_parse_token_response_computes_expiry() {
        let body = r#"{
            "access_token": "at",
            "token_type": "bearer",
            "expires_in": 3600,
            "refresh_token": "rt",
            "user": {"id": "u-1", "email": "staff@example.com"}
        }"#;
        let session = parse_token_response(body, 1_000).expect("パース失敗");
        assert_eq!(session.access_token, "at");
        assert_eq!(session.expires_at, Some(4_600));
        assert_eq!(session.user.email.as_deref(), Some("staff@example.com"));
    }

    #[test]
    fn test_extract_error_message_variants() {
        assert_eq!(
            extract_error_message(400, r#"{"error":"invalid_grant","error_description":"Invalid login credentials"}"#),
            "Invalid login credentials"
        );
        assert_eq!(
            extract_error_message(401, r#"{"message":"JWT expired","code":"PGRST301"}"#),
            "JWT expired"
        );
        assert_eq!(extract_error_message(422, r#"{"msg":"User already registered"}"#), "User already registered");
        assert_eq!(extract_error_message(502, "<html>bad gateway</html>"), "HTTP 502");
    }
}
