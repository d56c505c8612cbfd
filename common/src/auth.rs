//! ログイン・新規登録フォームの状態遷移

use crate::error::Result;
use crate::types::Session;

/// 新規登録成功時の案内
pub const SIGN_UP_CONFIRMATION: &str =
    "確認メールを送信しました。メール内のリンクから登録を完了してください。";

/// 認証サービス
#[allow(async_fn_in_trait)]
pub trait AuthBackend {
    async fn sign_in(&self, credentials: &Credentials) -> Result<Session>;

    /// 確認メール送信まで。`redirect_to` は確認後の戻り先
    async fn sign_up(&self, credentials: &Credentials, redirect_to: &str) -> Result<()>;
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// フォームのモード
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

impl AuthMode {
    pub fn title(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "ログイン",
            AuthMode::SignUp => "新規登録",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self {
            AuthMode::SignIn => "ログイン",
            AuthMode::SignUp => "登録する",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// 画面上の一時的な通知
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Info, message: message.into() }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self { kind: NoticeKind::Error, message: message.into() }
    }
}

/// 送信結果
#[derive(Debug)]
pub enum AuthOutcome {
    SignedIn(Session),
    ConfirmationSent,
    /// バックエンドのメッセージ（加工しない）
    Failed(String),
}

/// フォームの現在のモードで送信する
pub async fn submit_auth<B: AuthBackend + ?Sized>(
    backend: &B,
    mode: AuthMode,
    credentials: &Credentials,
    redirect_to: &str,
) -> AuthOutcome {
    match mode {
        AuthMode::SignIn => match backend.sign_in(credentials).await {
            Ok(session) => AuthOutcome::SignedIn(session),
            Err(e) => AuthOutcome::Failed(e.to_string()),
        },
        AuthMode::SignUp => match backend.sign_up(credentials, redirect_to).await {
            Ok(()) => AuthOutcome::ConfirmationSent,
            Err(e) => AuthOutcome::Failed(e.to_string()),
        },
    }
}

/// 認証フォームの状態
#[derive(Debug, Clone, Default)]
pub struct AuthForm {
    pub mode: AuthMode,
    pub signup_enabled: bool,
    pub submitting: bool,
    pub notice: Option<Notice>,
}

impl AuthForm {
    pub fn new(signup_enabled: bool) -> Self {
        Self { signup_enabled, ..Default::default() }
    }

    /// ログイン/新規登録を切り替える（新規登録が無効なら何もしない）
    pub fn toggle_mode(&mut self) {
        if !self.signup_enabled {
            return;
        }
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
        self.notice = None;
    }

    pub fn begin_submit(&mut self) {
        self.submitting = true;
        self.notice = None;
    }

    /// 送信結果を反映し、ログインできたらセッションを返す
    pub fn apply(&mut self, outcome: AuthOutcome) -> Option<Session> {
        self.submitting = false;
        match outcome {
            AuthOutcome::SignedIn(session) => Some(session),
            AuthOutcome::ConfirmationSent => {
                self.mode = AuthMode::SignIn;
                self.notice = Some(Notice::info(SIGN_UP_CONFIRMATION));
                None
            }
            AuthOutcome::Failed(message) => {
                self.notice = Some(Notice::error(message));
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::SessionUser;
    use futures::executor::block_on;
    use std::cell::RefCell;

    #[derive(Default)]
    struct MockAuth {
        reject_with: Option<String>,
        sign_up_redirects: RefCell<Vec<String>>,
    }

    impl AuthBackend for MockAuth {
        async fn sign_in(&self, credentials: &Credentials) -> Result<Session> {
            if let Some(msg) = &self.reject_with {
                return Err(Error::Backend(msg.clone()));
            }
            Ok(Session {
                access_token: "token".to_string(),
                refresh_token: String::new(),
                expires_at: None,
                user: SessionUser { id: "u".to_string(), email: Some(credentials.email.clone()) },
            })
        }

        async fn sign_up(&self, _credentials: &Credentials, redirect_to: &str) -> Result<()> {
            self.sign_up_redirects.borrow_mut().push(redirect_to.to_string());
            match &self.reject_with {
                Some(msg) => Err(Error::Backend(msg.clone())),
                None => Ok(()),
            }
        }
    }

    fn credentials() -> Credentials {
        Credentials { email: "staff@example.com".to_string(), password: "secret".to_string() }
    }

    #[test]
    fn test_sign_in_success_returns_session() {
        let backend = MockAuth::default();
        let mut form = AuthForm::new(false);
        form.begin_submit();

        let outcome = block_on(submit_auth(&backend, form.mode, &credentials(), "/auth"));
        let session = form.apply(outcome).expect("セッションがない");
        assert_eq!(session.user.email.as_deref(), Some("staff@example.com"));
        assert!(!form.submitting);
        assert!(form.notice.is_none());
    }

    #[test]
    fn test_sign_in_failure_shows_backend_message_verbatim() {
        let backend = MockAuth { reject_with: Some("Invalid login credentials".into()), ..Default::default() };
        let mut form = AuthForm::new(false);

        let outcome = block_on(submit_auth(&backend, AuthMode::SignIn, &credentials(), "/auth"));
        assert!(form.apply(outcome).is_none());
        assert_eq!(form.notice, Some(Notice::error("Invalid login credentials")));
    }

    #[test]
    fn test_sign_up_success_reverts_to_sign_in() {
        let backend = MockAuth::default();
        let mut form = AuthForm::new(true);
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::SignUp);

        let outcome = block_on(submit_auth(&backend, form.mode, &credentials(), "https://crm.example.com/auth"));
        assert!(form.apply(outcome).is_none());
        assert_eq!(form.mode, AuthMode::SignIn);
        assert_eq!(form.notice, Some(Notice::info(SIGN_UP_CONFIRMATION)));
        assert_eq!(
            *backend.sign_up_redirects.borrow(),
            vec!["https://crm.example.com/auth".to_string()]
        );
    }

    #[test]
    fn test_sign_up_failure_keeps_mode() {
        let backend = MockAuth { reject_with: Some("User already registered".into()), ..Default::default() };
        let mut form = AuthForm::new(true);
        form.toggle_mode();

        let outcome = block_on(submit_auth(&backend, form.mode, &credentials(), "/auth"));
        form.apply(outcome);
        assert_eq!(form.mode, AuthMode::SignUp);
        assert_eq!(form.notice, Some(Notice::error("User already registered")));
    }

    #[test]
    fn test_toggle_is_gated_by_config() {
        let mut form = AuthForm::new(false);
        form.toggle_mode();
        assert_eq!(form.mode, AuthMode::SignIn);
    }
}
