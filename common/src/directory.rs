//! 顧客一覧画面の読み込みフロー
//!
//! セッション確認 → 一覧取得 の順に実行する。
//! セッションがなければ取得リクエストは発行しない。

use crate::error::Result;
use crate::types::{Customer, Session};

/// 顧客一覧の取得元
#[allow(async_fn_in_trait)]
pub trait CustomerBackend {
    /// 有効なセッションを返す（なければ `None`）
    async fn current_session(&self) -> Result<Option<Session>>;

    /// 全顧客を登録日時の降順で取得
    async fn fetch_customers(&self, session: &Session) -> Result<Vec<Customer>>;
}

/// 読み込み結果
#[derive(Debug)]
pub enum DirectoryLoad {
    /// 未ログイン（認証画面へ）
    RedirectToAuth,
    Loaded(Vec<Customer>),
    /// 取得失敗（バックエンドのメッセージ）
    Failed(String),
}

/// セッション確認と一覧取得を順番に行う
///
/// セッション確認自体が失敗した場合も未ログインとして扱う。
pub async fn load_directory<B: CustomerBackend + ?Sized>(backend: &B) -> DirectoryLoad {
    let session = match backend.current_session().await {
        Ok(Some(session)) => session,
        Ok(None) | Err(_) => return DirectoryLoad::RedirectToAuth,
    };

    match backend.fetch_customers(&session).await {
        Ok(customers) => DirectoryLoad::Loaded(customers),
        Err(e) => DirectoryLoad::Failed(e.to_string()),
    }
}

/// 顧客一覧画面の状態
///
/// 一覧はマウント時に1回だけ取得したスナップショット。
#[derive(Debug, Clone, Default)]
pub struct DirectoryState {
    pub customers: Vec<Customer>,
    pub loading: bool,
    pub notice: Option<String>,
}

impl DirectoryState {
    /// マウント直後の状態（読み込み中）
    pub fn mounting() -> Self {
        Self {
            customers: Vec::new(),
            loading: true,
            notice: None,
        }
    }

    /// 読み込み結果を反映する。認証画面へ移動すべきなら `true`
    pub fn settle(&mut self, load: DirectoryLoad) -> bool {
        self.loading = false;
        match load {
            DirectoryLoad::RedirectToAuth => true,
            DirectoryLoad::Loaded(customers) => {
                self.customers = customers;
                false
            }
            DirectoryLoad::Failed(message) => {
                self.customers.clear();
                self.notice = Some(format!("顧客一覧の取得に失敗しました: {}", message));
                false
            }
        }
    }

    /// 通知を閉じる
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::SessionUser;
    use futures::executor::block_on;
    use std::cell::Cell;

    struct MockBackend {
        session: Option<Session>,
        rows: std::result::Result<Vec<Customer>, String>,
        fetch_calls: Cell<usize>,
    }

    impl MockBackend {
        fn new(session: Option<Session>, rows: std::result::Result<Vec<Customer>, String>) -> Self {
            Self { session, rows, fetch_calls: Cell::new(0) }
        }
    }

    impl CustomerBackend for MockBackend {
        async fn current_session(&self) -> Result<Option<Session>> {
            Ok(self.session.clone())
        }

        async fn fetch_customers(&self, _session: &Session) -> Result<Vec<Customer>> {
            self.fetch_calls.set(self.fetch_calls.get() + 1);
            self.rows.clone().map_err(Error::Backend)
        }
    }

    fn session() -> Session {
        Session {
            access_token: "token".to_string(),
            refresh_token: String::new(),
            expires_at: None,
            user: SessionUser { id: "staff".to_string(), email: None },
        }
    }

    fn rows() -> Vec<Customer> {
        serde_json::from_str(
            r#"[
                {"id": 2, "external_id": "N-002", "name": "B", "status": "completed", "created_at": "2025-02-02T00:00:00+00:00"},
                {"id": 1, "external_id": "N-001", "name": "A", "status": "new", "created_at": "2025-01-01T00:00:00+00:00"}
            ]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_missing_session_redirects_without_fetch() {
        let backend = MockBackend::new(None, Ok(rows()));
        let load = block_on(load_directory(&backend));
        assert!(matches!(load, DirectoryLoad::RedirectToAuth));
        assert_eq!(backend.fetch_calls.get(), 0);
    }

    #[test]
    fn test_loaded_rows_keep_backend_order() {
        let backend = MockBackend::new(Some(session()), Ok(rows()));
        let mut state = DirectoryState::mounting();
        assert!(state.loading);

        let redirect = state.settle(block_on(load_directory(&backend)));
        assert!(!redirect);
        assert!(!state.loading);
        assert_eq!(state.customers.len(), 2);
        assert_eq!(state.customers[0].external_id, "N-002");
        assert_eq!(backend.fetch_calls.get(), 1);
    }

    #[test]
    fn test_fetch_failure_sets_notice_and_clears_loading() {
        let backend = MockBackend::new(Some(session()), Err("permission denied for table customers".into()));
        let mut state = DirectoryState::mounting();

        let redirect = state.settle(block_on(load_directory(&backend)));
        assert!(!redirect);
        assert!(!state.loading);
        assert!(state.customers.is_empty());
        let notice = state.notice.clone().expect("通知がない");
        assert!(notice.contains("permission denied for table customers"));

        state.dismiss_notice();
        assert!(state.notice.is_none());
    }

    #[test]
    fn test_redirect_also_clears_loading() {
        let mut state = DirectoryState::mounting();
        assert!(state.settle(DirectoryLoad::RedirectToAuth));
        assert!(!state.loading);
    }
}
