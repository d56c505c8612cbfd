pub mod auth;
pub mod customers;
pub mod customer_detail;
pub mod import;
pub mod not_found;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use nailist_crm_common::route::AUTH_PATH;
use nailist_crm_common::CustomerBackend;

use crate::api::supabase::ClientHandle;

/// セッションがなければ認証画面へ移動する（画面表示時に1回だけ確認）
pub fn use_session_guard() {
    let client = expect_context::<ClientHandle>();
    let navigate = use_navigate();

    spawn_local(async move {
        match client.current_session().await {
            Ok(Some(_)) => {}
            Ok(None) => navigate(AUTH_PATH, Default::default()),
            Err(e) => {
                web_sys::console::warn_1(&format!("セッション確認失敗: {}", e).into());
                navigate(AUTH_PATH, Default::default());
            }
        }
    });
}
