//! サイドバー（メニュー + ログアウト）

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use nailist_crm_common::route::{AUTH_PATH, CUSTOMERS_PATH, CUSTOMER_IMPORT_PATH};

use crate::api::supabase::ClientHandle;

#[component]
pub fn Sidebar() -> impl IntoView {
    let client = expect_context::<ClientHandle>();
    let navigate = use_navigate();
    // モバイル表示の開閉
    let (is_open, set_is_open) = signal(false);

    let on_logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(e) = client.sign_out().await {
                web_sys::console::warn_1(&format!("ログアウト失敗: {}", e).into());
            }
            navigate(AUTH_PATH, Default::default());
        });
    };

    view! {
        <button
            class="sidebar-toggle"
            aria-label="メニュー"
            on:click=move |_| set_is_open.update(|open| *open = !*open)
        >
            "☰"
        </button>
        <aside class="sidebar" class:open=move || is_open.get()>
            <div class="sidebar-brand">"ネイリスト技能診断"</div>
            <nav on:click=move |_| set_is_open.set(false)>
                <ul class="nav-links">
                    <li><A href=CUSTOMERS_PATH>"顧客一覧"</A></li>
                    <li><A href=CUSTOMER_IMPORT_PATH>"CSVインポート"</A></li>
                </ul>
            </nav>
            <button class="btn btn-tertiary sidebar-logout" on:click=on_logout>
                "ログアウト"
            </button>
        </aside>
    }
}
