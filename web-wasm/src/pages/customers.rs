//! 顧客一覧画面
//!
//! 表示時にセッション確認 → 一覧取得を1回だけ行い、
//! 検索はその結果を絞り込むだけ（再取得しない）。

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use nailist_crm_common::route::{AUTH_PATH, CUSTOMER_IMPORT_PATH};
use nailist_crm_common::{filter_customers, load_directory, DirectoryLoad, DirectoryState, Notice};

use crate::api::supabase::ClientHandle;
use crate::components::{
    customer_table::CustomerTable,
    layout::Layout,
    loading::Loading,
    toast::Toast,
};

#[component]
pub fn CustomersPage() -> impl IntoView {
    let client = expect_context::<ClientHandle>();
    let navigate = use_navigate();

    let state = RwSignal::new(DirectoryState::mounting());
    let (query, set_query) = signal(String::new());

    spawn_local(async move {
        let load = load_directory(client).await;
        if let DirectoryLoad::Failed(message) = &load {
            web_sys::console::error_1(&format!("顧客一覧取得失敗: {}", message).into());
        }

        let mut redirect = false;
        state.update(|s| redirect = s.settle(load));
        if redirect {
            navigate(AUTH_PATH, Default::default());
        }
    });

    let filtered = move || {
        let q = query.get();
        state.with(|s| filter_customers(&s.customers, &q).into_iter().cloned().collect::<Vec<_>>())
    };
    let is_loading = move || state.with(|s| s.loading);
    let notice = move || state.with(|s| s.notice.clone());
    let total = move || state.with(|s| s.customers.len());

    view! {
        <Layout>
            <div class="page-header">
                <h1>"顧客一覧"</h1>
                <a href=CUSTOMER_IMPORT_PATH class="btn btn-secondary">"CSVインポート"</a>
            </div>

            {move || notice().map(|message| view! {
                <Toast
                    notice=Notice::error(message)
                    on_close=move |()| state.update(|s| s.dismiss_notice())
                />
            })}

            <div class="filter-bar">
                <input
                    type="search"
                    class="search-input"
                    placeholder="氏名・受付番号で検索"
                    prop:value=move || query.get()
                    on:input=move |ev| set_query.set(event_target_value(&ev))
                />
                <span class="text-muted">
                    {move || format!("{} / {}件", filtered().len(), total())}
                </span>
            </div>

            <Show when=move || !is_loading() fallback=|| view! { <Loading /> }>
                <Show
                    when=move || !filtered().is_empty()
                    fallback=|| view! { <div class="card"><p>"該当する顧客がいません"</p></div> }
                >
                    <CustomerTable customers=filtered />
                </Show>
            </Show>
        </Layout>
    }
}
