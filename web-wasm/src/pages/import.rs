//! CSVインポート画面（入口のみ）

use leptos::prelude::*;
use leptos_router::components::A;
use nailist_crm_common::route::CUSTOMERS_PATH;

use crate::components::layout::Layout;
use crate::pages::use_session_guard;

#[component]
pub fn ImportPage() -> impl IntoView {
    use_session_guard();

    view! {
        <Layout>
            <div class="page-header">
                <h1>"CSVインポート"</h1>
            </div>
            <div class="card">
                <p class="text-muted">"CSVインポートは準備中です。"</p>
                <A href=CUSTOMERS_PATH>"顧客一覧へ戻る"</A>
            </div>
        </Layout>
    }
}
