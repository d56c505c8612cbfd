use leptos::prelude::*;
use leptos_router::components::A;
use nailist_crm_common::route::CUSTOMERS_PATH;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="card">
            <h1>"ページが見つかりません"</h1>
            <A href=CUSTOMERS_PATH>"顧客一覧へ戻る"</A>
        </div>
    }
}
