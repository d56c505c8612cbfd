//! メインアプリケーションコンポーネント（ルーティング）

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use nailist_crm_common::route::CUSTOMERS_PATH;

use crate::api::supabase::ClientHandle;
use crate::pages::{
    auth::AuthPage,
    customer_detail::CustomerDetailPage,
    customers::CustomersPage,
    import::ImportPage,
    not_found::NotFound,
};

#[component]
pub fn App(client: ClientHandle) -> impl IntoView {
    // 全画面で同じクライアントを使う
    provide_context(client);

    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=CUSTOMERS_PATH /> } />
                <Route path=path!("/auth") view=AuthPage />
                <Route path=path!("/customers") view=CustomersPage />
                <Route path=path!("/customers/import") view=ImportPage />
                <Route path=path!("/customers/:id") view=CustomerDetailPage />
            </Routes>
        </Router>
    }
}
