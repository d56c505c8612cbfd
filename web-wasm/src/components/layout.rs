//! サイドバー付きレイアウト

use leptos::prelude::*;
use crate::components::sidebar::Sidebar;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="layout">
            <Sidebar />
            <main class="main-content">{children()}</main>
        </div>
    }
}
