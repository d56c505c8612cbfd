//! ステータスバッジ

use leptos::prelude::*;
use nailist_crm_common::CustomerStatus;

/// 既知のステータスはバッジ、それ以外は値をそのまま表示
#[component]
pub fn StatusBadge(status: CustomerStatus) -> impl IntoView {
    match status.badge() {
        Some(badge) => view! { <span class=badge.class>{badge.label}</span> }.into_any(),
        None => view! { <span>{status.as_str().to_string()}</span> }.into_any(),
    }
}
