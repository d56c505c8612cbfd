//! 顧客一覧テーブル

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use nailist_crm_common::route::customer_detail_path;
use nailist_crm_common::{age_label, format_created_at, occupation_label, text_or_dash, Customer};

use crate::components::status_badge::StatusBadge;

#[component]
pub fn CustomerTable<F>(customers: F) -> impl IntoView
where
    F: Fn() -> Vec<Customer> + Send + Clone + 'static,
{
    view! {
        <table class="customer-table">
            <thead>
                <tr>
                    <th>"受付番号"</th>
                    <th>"氏名"</th>
                    <th>"ステータス"</th>
                    <th>"年齢"</th>
                    <th>"ネイリスト歴"</th>
                    <th>"職業"</th>
                    <th>"都道府県"</th>
                    <th>"登録日"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=customers
                    key=|customer| customer.id.clone()
                    children=move |customer| view! { <CustomerRow customer=customer /> }
                />
            </tbody>
        </table>
    }
}

/// 1行。クリックで顧客詳細へ
#[component]
fn CustomerRow(customer: Customer) -> impl IntoView {
    let navigate = use_navigate();
    let detail_path = customer_detail_path(customer.id.as_str());

    view! {
        <tr class="customer-row" on:click=move |_| navigate(&detail_path, Default::default())>
            <td>{customer.external_id.clone()}</td>
            <td>{customer.name.clone()}</td>
            <td><StatusBadge status=customer.status.clone() /></td>
            <td>{age_label(customer.age)}</td>
            <td>{text_or_dash(customer.nailist_experience.as_deref()).to_string()}</td>
            <td>{occupation_label(&customer.occupation_type).to_string()}</td>
            <td>{text_or_dash(customer.prefecture.as_deref()).to_string()}</td>
            <td>{format_created_at(&customer.created_at)}</td>
        </tr>
    }
}
