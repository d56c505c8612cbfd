//! 顧客詳細画面（基準タイム表の表示と画像保存のみ）

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use nailist_crm_common::route::CUSTOMERS_PATH;
use nailist_crm_common::reference::{parse_seconds, CATEGORIES};
use nailist_crm_common::{assess_time, CaptureOptions, Notice};

use crate::components::{
    layout::Layout,
    reference_table::{
        NationalAverageTable, ReferenceTimeTable, NATIONAL_AVERAGE_CHART_ID, REFERENCE_CHART_ID,
    },
    toast::Toast,
};
use crate::export::capture::{charts_to_images, download_data_url, image_file_name};
use crate::pages::use_session_guard;

#[component]
pub fn CustomerDetailPage() -> impl IntoView {
    use_session_guard();

    let params = use_params_map();
    let customer_id = move || params.with(|p| p.get("id").unwrap_or_default());

    let (is_exporting, set_is_exporting) = signal(false);
    let (notice, set_notice) = signal(None::<Notice>);

    let on_export = move |_| {
        set_is_exporting.set(true);
        set_notice.set(None);
        spawn_local(async move {
            let ids = [REFERENCE_CHART_ID, NATIONAL_AVERAGE_CHART_ID];
            let images = charts_to_images(&ids, &CaptureOptions::default()).await;

            let mut saved = 0;
            for (id, data_url) in &images {
                if data_url.is_empty() {
                    continue;
                }
                download_data_url(data_url, &image_file_name(id));
                saved += 1;
            }

            set_notice.set(Some(if saved == images.len() {
                Notice::info(format!("{}件の画像を保存しました", saved))
            } else {
                Notice::error(format!("{}件中{}件の画像化に失敗しました", images.len(), images.len() - saved))
            }));
            set_is_exporting.set(false);
        });
    };

    // 計測タイムの評価
    let (category, set_category) = signal(CATEGORIES[0].to_string());
    let (measured, set_measured) = signal(String::new());
    let assessment = move || {
        let seconds = parse_seconds(&measured.get())?;
        category.with(|c| assess_time(c, seconds))
    };

    view! {
        <Layout>
            <div class="page-header">
                <h1>{move || format!("顧客 {}", customer_id())}</h1>
                <a href=CUSTOMERS_PATH class="btn btn-tertiary">"一覧へ戻る"</a>
            </div>

            {move || notice.get().map(|n| view! {
                <Toast notice=n on_close=move |()| set_notice.set(None) />
            })}

            <div class="reference-grid">
                <ReferenceTimeTable />
                <NationalAverageTable />
            </div>

            <div class="card time-assessment">
                <h3>"計測タイム評価"</h3>
                <div class="filter-bar">
                    <select on:change=move |ev| set_category.set(event_target_value(&ev))>
                        {CATEGORIES
                            .iter()
                            .map(|c| view! { <option value=*c>{*c}</option> })
                            .collect_view()}
                    </select>
                    <input
                        type="text"
                        class="search-input"
                        placeholder="18:30"
                        prop:value=move || measured.get()
                        on:input=move |ev| set_measured.set(event_target_value(&ev))
                    />
                </div>
                <p>
                    {move || match assessment() {
                        Some(a) => a.summary(),
                        None => "m:ss 形式で入力してください".to_string(),
                    }}
                </p>
            </div>

            <div class="export-buttons">
                <button
                    class="btn btn-secondary"
                    disabled=move || is_exporting.get()
                    on:click=on_export
                >
                    {move || if is_exporting.get() { "画像化中..." } else { "画像として保存" }}
                </button>
            </div>
        </Layout>
    }
}
