//! 基準タイム表・全国平均表
//!
//! 画像化の対象にするため、それぞれ固定IDの要素で包む。

use leptos::prelude::*;
use nailist_crm_common::reference::{format_seconds, reference_times, CATEGORIES};
use nailist_crm_common::NATIONAL_AVERAGES;

pub const REFERENCE_CHART_ID: &str = "chart-reference-times";
pub const NATIONAL_AVERAGE_CHART_ID: &str = "chart-national-average";

#[component]
pub fn ReferenceTimeTable() -> impl IntoView {
    let rows = CATEGORIES
        .iter()
        .map(|category| {
            let cells = reference_times(category)
                .map(|r| view! { <td>{format!("{} ({}点)", format_seconds(r.seconds), r.score)}</td> })
                .collect_view();
            view! {
                <tr>
                    <th scope="row">{*category}</th>
                    {cells}
                </tr>
            }
        })
        .collect_view();

    view! {
        <section id=REFERENCE_CHART_ID class="reference-table">
            <h3>"基準タイム"</h3>
            <table>
                <thead>
                    <tr>
                        <th>"カテゴリ"</th>
                        <th>"S"</th>
                        <th>"A"</th>
                        <th>"B"</th>
                        <th>"C"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}

#[component]
pub fn NationalAverageTable() -> impl IntoView {
    let rows = NATIONAL_AVERAGES
        .iter()
        .map(|avg| {
            view! {
                <tr>
                    <th scope="row">{avg.category}</th>
                    <td>{avg.rating.as_str()}</td>
                    <td>{avg.score}</td>
                    <td>{format_seconds(avg.seconds)}</td>
                </tr>
            }
        })
        .collect_view();

    view! {
        <section id=NATIONAL_AVERAGE_CHART_ID class="reference-table">
            <h3>"全国平均"</h3>
            <table>
                <thead>
                    <tr>
                        <th>"カテゴリ"</th>
                        <th>"評価"</th>
                        <th>"点数"</th>
                        <th>"タイム"</th>
                    </tr>
                </thead>
                <tbody>{rows}</tbody>
            </table>
        </section>
    }
}
