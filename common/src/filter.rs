//! 顧客一覧の検索フィルタ
//!
//! 名前は大文字小文字を区別しない部分一致、受付番号は入力そのままの部分一致。
//! 取得済みの一覧を絞り込むだけで、並び順は変えない。

use crate::types::Customer;

/// 検索文字列で顧客一覧を絞り込む
///
/// # Examples
/// ```
/// use nailist_crm_common::{filter_customers, Customer};
///
/// let customers: Vec<Customer> = serde_json::from_str(
///     r#"[{"id": 1, "external_id": "N-001", "name": "Aoi", "status": "new"}]"#,
/// ).unwrap();
/// assert_eq!(filter_customers(&customers, "aoi").len(), 1);
/// assert_eq!(filter_customers(&customers, "n-001").len(), 0);
/// ```
pub fn filter_customers<'a>(customers: &'a [Customer], query: &str) -> Vec<&'a Customer> {
    if query.is_empty() {
        return customers.iter().collect();
    }

    let folded = query.to_lowercase();
    customers
        .iter()
        .filter(|c| c.name.to_lowercase().contains(&folded) || c.external_id.contains(query))
        .collect()
}
