//! 顧客一覧の表示ルール
//!
//! - ステータスバッジ（未知のステータスは装飾なしでそのまま表示）
//! - 職業区分（`null` は「社員」として扱う）
//! - 登録日（日本時間の `YYYY/M/D`）

use chrono::{DateTime, FixedOffset, NaiveDateTime};

use crate::types::{CustomerStatus, Occupation};

/// 値がない項目の表示
pub const EMPTY_LABEL: &str = "—";

/// `occupation_type` が `null` の行の表示
pub const NULL_OCCUPATION_LABEL: &str = "社員";

const JST_OFFSET_SECS: i32 = 9 * 3600;

/// ステータスバッジ（ラベルとCSSクラス）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    pub label: &'static str,
    pub class: &'static str,
}

impl CustomerStatus {
    /// 既知のステータスのバッジ。未知のステータスは `None`
    pub fn badge(&self) -> Option<StatusBadge> {
        match self {
            CustomerStatus::New => Some(StatusBadge { label: "新規", class: "badge badge-new" }),
            CustomerStatus::InProgress => Some(StatusBadge { label: "診断中", class: "badge badge-progress" }),
            CustomerStatus::Completed => Some(StatusBadge { label: "完了", class: "badge badge-completed" }),
            CustomerStatus::Other(_) => None,
        }
    }

    /// 表示文字列（バッジのラベル、なければ元の値）
    pub fn display_label(&self) -> &str {
        match self.badge() {
            Some(badge) => badge.label,
            None => self.as_str(),
        }
    }
}

/// 職業区分の表示
pub fn occupation_label(occupation: &Occupation) -> &str {
    match occupation {
        Occupation::Null => NULL_OCCUPATION_LABEL,
        Occupation::Absent => EMPTY_LABEL,
        Occupation::Value(v) if v.is_empty() => EMPTY_LABEL,
        Occupation::Value(v) => v,
    }
}

/// 任意項目の表示（未設定・空文字は「—」）
pub fn text_or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => EMPTY_LABEL,
    }
}

/// 年齢の表示
pub fn age_label(age: Option<u32>) -> String {
    match age {
        Some(age) => format!("{}歳", age),
        None => EMPTY_LABEL.to_string(),
    }
}

/// 登録日時を日本時間の日付（`2025/3/1`）に整形
///
/// タイムゾーンなしの値（`timestamp` 列）は日付部分をそのまま使う。
/// パースできない値はそのまま返す。
pub fn format_created_at(created_at: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(created_at) {
        let Some(jst) = FixedOffset::east_opt(JST_OFFSET_SECS) else {
            return created_at.to_string();
        };
        return parsed.with_timezone(&jst).format("%Y/%-m/%-d").to_string();
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(created_at, fmt).ok())
        .map(|naive| naive.format("%Y/%-m/%-d").to_string())
        .unwrap_or_else(|| created_at.to_string())
}
