//! 技能診断の基準タイム・全国平均データ
//!
//! 施術カテゴリごとの（評価, 点数, タイム）を定数で持つ。
//! 実行中に変更されることはない。

use serde::Serialize;

/// 評価ランク（S が最上位）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum Rating {
    S,
    A,
    B,
    C,
}

impl Rating {
    pub fn as_str(&self) -> &'static str {
        match self {
            Rating::S => "S",
            Rating::A => "A",
            Rating::B => "B",
            Rating::C => "C",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 基準タイム（この秒数以内なら `rating`）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceTime {
    pub category: &'static str,
    pub rating: Rating,
    pub score: u8,
    pub seconds: u32,
}

/// 全国平均（表示用の上書き値）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NationalAverage {
    pub category: &'static str,
    pub rating: Rating,
    pub score: u8,
    pub seconds: u32,
}

/// 施術カテゴリ（表示順）
pub const CATEGORIES: &[&str] = &[
    "ジェルオフ",
    "ファイリング",
    "ケア",
    "ワンカラー",
    "グラデーション",
    "フレンチ",
];

const fn rt(category: &'static str, rating: Rating, score: u8, seconds: u32) -> ReferenceTime {
    ReferenceTime { category, rating, score, seconds }
}

/// 基準タイム表（カテゴリごとに評価の高い順）
pub const REFERENCE_TIMES: &[ReferenceTime] = &[
    rt("ジェルオフ", Rating::S, 100, 600),
    rt("ジェルオフ", Rating::A, 80, 900),
    rt("ジェルオフ", Rating::B, 60, 1200),
    rt("ジェルオフ", Rating::C, 40, 1500),
    rt("ファイリング", Rating::S, 100, 300),
    rt("ファイリング", Rating::A, 80, 420),
    rt("ファイリング", Rating::B, 60, 540),
    rt("ファイリング", Rating::C, 40, 720),
    rt("ケア", Rating::S, 100, 900),
    rt("ケア", Rating::A, 80, 1200),
    rt("ケア", Rating::B, 60, 1500),
    rt("ケア", Rating::C, 40, 1800),
    rt("ワンカラー", Rating::S, 100, 900),
    rt("ワンカラー", Rating::A, 80, 1200),
    rt("ワンカラー", Rating::B, 60, 1500),
    rt("ワンカラー", Rating::C, 40, 1800),
    rt("グラデーション", Rating::S, 100, 1200),
    rt("グラデーション", Rating::A, 80, 1500),
    rt("グラデーション", Rating::B, 60, 1800),
    rt("グラデーション", Rating::C, 40, 2400),
    rt("フレンチ", Rating::S, 100, 1500),
    rt("フレンチ", Rating::A, 80, 1800),
    rt("フレンチ", Rating::B, 60, 2400),
    rt("フレンチ", Rating::C, 40, 3000),
];

/// 全国平均の上書き値
pub const NATIONAL_AVERAGES: &[NationalAverage] = &[
    NationalAverage { category: "ジェルオフ", rating: Rating::B, score: 62, seconds: 1140 },
    NationalAverage { category: "ファイリング", rating: Rating::B, score: 65, seconds: 510 },
    NationalAverage { category: "ケア", rating: Rating::B, score: 58, seconds: 1560 },
    NationalAverage { category: "ワンカラー", rating: Rating::A, score: 71, seconds: 1320 },
    NationalAverage { category: "グラデーション", rating: Rating::B, score: 60, seconds: 1800 },
    NationalAverage { category: "フレンチ", rating: Rating::C, score: 52, seconds: 2580 },
];

/// カテゴリの基準タイム（評価の高い順）
pub fn reference_times(category: &str) -> impl Iterator<Item = &'static ReferenceTime> + '_ {
    REFERENCE_TIMES.iter().filter(move |r| r.category == category)
}

/// カテゴリ・評価の基準タイム
pub fn lookup_reference(category: &str, rating: Rating) -> Option<&'static ReferenceTime> {
    reference_times(category).find(|r| r.rating == rating)
}

/// カテゴリの全国平均
pub fn national_average(category: &str) -> Option<&'static NationalAverage> {
    NATIONAL_AVERAGES.iter().find(|n| n.category == category)
}

/// 計測タイムに対する評価（基準タイム以内の最上位ランク）
pub fn rating_for_time(category: &str, seconds: u32) -> Option<Rating> {
    reference_times(category)
        .find(|r| seconds <= r.seconds)
        .map(|r| r.rating)
}

/// 計測タイムの評価結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAssessment {
    pub category: &'static str,
    pub seconds: u32,
    /// 基準タイムをどれも満たさなければ `None`
    pub achieved: Option<&'static ReferenceTime>,
    pub national_average: Option<&'static NationalAverage>,
}

impl TimeAssessment {
    /// 全国平均との差（秒、マイナスなら平均より速い）
    pub fn diff_from_average(&self) -> Option<i64> {
        self.national_average
            .map(|avg| i64::from(self.seconds) - i64::from(avg.seconds))
    }

    /// 1行の要約（`ケア 18:00 → A (80点) / 全国平均 B 26:00`）
    pub fn summary(&self) -> String {
        let achieved = match self.achieved {
            Some(r) => format!("{} ({}点)", r.rating, r.score),
            None => "基準外".to_string(),
        };
        let average = match self.national_average {
            Some(avg) => format!("全国平均 {} {}", avg.rating, format_seconds(avg.seconds)),
            None => "全国平均なし".to_string(),
        };
        format!("{} {} → {} / {}", self.category, format_seconds(self.seconds), achieved, average)
    }
}

/// 計測タイムを評価する（未登録のカテゴリは `None`）
pub fn assess_time(category: &str, seconds: u32) -> Option<TimeAssessment> {
    let category = *CATEGORIES.iter().find(|c| **c == category)?;
    let achieved = rating_for_time(category, seconds).and_then(|r| lookup_reference(category, r));
    Some(TimeAssessment {
        category,
        seconds,
        achieved,
        national_average: national_average(category),
    })
}

/// `m:ss` または秒数の文字列を秒に変換
pub fn parse_seconds(input: &str) -> Option<u32> {
    let input = input.trim();
    match input.split_once(':') {
        Some((m, s)) => {
            let m: u32 = m.trim().parse().ok()?;
            let s: u32 = s.trim().parse().ok()?;
            (s < 60).then(|| m * 60 + s)
        }
        None => input.parse().ok(),
    }
}

/// 秒数を `m:ss` 形式に整形
pub fn format_seconds(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}
