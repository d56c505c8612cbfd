//! 基準タイム表・全国平均表の出力（Excel / JSON）

use crate::error::{CrmError, Result};
use nailist_crm_common::reference::{format_seconds, parse_seconds, reference_times, CATEGORIES};
use nailist_crm_common::{
    assess_time, NationalAverage, ReferenceTime, TimeAssessment, NATIONAL_AVERAGES, REFERENCE_TIMES,
};
use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, XlsxError};
use serde::Serialize;
use std::path::Path;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ReferenceFormat {
    #[default]
    Excel,
    Json,
}

impl ReferenceFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ReferenceFormat::Excel => "xlsx",
            ReferenceFormat::Json => "json",
        }
    }
}

impl std::str::FromStr for ReferenceFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "excel" | "xlsx" => Ok(ReferenceFormat::Excel),
            "json" => Ok(ReferenceFormat::Json),
            _ => Err(format!("Unknown format: {}. Use excel or json", s)),
        }
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ReferencePayload {
    reference_times: &'static [ReferenceTime],
    national_averages: &'static [NationalAverage],
}

fn xlsx_error(e: XlsxError) -> CrmError {
    CrmError::ExcelGeneration(e.to_string())
}

/// 出力先ファイル（ディレクトリ指定ならファイル名を補う）
pub fn output_path(output: &Path, format: ReferenceFormat) -> std::path::PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join(format!("基準タイム.{}", format.extension()))
    } else {
        output.to_path_buf()
    }
}

pub fn export_reference(path: &Path, format: ReferenceFormat) -> Result<()> {
    match format {
        ReferenceFormat::Excel => generate_excel(path),
        ReferenceFormat::Json => {
            let payload = ReferencePayload {
                reference_times: REFERENCE_TIMES,
                national_averages: NATIONAL_AVERAGES,
            };
            std::fs::write(path, serde_json::to_string_pretty(&payload)?)?;
            Ok(())
        }
    }
}

/// 「基準タイム」「全国平均」の2シートを出力
pub fn generate_excel(path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();

    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0xF8BBD0))
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);
    let cell_format = Format::new()
        .set_align(FormatAlign::Center)
        .set_border(FormatBorder::Thin);

    let sheet = workbook.add_worksheet();
    sheet.set_name("基準タイム").map_err(xlsx_error)?;
    sheet.set_column_width(0, 18).map_err(xlsx_error)?;
    for (col, title) in ["カテゴリ", "S", "A", "B", "C"].iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *title, &header_format)
            .map_err(xlsx_error)?;
    }
    for (row, category) in CATEGORIES.iter().enumerate() {
        let row = row as u32 + 1;
        sheet
            .write_string_with_format(row, 0, *category, &cell_format)
            .map_err(xlsx_error)?;
        for (col, r) in reference_times(category).enumerate() {
            sheet
                .write_string_with_format(
                    row,
                    col as u16 + 1,
                    format!("{} ({}点)", format_seconds(r.seconds), r.score),
                    &cell_format,
                )
                .map_err(xlsx_error)?;
        }
    }
    for col in 1..=4u16 {
        sheet.set_column_width(col, 14).map_err(xlsx_error)?;
    }

    let sheet = workbook.add_worksheet();
    sheet.set_name("全国平均").map_err(xlsx_error)?;
    sheet.set_column_width(0, 18).map_err(xlsx_error)?;
    for (col, title) in ["カテゴリ", "評価", "点数", "タイム"].iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *title, &header_format)
            .map_err(xlsx_error)?;
    }
    for (row, avg) in NATIONAL_AVERAGES.iter().enumerate() {
        let row = row as u32 + 1;
        sheet
            .write_string_with_format(row, 0, avg.category, &cell_format)
            .map_err(xlsx_error)?;
        sheet
            .write_string_with_format(row, 1, avg.rating.as_str(), &cell_format)
            .map_err(xlsx_error)?;
        sheet
            .write_number_with_format(row, 2, f64::from(avg.score), &cell_format)
            .map_err(xlsx_error)?;
        sheet
            .write_string_with_format(row, 3, format_seconds(avg.seconds), &cell_format)
            .map_err(xlsx_error)?;
    }

    workbook.save(path).map_err(xlsx_error)?;
    Ok(())
}

/// 計測タイム（`m:ss` または秒）を基準タイムで評価
pub fn rate_time(category: &str, time: &str) -> Result<TimeAssessment> {
    let seconds = parse_seconds(time)
        .ok_or_else(|| CrmError::Config(format!("タイムの形式が不正です: {} (例: 18:30)", time)))?;
    assess_time(category, seconds).ok_or_else(|| {
        CrmError::Config(format!(
            "未登録のカテゴリです: {} (候補: {})",
            category,
            CATEGORIES.join(", ")
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use nailist_crm_common::Rating;

    #[test]
    fn test_rate_time() {
        let assessment = rate_time("フレンチ", "25:00").expect("評価できるはず");
        assert_eq!(assessment.seconds, 1500);
        assert_eq!(assessment.achieved.map(|r| r.rating), Some(Rating::S));
    }

    #[test]
    fn test_rate_time_rejects_bad_input() {
        assert!(matches!(rate_time("フレンチ", "25分"), Err(CrmError::Config(_))));
        let err = rate_time("ペディキュア", "10:00").unwrap_err();
        assert!(err.to_string().contains("ジェルオフ"));
    }
}
