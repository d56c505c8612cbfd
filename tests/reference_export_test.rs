//! 基準タイム出力の統合テスト

use nailist_crm::reference_export::{export_reference, output_path, ReferenceFormat};
use nailist_crm_common::{NATIONAL_AVERAGES, REFERENCE_TIMES};
use tempfile::tempdir;

#[test]
fn test_excel_export_creates_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = output_path(dir.path(), ReferenceFormat::Excel);
    assert!(path.ends_with("基準タイム.xlsx"));

    let result = export_reference(&path, ReferenceFormat::Excel);
    assert!(result.is_ok(), "Excel生成に失敗: {:?}", result.err());

    let metadata = std::fs::metadata(&path).expect("ファイルメタデータ取得失敗");
    assert!(metadata.len() > 0, "Excelファイルが空");
}

#[test]
fn test_json_export_contains_both_tables() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = dir.path().join("reference.json");

    export_reference(&path, ReferenceFormat::Json).expect("JSON出力失敗");

    let content = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&content).unwrap();
    assert_eq!(value["referenceTimes"].as_array().map(|a| a.len()), Some(REFERENCE_TIMES.len()));
    assert_eq!(value["nationalAverages"].as_array().map(|a| a.len()), Some(NATIONAL_AVERAGES.len()));
    assert_eq!(value["nationalAverages"][0]["category"], "ジェルオフ");
}

#[test]
fn test_explicit_file_path_is_kept() {
    let dir = tempdir().expect("Failed to create temp dir");
    let file = dir.path().join("out.xlsx");
    assert_eq!(output_path(&file, ReferenceFormat::Excel), file);
}

#[test]
fn test_format_from_str() {
    assert_eq!("xlsx".parse::<ReferenceFormat>(), Ok(ReferenceFormat::Excel));
    assert_eq!("JSON".parse::<ReferenceFormat>(), Ok(ReferenceFormat::Json));
    assert!("pdf".parse::<ReferenceFormat>().is_err());
}
