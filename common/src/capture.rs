//! グラフ画像化の共通部分
//!
//! 画像化そのものはブラウザ側（JSブリッジ）で行う。
//! ここではオプションと、複数要素をまとめて画像化するときの
//! 1件ごとの失敗の扱いだけを持つ。

use std::collections::BTreeMap;
use std::future::Future;

use serde::Serialize;

use crate::error::Error;

/// PNG Data URLの先頭
pub const PNG_DATA_URL_PREFIX: &str = "data:image/png;base64,";

/// 画像化オプション
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOptions {
    /// 描画倍率
    pub scale: f64,
    /// 背景色（CSSカラー）
    pub background_color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            scale: 2.0,
            background_color: "#ffffff".to_string(),
            width: None,
            height: None,
        }
    }
}

impl CaptureOptions {
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

/// PNG Data URLかどうか
pub fn is_png_data_url(value: &str) -> bool {
    value.starts_with(PNG_DATA_URL_PREFIX) && value.len() > PNG_DATA_URL_PREFIX.len()
}

/// 複数の要素を順番に画像化する
///
/// 1件の失敗で全体を止めず、その要素は空文字として記録する。
/// 失敗理由は `on_error` にだけ渡す。
pub async fn capture_batch<I, S, F, Fut, L>(
    ids: I,
    mut capture: F,
    mut on_error: L,
) -> BTreeMap<String, String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    F: FnMut(String) -> Fut,
    Fut: Future<Output = crate::Result<String>>,
    L: FnMut(&str, &Error),
{
    let mut images = BTreeMap::new();
    for id in ids {
        let id = id.as_ref().to_string();
        let image = match capture(id.clone()).await {
            Ok(data_url) => data_url,
            Err(e) => {
                on_error(&id, &e);
                String::new()
            }
        };
        images.insert(id, image);
    }
    images
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;

    async fn fake_capture(id: String) -> crate::Result<String> {
        if id == "missing" {
            Err(Error::ElementNotFound(id))
        } else {
            Ok(format!("{}{}", PNG_DATA_URL_PREFIX, "iVBORw0KGgo"))
        }
    }

    #[test]
    fn test_default_options() {
        let options = CaptureOptions::default();
        assert_eq!(options.scale, 2.0);
        assert_eq!(options.background_color, "#ffffff");

        let json = options.to_json().unwrap();
        assert!(json.contains("\"backgroundColor\":\"#ffffff\""));
        assert!(!json.contains("width"));
    }

    #[test]
    fn test_options_with_size_override() {
        let options = CaptureOptions { width: Some(800), height: Some(600), ..Default::default() };
        let json = options.to_json().unwrap();
        assert!(json.contains("\"width\":800"));
        assert!(json.contains("\"height\":600"));
    }

    #[test]
    fn test_batch_isolates_failures() {
        let mut failed = Vec::new();
        let images = block_on(capture_batch(
            ["a", "missing", "b"],
            fake_capture,
            |id, _| failed.push(id.to_string()),
        ));

        assert_eq!(images.len(), 3);
        assert_eq!(images["missing"], "");
        assert!(is_png_data_url(&images["a"]));
        assert!(is_png_data_url(&images["b"]));
        assert_eq!(failed, vec!["missing".to_string()]);
    }

    #[test]
    fn test_batch_calls_capture_every_time() {
        let mut calls = 0;
        let images = block_on(capture_batch(
            vec!["chart-1".to_string(), "chart-1".to_string()],
            |id| {
                calls += 1;
                fake_capture(id)
            },
            |_, _| {},
        ));
        assert_eq!(calls, 2);
        assert_eq!(images.len(), 1);
    }

    #[test]
    fn test_is_png_data_url() {
        assert!(is_png_data_url("data:image/png;base64,AAAA"));
        assert!(!is_png_data_url("data:image/png;base64,"));
        assert!(!is_png_data_url("data:image/jpeg;base64,AAAA"));
    }
}
