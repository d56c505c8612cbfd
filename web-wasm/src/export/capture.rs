//! グラフ画像化（WASM版）
//!
//! JavaScript Bridge経由でhtml2canvasを使用してDOM要素をPNG化

use std::collections::BTreeMap;

use nailist_crm_common::capture::{capture_batch, is_png_data_url};
use nailist_crm_common::{CaptureOptions, Error, Result};
use wasm_bindgen::prelude::*;

use crate::api::js_error_message;

#[wasm_bindgen(module = "/js/capture-bridge.js")]
extern "C" {
    /// 要素を描画してPNG Data URLを返す
    #[wasm_bindgen(js_name = "captureElement", catch)]
    async fn capture_element_js(
        element: &web_sys::Element,
        options_json: &str,
    ) -> std::result::Result<JsValue, JsValue>;
}

#[wasm_bindgen(module = "/js/download.js")]
extern "C" {
    #[wasm_bindgen(js_name = "downloadDataUrl")]
    fn download_data_url_js(data_url: &str, filename: &str);
}

/// 画像ファイル名（`chart-1` → `chart-1.png`）
pub fn image_file_name(id: &str) -> String {
    format!("{}.png", id)
}

/// 指定IDの要素をPNG Data URLに変換
///
/// 要素が存在しない場合は `Error::ElementNotFound` を返す。
pub async fn element_to_image(id: &str, options: &CaptureOptions) -> Result<String> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| Error::Capture("documentが取得できません".into()))?;
    let element = document
        .get_element_by_id(id)
        .ok_or_else(|| Error::ElementNotFound(id.to_string()))?;

    let options_json = options.to_json()?;
    let value = capture_element_js(&element, &options_json)
        .await
        .map_err(|e| Error::Capture(js_error_message(&e)))?;

    value
        .as_string()
        .filter(|url| is_png_data_url(url))
        .ok_or_else(|| Error::Capture(format!("PNGを取得できませんでした: {}", id)))
}

/// 複数要素をまとめて画像化（失敗した要素は空文字）
pub async fn charts_to_images(ids: &[&str], options: &CaptureOptions) -> BTreeMap<String, String> {
    capture_batch(
        ids.iter().copied(),
        |id| {
            let options = options.clone();
            async move { element_to_image(&id, &options).await }
        },
        |id, e| {
            web_sys::console::error_1(&format!("グラフ画像化失敗 ({}): {}", id, e).into());
        },
    )
    .await
}

/// Data URLをダウンロード
pub fn download_data_url(data_url: &str, filename: &str) {
    download_data_url_js(data_url, filename);
}


#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    const STUB_PNG: &str = "data:image/png;base64,iVBORw0KGgo=";

    /// html2canvasが読み込まれていなければ固定PNGを返すものに差し替える
    fn ensure_html2canvas() {
        let window = web_sys::window().unwrap();
        let current = js_sys::Reflect::get(&window, &JsValue::from_str("html2canvas")).unwrap();
        if current.is_function() {
            return;
        }
        let stub = js_sys::Function::new_with_args(
            "element, options",
            &format!("return Promise.resolve({{ toDataURL: () => '{}' }});", STUB_PNG),
        );
        js_sys::Reflect::set(&window, &JsValue::from_str("html2canvas"), &stub).unwrap();
    }

    fn add_element(id: &str) {
        let body = web_sys::window().unwrap().document().unwrap().body().unwrap();
        body.insert_adjacent_html(
            "beforeend",
            &format!(r#"<div id="{}" style="width:40px;height:20px">{}</div>"#, id, id),
        )
        .unwrap();
    }

    fn remove_element(id: &str) {
        let document = web_sys::window().unwrap().document().unwrap();
        if let Some(element) = document.get_element_by_id(id) {
            element.remove();
        }
    }

    #[wasm_bindgen_test]
    async fn wasm_existing_element_becomes_png() {
        ensure_html2canvas();
        add_element("chart-1");

        let result = element_to_image("chart-1", &CaptureOptions::default()).await;
        remove_element("chart-1");

        let data_url = result.expect("画像化できるはず");
        assert!(is_png_data_url(&data_url));
    }

    #[wasm_bindgen_test]
    async fn wasm_missing_element_is_rejected() {
        let result = element_to_image("missing", &CaptureOptions::default()).await;
        assert!(matches!(result, Err(Error::ElementNotFound(id)) if id == "missing"));
    }

    #[wasm_bindgen_test]
    async fn wasm_batch_isolates_missing_element() {
        ensure_html2canvas();
        add_element("a");
        add_element("b");

        let images = charts_to_images(&["a", "missing", "b"], &CaptureOptions::default()).await;
        remove_element("a");
        remove_element("b");

        assert_eq!(images.len(), 3);
        assert_eq!(images["missing"], "");
        assert!(is_png_data_url(&images["a"]));
        assert!(is_png_data_url(&images["b"]));
    }
}
