//! Nailist CRM Web App (Leptos + WASM)

mod app;
mod api;
mod components;
mod pages;
mod export;

use leptos::prelude::*;
use nailist_crm_common::backend::{parse_flag, BackendConfig};
use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    // 接続設定はビルド時の環境変数から。未設定なら起動しない
    let config = BackendConfig::new(option_env!("SUPABASE_URL"), option_env!("SUPABASE_ANON_KEY"))
        .map_err(|e| JsValue::from_str(&e.to_string()))?
        .with_signup(parse_flag(option_env!("NAILIST_SIGNUP_ENABLED")));
    let client = api::supabase::install(config);

    leptos::mount::mount_to_body(move || view! { <app::App client=client /> });
    Ok(())
}
