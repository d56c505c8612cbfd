//! 一時的な通知コンポーネント
//!
//! 表示から一定時間で自動的に閉じる。閉じるボタンでも閉じられる。

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo::timers::callback::Timeout;
use leptos::prelude::*;
use nailist_crm_common::{Notice, NoticeKind};

/// 自動で閉じるまでの時間（ミリ秒）
pub const TOAST_DURATION_MS: u32 = 5_000;

#[component]
pub fn Toast<F>(
    notice: Notice,
    on_close: F,
    /// 自動で閉じるまでの時間（省略時は `TOAST_DURATION_MS`）
    #[prop(optional)]
    duration_ms: Option<u32>,
) -> impl IntoView
where
    F: Fn(()) + Clone + 'static,
{
    let class = match notice.kind {
        NoticeKind::Info => "toast toast-info",
        NoticeKind::Error => "toast toast-error",
    };

    // 先に閉じられた・差し替えられた通知のタイマーは何もしない
    let alive = Arc::new(AtomicBool::new(true));
    {
        let alive = alive.clone();
        on_cleanup(move || alive.store(false, Ordering::Relaxed));
    }
    {
        let on_close = on_close.clone();
        Timeout::new(duration_ms.unwrap_or(TOAST_DURATION_MS), move || {
            if alive.load(Ordering::Relaxed) {
                on_close(());
            }
        })
        .forget();
    }

    view! {
        <div class=class role="alert">
            <span class="toast-message">{notice.message}</span>
            <button class="toast-close" aria-label="閉じる" on:click=move |_| on_close(())>
                "×"
            </button>
        </div>
    }
}

#[cfg(all(target_arch = "wasm32", test))]
mod wasm_tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_futures::JsFuture;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    async fn sleep(ms: i32) {
        let promise = js_sys::Promise::new(&mut |resolve, _| {
            web_sys::window()
                .unwrap()
                .set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, ms)
                .unwrap();
        });
        JsFuture::from(promise).await.unwrap();
    }

    #[wasm_bindgen_test]
    async fn wasm_toast_closes_itself() {
        let closed = Rc::new(Cell::new(0));
        let counter = closed.clone();
        let _handle = leptos::mount::mount_to_body(move || {
            let counter = counter.clone();
            view! {
                <Toast
                    notice=Notice::info("保存しました")
                    on_close=move |()| counter.set(counter.get() + 1)
                    duration_ms=20
                />
            }
        });

        assert_eq!(closed.get(), 0);
        sleep(100).await;
        assert_eq!(closed.get(), 1);
    }
}
