//! ログイン・新規登録画面

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use nailist_crm_common::route::{AUTH_PATH, CUSTOMERS_PATH};
use nailist_crm_common::{submit_auth, AuthForm, AuthMode, Credentials, CustomerBackend};

use crate::api::supabase::ClientHandle;
use crate::components::{loading::Loading, toast::Toast};

/// 登録確認メールのリンク先（`<origin>/auth`）
pub fn sign_up_redirect_target(origin: Option<&str>) -> String {
    match origin {
        Some(origin) if !origin.is_empty() => format!("{}{}", origin.trim_end_matches('/'), AUTH_PATH),
        _ => AUTH_PATH.to_string(),
    }
}

fn current_origin() -> Option<String> {
    web_sys::window().and_then(|w| w.location().origin().ok())
}

#[component]
pub fn AuthPage() -> impl IntoView {
    let client = expect_context::<ClientHandle>();
    let navigate = use_navigate();

    let form = RwSignal::new(AuthForm::new(client.config().signup_enabled));
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    // ログイン済みか確認中はフォームを出さない
    let (checking, set_checking) = signal(true);

    {
        let navigate = navigate.clone();
        spawn_local(async move {
            match client.current_session().await {
                Ok(Some(_)) => navigate(CUSTOMERS_PATH, Default::default()),
                Ok(None) => set_checking.set(false),
                Err(e) => {
                    web_sys::console::warn_1(&format!("セッション確認失敗: {}", e).into());
                    set_checking.set(false);
                }
            }
        });
    }

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if form.with_untracked(|f| f.submitting) {
            return;
        }
        form.update(|f| f.begin_submit());

        let mode = form.with_untracked(|f| f.mode);
        let credentials = Credentials {
            email: email.get_untracked(),
            password: password.get_untracked(),
        };
        let redirect_to = sign_up_redirect_target(current_origin().as_deref());
        let navigate = navigate.clone();

        spawn_local(async move {
            let outcome = submit_auth(client, mode, &credentials, &redirect_to).await;
            let mut signed_in = false;
            form.update(|f| signed_in = f.apply(outcome).is_some());
            if signed_in {
                navigate(CUSTOMERS_PATH, Default::default());
            }
        });
    };

    let mode = move || form.with(|f| f.mode);
    let notice = move || form.with(|f| f.notice.clone());

    view! {
        <div class="auth-container">
            <Show when=move || !checking.get() fallback=|| view! { <Loading /> }>
                <div class="auth-card">
                    <h1>"ネイリスト技能診断"</h1>
                    <h2>{move || mode().title()}</h2>

                    {move || notice().map(|n| view! {
                        <Toast notice=n on_close=move |()| form.update(|f| f.notice = None) />
                    })}

                    <form on:submit=on_submit.clone()>
                        <div class="form-group">
                            <label for="email">"メールアドレス"</label>
                            <input
                                type="email"
                                id="email"
                                required
                                autocomplete="email"
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                        </div>
                        <div class="form-group">
                            <label for="password">"パスワード"</label>
                            <input
                                type="password"
                                id="password"
                                required
                                autocomplete=move || match mode() {
                                    AuthMode::SignIn => "current-password",
                                    AuthMode::SignUp => "new-password",
                                }
                                prop:value=move || password.get()
                                on:input=move |ev| set_password.set(event_target_value(&ev))
                            />
                        </div>
                        <button
                            type="submit"
                            class="btn btn-primary"
                            disabled=move || form.with(|f| f.submitting)
                        >
                            {move || if form.with(|f| f.submitting) { "送信中..." } else { mode().submit_label() }}
                        </button>
                    </form>

                    // 新規登録への切り替えは設定で有効な場合のみ
                    <button
                        type="button"
                        class="link-button"
                        disabled=move || !form.with(|f| f.signup_enabled)
                        on:click=move |_| form.update(|f| f.toggle_mode())
                    >
                        {move || match mode() {
                            AuthMode::SignIn => "アカウントをお持ちでない方はこちら",
                            AuthMode::SignUp => "ログインはこちら",
                        }}
                    </button>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_up_redirect_target() {
        assert_eq!(
            sign_up_redirect_target(Some("https://crm.example.com")),
            "https://crm.example.com/auth"
        );
        assert_eq!(sign_up_redirect_target(Some("https://crm.example.com/")), "https://crm.example.com/auth");
        assert_eq!(sign_up_redirect_target(None), "/auth");
    }
}
