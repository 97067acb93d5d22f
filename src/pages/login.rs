//! Login page with a username/password form.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::net::api;
use crate::routes;
use crate::state::auth::AuthState;

/// Login page — a successful sign-in stores the identity and returns the
/// user to the path the guard recorded in the `redirect` query parameter,
/// or to the authenticated home when there is none.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();
    let query = use_query_map();

    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let pending = RwSignal::new(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }

        let user = username.get_untracked();
        let pass = password.get_untracked();
        let target = query
            .with_untracked(|q| q.get("redirect"))
            .unwrap_or_else(|| routes::USER_HOME.path.to_owned());
        let navigate = navigate.clone();

        pending.set(true);
        error.set(None);

        leptos::task::spawn_local(async move {
            match api::login(&user, &pass).await {
                Ok(identity) => {
                    auth.update(|a| {
                        a.identity = Some(identity);
                        a.loading = false;
                    });
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => {
                    error.set(Some(e.to_string()));
                    pending.set(false);
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <h1>"Storefront"</h1>
            <form class="login-form" on:submit=submit>
                <label class="login-form__label">
                    "Username"
                    <input
                        class="login-form__input"
                        type="text"
                        autocomplete="username"
                        prop:value=move || username.get()
                        on:input=move |ev| username.set(event_target_value(&ev))
                    />
                </label>
                <label class="login-form__label">
                    "Password"
                    <input
                        class="login-form__input"
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <Show when=move || error.get().is_some()>
                    <p class="login-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <button class="btn btn--primary" type="submit" disabled=move || pending.get()>
                    "Sign in"
                </button>
            </form>
        </div>
    }
}
