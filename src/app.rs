//! Root application component: routing, shared contexts and the guard hook.
//!
//! The router owns the single guard hook: every protected route is wrapped
//! in [`Guarded`], which runs one guard evaluation per navigation attempt
//! and applies the decision. The guard logic itself lives in `crate::guard`
//! and holds no state; the navigation epoch that discards stale evaluations
//! lives here, with the hook registration.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Redirect, Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::guard;
use crate::pages::{admin_home::AdminHomePage, login::LoginPage, user_home::UserHomePage};
use crate::routes;
use crate::state::auth::AuthState;

/// Monotonic navigation counter. A guard evaluation that finishes after a
/// newer navigation has started finds the epoch advanced and discards its
/// decision instead of applying an outdated one.
#[derive(Clone, Copy)]
struct NavEpoch(RwSignal<u64>);

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared auth context and sets up client-side routing with
/// the navigation guard wired in front of every protected route.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    provide_context(NavEpoch(RwSignal::new(0)));

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Storefront"/>

        <Router>
            <Routes fallback=|| view! { <Redirect path="/login"/> }>
                <Route path=StaticSegment("") view=|| view! { <Redirect path="/login"/> }/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route
                    path=StaticSegment("user")
                    view=|| {
                        view! {
                            <Guarded meta=routes::USER_HOME>
                                <UserHomePage/>
                            </Guarded>
                        }
                    }
                />
                <Route
                    path=StaticSegment("admin")
                    view=|| {
                        view! {
                            <Guarded meta=routes::ADMIN_HOME>
                                <AdminHomePage/>
                            </Guarded>
                        }
                    }
                />
            </Routes>
        </Router>
    }
}

/// Wraps a protected page: runs the navigation guard for `meta` before the
/// children render, redirecting when the decision says so.
///
/// Each mount or location change is one navigation attempt. The identity
/// endpoint is consulted fresh every time; nothing is cached between
/// attempts.
#[component]
fn Guarded(meta: routes::RouteMeta, children: ChildrenFn) -> impl IntoView {
    let navigate = use_navigate();
    let location = use_location();
    let epoch = expect_context::<NavEpoch>().0;
    let allowed = RwSignal::new(false);

    Effect::new(move || {
        // Tracked reads: a same-route navigation that changes only the
        // query string counts as a transition and re-runs the guard.
        let path = location.pathname.get();
        let search = location.search.get();
        let attempted = guard::attempted_path(&path, &search);

        // Claim a fresh epoch; any evaluation still in flight is now stale.
        let my_epoch = epoch.get_untracked() + 1;
        epoch.set(my_epoch);
        allowed.set(false);

        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let decision = guard::check(&meta, &attempted).await;
            if epoch.get_untracked() != my_epoch {
                // A newer navigation superseded this attempt.
                return;
            }
            match decision.href() {
                None => allowed.set(true),
                Some(href) => navigate(&href, NavigateOptions::default()),
            }
        });
    });

    view! {
        <Show
            when=move || allowed.get()
            fallback=|| view! { <p class="guard-pending">"Checking access..."</p> }
        >
            {children()}
        </Show>
    }
}
