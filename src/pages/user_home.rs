//! Authenticated home: the product catalog and this session's cart.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::Cart;

/// User home — browse products, add them to the cart, manage the cart.
#[component]
pub fn UserHomePage() -> impl IntoView {
    let navigate = use_navigate();

    let products = LocalResource::new(|| async {
        api::list_products(0, 50).await.unwrap_or_default()
    });
    let cart = RwSignal::new(None::<Cart>);
    let error = RwSignal::new(None::<String>);

    // Initial cart load. A missing cart is an empty one, not an error.
    Effect::new(move || {
        leptos::task::spawn_local(async move {
            if let Ok(fetched) = api::get_cart().await {
                cart.set(fetched);
            }
        });
    });

    let add = move |product_id: String| {
        leptos::task::spawn_local(async move {
            match api::add_to_cart(&product_id, 1).await {
                Ok(updated) => {
                    cart.set(updated);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let remove = move |product_id: String| {
        leptos::task::spawn_local(async move {
            match api::remove_from_cart(&product_id).await {
                Ok(updated) => {
                    cart.set(updated);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let restore = move |_| {
        leptos::task::spawn_local(async move {
            match api::restore_cart().await {
                Ok(updated) => {
                    cart.set(updated);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let on_logout = move |_| {
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            api::logout().await;
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <div class="user-page">
            <header class="user-page__header">
                <h1>"Catalog"</h1>
                <button class="btn" on:click=on_logout>"Log out"</button>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="user-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <section class="user-page__products">
                <Suspense fallback=move || view! { <p>"Loading products..."</p> }>
                    {move || {
                        products
                            .get()
                            .map(|list| {
                                view! {
                                    <ul class="product-list">
                                        {list
                                            .into_iter()
                                            .map(|p| {
                                                let id = p.id.clone();
                                                view! {
                                                    <li class="product-list__item">
                                                        <span class="product-list__name">{p.name}</span>
                                                        <span class="product-list__price">
                                                            {format!("{:.2}", p.price)}
                                                        </span>
                                                        <button
                                                            class="btn btn--primary"
                                                            on:click=move |_| add(id.clone())
                                                        >
                                                            "Add to cart"
                                                        </button>
                                                    </li>
                                                }
                                            })
                                            .collect::<Vec<_>>()}
                                    </ul>
                                }
                            })
                    }}
                </Suspense>
            </section>

            <section class="user-page__cart">
                <header class="user-page__cart-header">
                    <h2>"Your cart"</h2>
                    <button class="btn" on:click=restore>"Restore last cart"</button>
                </header>
                {move || {
                    let items = cart.get().map(|c| c.items).unwrap_or_default();
                    if items.is_empty() {
                        view! { <p class="cart-empty">"Cart is empty."</p> }.into_any()
                    } else {
                        view! {
                            <ul class="cart-list">
                                {items
                                    .into_iter()
                                    .map(|item| {
                                        let id = item.product_id.clone();
                                        view! {
                                            <li class="cart-list__item">
                                                <span class="cart-list__name">{item.name}</span>
                                                <span class="cart-list__amount">
                                                    {format!("x{}", item.amount)}
                                                </span>
                                                <span class="cart-list__total">
                                                    {format!("{:.2}", item.total_price)}
                                                </span>
                                                <button
                                                    class="btn"
                                                    on:click=move |_| remove(id.clone())
                                                >
                                                    "Remove"
                                                </button>
                                            </li>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </ul>
                        }
                            .into_any()
                    }
                }}
            </section>
        </div>
    }
}
