//! Admin home: product management and the cart session report.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::api;
use crate::net::types::{Cart, Product, ProductDto};

/// Admin home — create, edit, search and delete products; report on carts
/// holding more than a chosen number of items and drill into any session's
/// cart.
#[component]
pub fn AdminHomePage() -> impl IntoView {
    let navigate = use_navigate();

    let query = RwSignal::new(String::new());
    let search_mode = RwSignal::new("name".to_owned());
    let products = RwSignal::new(Vec::<Product>::new());
    let editing = RwSignal::new(None::<Product>);
    let error = RwSignal::new(None::<String>);

    let reload = move || {
        let q = query.get_untracked().trim().to_owned();
        let mode = search_mode.get_untracked();
        leptos::task::spawn_local(async move {
            let result = if q.is_empty() {
                api::list_products(0, 50).await
            } else if mode == "description" {
                api::search_by_description(&q).await
            } else {
                api::search_by_name(&q).await
            };
            match result {
                Ok(list) => {
                    products.set(list);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    // Initial catalog load.
    Effect::new(move || reload());

    let delete = move |id: String| {
        leptos::task::spawn_local(async move {
            match api::delete_product(&id).await {
                Ok(()) => products.update(|list| list.retain(|p| p.id != id)),
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
        <div class="admin-page">
            <header class="admin-page__header">
                <h1>"Administration"</h1>
                <button class="btn" on:click=on_logout>"Log out"</button>
            </header>

            <Show when=move || error.get().is_some()>
                <p class="admin-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <section class="admin-page__products">
                <h2>"Products"</h2>
                <div class="admin-page__search">
                    <input
                        class="admin-page__search-input"
                        type="text"
                        placeholder="Search products"
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                        on:keydown=move |ev: leptos::ev::KeyboardEvent| {
                            if ev.key() == "Enter" {
                                ev.prevent_default();
                                reload();
                            }
                        }
                    />
                    <select
                        class="admin-page__search-mode"
                        prop:value=move || search_mode.get()
                        on:change=move |ev| search_mode.set(event_target_value(&ev))
                    >
                        <option value="name">"By name"</option>
                        <option value="description">"By description"</option>
                    </select>
                    <button class="btn" on:click=move |_| reload()>"Search"</button>
                </div>

                <table class="admin-page__table">
                    <thead>
                        <tr>
                            <th>"SKU"</th>
                            <th>"Name"</th>
                            <th>"Price"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            products
                                .get()
                                .into_iter()
                                .map(|p| {
                                    let id = p.id.clone();
                                    let edit_target = p.clone();
                                    view! {
                                        <tr>
                                            <td>{p.sku}</td>
                                            <td>{p.name}</td>
                                            <td>{format!("{:.2}", p.price)}</td>
                                            <td>
                                                <button
                                                    class="btn"
                                                    on:click=move |_| editing.set(Some(edit_target.clone()))
                                                >
                                                    "Edit"
                                                </button>
                                                <button
                                                    class="btn"
                                                    on:click=move |_| delete(id.clone())
                                                >
                                                    "Delete"
                                                </button>
                                            </td>
                                        </tr>
                                    }
                                })
                                .collect::<Vec<_>>()
                        }}
                    </tbody>
                </table>

                {move || {
                    editing
                        .get()
                        .map(|p| {
                            view! {
                                <ProductForm
                                    existing=p
                                    on_saved=Callback::new(move |()| {
                                        editing.set(None);
                                        reload();
                                    })
                                    error=error
                                />
                            }
                        })
                }}

                <ProductForm on_saved=Callback::new(move |()| reload()) error=error/>
            </section>

            <SessionReport/>
        </div>
    }
}

/// Inline product form. Creates a new product, or updates `existing` when
/// one is supplied (fields prefilled from it).
#[component]
fn ProductForm(
    #[prop(optional, into)] existing: Option<Product>,
    on_saved: Callback<()>,
    error: RwSignal<Option<String>>,
) -> impl IntoView {
    let product_id = existing.as_ref().map(|p| p.id.clone());
    let is_edit = product_id.is_some();
    let heading = if is_edit { "Edit product" } else { "New product" };
    let initial = existing.as_ref().map(ProductDto::from).unwrap_or_default();

    let sku = RwSignal::new(initial.sku);
    let name = RwSignal::new(initial.name);
    let description = RwSignal::new(initial.description);
    let price = RwSignal::new(if is_edit {
        format!("{:.2}", initial.price)
    } else {
        String::new()
    });

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Ok(parsed_price) = price.get_untracked().trim().parse::<f64>() else {
            error.set(Some("price must be a number".to_owned()));
            return;
        };
        let dto = ProductDto {
            sku: sku.get_untracked().trim().to_owned(),
            name: name.get_untracked().trim().to_owned(),
            description: description.get_untracked().trim().to_owned(),
            price: parsed_price,
        };
        if dto.sku.is_empty() || dto.name.is_empty() {
            error.set(Some("sku and name are required".to_owned()));
            return;
        }

        let product_id = product_id.clone();
        leptos::task::spawn_local(async move {
            let result = match product_id {
                Some(id) => api::update_product(&id, &dto).await,
                None => api::create_product(&dto).await,
            };
            match result {
                Ok(_) => {
                    if !is_edit {
                        sku.set(String::new());
                        name.set(String::new());
                        description.set(String::new());
                        price.set(String::new());
                    }
                    error.set(None);
                    on_saved.run(());
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <form class="product-form" on:submit=submit>
            <h3>{heading}</h3>
            <input
                type="text"
                placeholder="SKU"
                prop:value=move || sku.get()
                on:input=move |ev| sku.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Name"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Description"
                prop:value=move || description.get()
                on:input=move |ev| description.set(event_target_value(&ev))
            />
            <input
                type="text"
                placeholder="Price"
                prop:value=move || price.get()
                on:input=move |ev| price.set(event_target_value(&ev))
            />
            <button class="btn btn--primary" type="submit">
                {if is_edit { "Save" } else { "Create" }}
            </button>
        </form>
    }
}

/// Report of carts holding more than a chosen number of items, with a
/// drill-down into any listed session's cart.
#[component]
fn SessionReport() -> impl IntoView {
    let threshold = RwSignal::new("10".to_owned());
    let carts = RwSignal::new(Vec::<Cart>::new());
    let selected = RwSignal::new(None::<Cart>);
    let error = RwSignal::new(None::<String>);

    let load = move |_| {
        let parsed = threshold.get_untracked().trim().parse::<u32>().unwrap_or(10);
        leptos::task::spawn_local(async move {
            match api::sessions_over_threshold(parsed).await {
                Ok(report) => {
                    carts.set(report);
                    selected.set(None);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    let inspect = move |session_id: String| {
        leptos::task::spawn_local(async move {
            match api::admin_cart_for_session(&session_id).await {
                Ok(cart) => {
                    selected.set(cart);
                    error.set(None);
                }
                Err(e) => error.set(Some(e.to_string())),
            }
        });
    };

    view! {
        <section class="admin-page__report">
            <h2>"Large carts"</h2>
            <div class="admin-page__report-controls">
                <label>
                    "More than "
                    <input
                        type="text"
                        prop:value=move || threshold.get()
                        on:input=move |ev| threshold.set(event_target_value(&ev))
                    />
                    " items"
                </label>
                <button class="btn" on:click=load>"Run report"</button>
            </div>

            <Show when=move || error.get().is_some()>
                <p class="admin-page__error">{move || error.get().unwrap_or_default()}</p>
            </Show>

            <ul class="report-list">
                {move || {
                    carts
                        .get()
                        .into_iter()
                        .map(|cart| {
                            let count: u32 = cart.items.iter().map(|i| i.amount).sum();
                            let session_id = cart.session_id.clone();
                            view! {
                                <li class="report-list__item">
                                    <span class="report-list__session">{cart.session_id}</span>
                                    <span class="report-list__count">
                                        {format!("{count} items")}
                                    </span>
                                    <button
                                        class="btn"
                                        on:click=move |_| inspect(session_id.clone())
                                    >
                                        "Inspect"
                                    </button>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>

            {move || {
                selected
                    .get()
                    .map(|cart| {
                        view! {
                            <div class="report-detail">
                                <h3>{format!("Session {}", cart.session_id)}</h3>
                                <ul class="report-detail__items">
                                    {cart
                                        .items
                                        .into_iter()
                                        .map(|item| {
                                            view! {
                                                <li>
                                                    <span>{item.name}</span>
                                                    <span>{format!("x{}", item.amount)}</span>
                                                    <span>{format!("{:.2}", item.total_price)}</span>
                                                </li>
                                            }
                                        })
                                        .collect::<Vec<_>>()}
                                </ul>
                            </div>
                        }
                    })
            }}
        </section>
    }
}
