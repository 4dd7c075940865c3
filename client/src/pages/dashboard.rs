//! Dashboard page: product grid, search, and the admin product form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered behind `Guarded`, so a session exists on entry. All catalog
//! traffic goes through `dispatch`, which runs one `CatalogOp` and hands the
//! result to `net::catalog::settle`. A rejected session is resynced here so
//! the guard redirects to login.

use leptos::prelude::*;

use crate::components::product_card::ProductCard;
use crate::components::product_form::ProductFormPanel;
use crate::components::toasts::notify;
use crate::net::api::HttpApi;
use crate::net::catalog::CatalogOp;
use crate::net::types::Product;
use crate::state::notices::{NoticeKind, Notices};
use crate::state::product_form::{ProductForm, Submission};
use crate::state::products::ProductsState;
use crate::state::session::SessionContext;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let api = expect_context::<HttpApi>();
    let notices = expect_context::<RwSignal<Notices>>();
    let products = RwSignal::new(ProductsState::default());
    let form = RwSignal::new(ProductForm::default());

    let is_admin = {
        let session = session.clone();
        Memo::new(move |_| session.current().is_some_and(|s| s.is_admin()))
    };
    let user_name = {
        let session = session.clone();
        Memo::new(move |_| session.current().map_or_else(|| "User".to_owned(), |s| s.user.name))
    };

    let dispatch = {
        let session = session.clone();
        move |op: CatalogOp| {
            let Some(token) = session.store().token() else {
                session.sync();
                return;
            };
            products.update(ProductsState::begin_load);

            #[cfg(feature = "hydrate")]
            {
                use crate::net::catalog::{Catalog, Settled, settle};

                let session = session.clone();
                let api = api.clone();
                leptos::task::spawn_local(async move {
                    let result = Catalog::new(&api, &token).run(&op).await;
                    let mut settled = Settled::default();
                    products.update(|p| form.update(|f| settled = settle(&op, result, p, f, session.store())));
                    if let Some((kind, text)) = settled.notice {
                        notify(notices, kind, text);
                    }
                    if settled.signed_out {
                        session.sync();
                    }
                });
            }
            #[cfg(not(feature = "hydrate"))]
            let _ = (&api, op, token);
        }
    };

    let initial = dispatch.clone();
    Effect::new(move || initial(CatalogOp::Reload));

    let on_submit = {
        let dispatch = dispatch.clone();
        Callback::new(move |submission: Submission| dispatch(submission.into()))
    };
    let on_edit = Callback::new(move |product: Product| form.update(|f| f.begin_edit(&product)));
    let on_delete = Callback::new(move |id: String| dispatch(CatalogOp::Delete { id }));

    let on_logout = move |_| {
        session.clear();
        notify(notices, NoticeKind::Success, "Logged out successfully!");
    };

    view! {
        <div class="dashboard-page">
            <header class="dashboard-page__header">
                <h2>"Welcome, " {move || user_name.get()} "!"</h2>
                <button class="btn btn--danger" on:click=on_logout>
                    "Logout"
                </button>
            </header>
            <Show
                when=move || !products.get().loading
                fallback=|| {
                    view! {
                        <div class="spinner" role="status">
                            <span class="visually-hidden">"Loading..."</span>
                        </div>
                    }
                }
            >
                <Show when=move || is_admin.get()>
                    <ProductFormPanel form=form on_submit=on_submit/>
                </Show>
                <h4>"Products"</h4>
                <input
                    class="dashboard-page__search"
                    type="text"
                    placeholder="Search products by name..."
                    prop:value=move || products.get().search_term().to_owned()
                    on:input=move |ev| products.update(|p| p.search(&event_target_value(&ev)))
                />
                {move || {
                    let visible = products.get().visible().to_vec();
                    if visible.is_empty() {
                        view! {
                            <div class="dashboard-page__empty">
                                <h5>"No Products Found"</h5>
                            </div>
                        }
                            .into_any()
                    } else {
                        let admin = is_admin.get();
                        view! {
                            <div class="product-grid">
                                {visible
                                    .into_iter()
                                    .map(|product| {
                                        view! {
                                            <ProductCard
                                                product=product
                                                is_admin=admin
                                                on_edit=on_edit
                                                on_delete=on_delete
                                            />
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                            .into_any()
                    }
                }}
            </Show>
        </div>
    }
}
