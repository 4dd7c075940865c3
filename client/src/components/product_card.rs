//! Product card for the dashboard grid.

use leptos::prelude::*;

use crate::net::types::{Product, format_price};

/// Placeholder served from the site assets when a product has no image.
pub const DEFAULT_PRODUCT_IMAGE: &str = "/default-product.svg";

/// One product tile. Admins additionally get edit/delete actions.
#[component]
pub fn ProductCard(
    product: Product,
    is_admin: bool,
    on_edit: Callback<Product>,
    on_delete: Callback<String>,
) -> impl IntoView {
    let image = product
        .image
        .clone()
        .filter(|url| !url.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PRODUCT_IMAGE.to_owned());
    let price = format_price(product.price);

    let actions = is_admin.then(|| {
        let id = product.id.clone();
        let edit_target = product.clone();
        view! {
            <div class="product-card__actions">
                <button class="btn btn--warning" on:click=move |_| on_edit.run(edit_target.clone())>
                    "Edit"
                </button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(id.clone())>
                    "Delete"
                </button>
            </div>
        }
    });

    view! {
        <div class="product-card">
            <img class="product-card__image" src=image alt=product.name.clone()/>
            <div class="product-card__body">
                <h5 class="product-card__title" title=product.name.clone()>
                    {product.name.clone()}
                </h5>
                <p class="product-card__text" title=product.description.clone()>
                    {product.description.clone()}
                </p>
                <p class="product-card__price">"Price: ₹" {price}</p>
                {actions}
            </div>
        </div>
    }
}
