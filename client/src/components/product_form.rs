//! Admin add/edit product form.
//!
//! Renders whatever mode `ProductForm` is in; the page owns submission and
//! decides when to reset.

use leptos::prelude::*;

use crate::state::product_form::{ProductForm, Submission};

#[component]
pub fn ProductFormPanel(form: RwSignal<ProductForm>, on_submit: Callback<Submission>) -> impl IntoView {
    let error = RwSignal::new(None::<&'static str>);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match form.get_untracked().submission() {
            Ok(submission) => {
                error.set(None);
                on_submit.run(submission);
            }
            Err(message) => error.set(Some(message)),
        }
    };

    let cancel = move |_: leptos::ev::MouseEvent| {
        error.set(None);
        form.update(ProductForm::cancel);
    };

    view! {
        <section class="product-form">
            <h4 class="product-form__title">{move || form.get().title()}</h4>
            <form class="product-form__body" on:submit=submit>
                <label class="product-form__label" for="product-name">"Name"</label>
                <input
                    id="product-name"
                    class="product-form__input"
                    type="text"
                    placeholder="Enter product name"
                    prop:value=move || form.get().name
                    on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                />
                <label class="product-form__label" for="product-description">"Description"</label>
                <textarea
                    id="product-description"
                    class="product-form__input"
                    rows="4"
                    placeholder="Enter product description"
                    prop:value=move || form.get().description
                    on:input=move |ev| form.update(|f| f.description = event_target_value(&ev))
                ></textarea>
                <label class="product-form__label" for="product-price">"Price"</label>
                <input
                    id="product-price"
                    class="product-form__input"
                    type="number"
                    step="any"
                    min="0"
                    placeholder="Enter product price"
                    prop:value=move || form.get().price
                    on:input=move |ev| form.update(|f| f.price = event_target_value(&ev))
                />
                <Show when=move || error.get().is_some()>
                    <p class="product-form__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <div class="product-form__actions">
                    <button type="submit" class="btn btn--primary">
                        {move || form.get().submit_label()}
                    </button>
                    <Show when=move || form.get().is_editing()>
                        <button type="button" class="btn btn--secondary" on:click=cancel>
                            "Cancel"
                        </button>
                    </Show>
                </div>
            </form>
        </section>
    }
}
