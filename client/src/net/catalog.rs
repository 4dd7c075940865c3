//! Product list controller: fetch, mutate-then-reload, failure resolution.
//!
//! SYSTEM CONTEXT
//! ==============
//! The dashboard calls these with the current session token and feeds the
//! resulting collection into `ProductsState::apply`. Mutations never patch
//! the local list: each one is a single request followed by a full reload
//! through `mutate_then_reload`. A failed reload after a successful mutation
//! is reported as a failure.
//!
//! `settle` is the single place a finished operation touches page state:
//! list, form, session, and the notice to show.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use super::api::{ApiError, CatalogApi};
use super::types::{Product, ProductInput};
use crate::state::notices::NoticeKind;
use crate::state::product_form::{ProductForm, Submission};
use crate::state::products::ProductsState;
use crate::state::session::SessionStore;

pub const SESSION_EXPIRED: &str = "Session expired or unauthorized. Please log in again.";
pub const TRANSIENT_FAILURE: &str = "An error occurred. Please try again.";

/// A single mutating request against the catalog.
#[derive(Clone, Copy, Debug)]
pub enum Mutation<'a> {
    Add(&'a ProductInput),
    Update { id: &'a str, input: &'a ProductInput },
    Delete { id: &'a str },
}

impl Mutation<'_> {
    fn label(&self) -> &'static str {
        match self {
            Self::Add(_) => "add",
            Self::Update { .. } => "update",
            Self::Delete { .. } => "delete",
        }
    }
}

/// An owned catalog request queued from a UI event.
#[derive(Clone, Debug, PartialEq)]
pub enum CatalogOp {
    Reload,
    Add(ProductInput),
    Update { id: String, input: ProductInput },
    Delete { id: String },
}

impl CatalogOp {
    fn success_message(&self) -> Option<&'static str> {
        match self {
            Self::Reload => None,
            Self::Add(_) => Some("Product added successfully"),
            Self::Update { .. } => Some("Product updated successfully"),
            Self::Delete { .. } => Some("Product deleted successfully"),
        }
    }

    fn resets_form(&self) -> bool {
        matches!(self, Self::Add(_) | Self::Update { .. })
    }
}

impl From<Submission> for CatalogOp {
    fn from(submission: Submission) -> Self {
        match submission {
            Submission::Create(input) => Self::Add(input),
            Submission::Update { id, input } => Self::Update { id, input },
        }
    }
}

pub struct Catalog<'a, A: CatalogApi + ?Sized> {
    api: &'a A,
    token: &'a str,
}

impl<'a, A: CatalogApi + ?Sized> Catalog<'a, A> {
    pub fn new(api: &'a A, token: &'a str) -> Self {
        Self { api, token }
    }

    /// Fetch the full collection.
    ///
    /// # Errors
    ///
    /// Propagates the backend failure unchanged.
    pub async fn fetch_all(&self) -> Result<Vec<Product>, ApiError> {
        let items = self.api.list_products(self.token).await?;
        leptos::logging::log!("catalog loaded: {} products", items.len());
        Ok(items)
    }

    /// # Errors
    ///
    /// Fails if either the add or the reload fails.
    pub async fn add(&self, input: &ProductInput) -> Result<Vec<Product>, ApiError> {
        self.mutate_then_reload(Mutation::Add(input)).await
    }

    /// # Errors
    ///
    /// Fails if either the update or the reload fails.
    pub async fn update(&self, id: &str, input: &ProductInput) -> Result<Vec<Product>, ApiError> {
        self.mutate_then_reload(Mutation::Update { id, input }).await
    }

    /// # Errors
    ///
    /// Fails if either the delete or the reload fails.
    pub async fn delete(&self, id: &str) -> Result<Vec<Product>, ApiError> {
        self.mutate_then_reload(Mutation::Delete { id }).await
    }

    /// Run a queued operation.
    ///
    /// # Errors
    ///
    /// Same as the operation's own method.
    pub async fn run(&self, op: &CatalogOp) -> Result<Vec<Product>, ApiError> {
        match op {
            CatalogOp::Reload => self.fetch_all().await,
            CatalogOp::Add(input) => self.add(input).await,
            CatalogOp::Update { id, input } => self.update(id, input).await,
            CatalogOp::Delete { id } => self.delete(id).await,
        }
    }

    /// Run one mutation, then invalidate the local copy by reloading it.
    ///
    /// # Errors
    ///
    /// A failed mutation skips the reload. A failed reload is returned even
    /// though the mutation itself went through.
    pub async fn mutate_then_reload(&self, mutation: Mutation<'_>) -> Result<Vec<Product>, ApiError> {
        let outcome = match mutation {
            Mutation::Add(input) => self.api.add_product(self.token, input).await,
            Mutation::Update { id, input } => self.api.edit_product(self.token, id, input).await,
            Mutation::Delete { id } => self.api.delete_product(self.token, id).await,
        };
        if let Err(e) = outcome {
            leptos::logging::warn!("catalog {} failed: {e}", mutation.label());
            return Err(e);
        }
        self.fetch_all().await
    }
}

/// What the UI should do after a failed catalog call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FailureReaction {
    /// The session was torn down; go back to the login page.
    SignedOut,
    /// Show a generic notice and keep the current state.
    Transient,
}

impl FailureReaction {
    pub fn message(self) -> &'static str {
        match self {
            Self::SignedOut => SESSION_EXPIRED,
            Self::Transient => TRANSIENT_FAILURE,
        }
    }
}

/// Shared failure handler for every authenticated call. 401/400 clear the
/// session store; anything else is transient.
pub fn resolve_failure(err: &ApiError, store: &SessionStore) -> FailureReaction {
    if err.is_session_invalid() {
        leptos::logging::warn!("session rejected by backend: {err}");
        store.clear();
        FailureReaction::SignedOut
    } else {
        leptos::logging::warn!("catalog request failed: {err}");
        FailureReaction::Transient
    }
}

/// What the page still has to do once an operation is settled.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Settled {
    pub notice: Option<(NoticeKind, &'static str)>,
    /// The session was cleared; the reactive session must be resynced so
    /// the route guard sends the user to login.
    pub signed_out: bool,
}

/// Apply a finished operation to page state.
///
/// Success replaces the list, resets the form after add/update, and yields
/// the operation's success notice. Failure keeps list and form as they were
/// and goes through [`resolve_failure`].
pub fn settle(
    op: &CatalogOp,
    result: Result<Vec<Product>, ApiError>,
    products: &mut ProductsState,
    form: &mut ProductForm,
    store: &SessionStore,
) -> Settled {
    match products.apply(result) {
        Ok(()) => {
            if op.resets_form() {
                form.reset();
            }
            Settled { notice: op.success_message().map(|m| (NoticeKind::Success, m)), signed_out: false }
        }
        Err(e) => {
            let reaction = resolve_failure(&e, store);
            Settled {
                notice: Some((NoticeKind::Error, reaction.message())),
                signed_out: reaction == FailureReaction::SignedOut,
            }
        }
    }
}
