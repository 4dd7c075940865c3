//! Product list state for the dashboard.
//!
//! DESIGN
//! ======
//! `items` is the last full collection from the backend; `visible` is always
//! derived from `items` and the current search term. Nothing patches `items`
//! locally: every mutation ends in a full reload (see `net::catalog`).

#[cfg(test)]
#[path = "products_test.rs"]
mod products_test;

use crate::net::api::ApiError;
use crate::net::types::Product;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductsState {
    items: Vec<Product>,
    visible: Vec<Product>,
    search: String,
    pub loading: bool,
}

impl ProductsState {
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    pub fn search_term(&self) -> &str {
        &self.search
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Replace the collection and recompute the displayed list.
    pub fn finish_load(&mut self, items: Vec<Product>) {
        self.items = items;
        self.visible = filter_by_name(&self.items, &self.search);
        self.loading = false;
    }

    /// End a load that failed; the previous list stays on screen.
    pub fn abort_load(&mut self) {
        self.loading = false;
    }

    /// Settle a load or mutate-then-reload result.
    ///
    /// # Errors
    ///
    /// Hands the failure back so the caller can resolve it; state is left
    /// as it was apart from the loading flag.
    pub fn apply(&mut self, result: Result<Vec<Product>, ApiError>) -> Result<(), ApiError> {
        match result {
            Ok(items) => {
                self.finish_load(items);
                Ok(())
            }
            Err(e) => {
                self.abort_load();
                Err(e)
            }
        }
    }

    /// Filter the in-memory list by name. Never triggers a fetch.
    pub fn search(&mut self, term: &str) {
        term.clone_into(&mut self.search);
        self.visible = filter_by_name(&self.items, &self.search);
    }
}

/// Case-insensitive substring match on product name. Empty term keeps all.
pub fn filter_by_name(items: &[Product], term: &str) -> Vec<Product> {
    let needle = term.to_lowercase();
    if needle.is_empty() {
        return items.to_vec();
    }
    items
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
