//! Add/edit product form state machine.
//!
//! `Create` holds an empty draft; `Edit` holds a draft seeded from an
//! existing product plus its identity. A successful submit or an explicit
//! cancel returns to an empty `Create`.

#[cfg(test)]
#[path = "product_form_test.rs"]
mod product_form_test;

use crate::net::types::{Product, ProductInput, format_price};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum FormMode {
    #[default]
    Create,
    Edit {
        id: String,
    },
}

/// Validated form contents ready to send.
#[derive(Clone, Debug, PartialEq)]
pub enum Submission {
    Create(ProductInput),
    Update { id: String, input: ProductInput },
}

/// Draft product. Price stays text until submit so partial input
/// ("12.") survives re-rendering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductForm {
    pub mode: FormMode,
    pub name: String,
    pub description: String,
    pub price: String,
}

impl ProductForm {
    pub fn is_editing(&self) -> bool {
        matches!(self.mode, FormMode::Edit { .. })
    }

    pub fn title(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Product",
            FormMode::Edit { .. } => "Edit Product",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        match self.mode {
            FormMode::Create => "Add Product",
            FormMode::Edit { .. } => "Update Product",
        }
    }

    /// Switch to edit mode seeded from `product`, discarding any draft.
    pub fn begin_edit(&mut self, product: &Product) {
        *self = Self {
            mode: FormMode::Edit { id: product.id.clone() },
            name: product.name.clone(),
            description: product.description.clone(),
            price: format_price(product.price),
        };
    }

    pub fn cancel(&mut self) {
        self.reset();
    }

    /// Back to an empty create draft.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Validate the draft into a request for the current mode.
    ///
    /// # Errors
    ///
    /// Returns the inline message for the first invalid field.
    pub fn submission(&self) -> Result<Submission, &'static str> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name is required.");
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err("Description is required.");
        }
        let price = parse_price(&self.price)?;
        let input = ProductInput { name: name.to_owned(), description: description.to_owned(), price };
        Ok(match &self.mode {
            FormMode::Create => Submission::Create(input),
            FormMode::Edit { id } => Submission::Update { id: id.clone(), input },
        })
    }
}

fn parse_price(raw: &str) -> Result<f64, &'static str> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err("Price is required.");
    }
    match raw.parse::<f64>() {
        Ok(price) if price.is_finite() && price >= 0.0 => Ok(price),
        _ => Err("Price must be a non-negative number."),
    }
}
