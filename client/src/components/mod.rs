//! Reusable UI components shared by pages.

pub mod product_card;
pub mod product_form;
pub mod toasts;
