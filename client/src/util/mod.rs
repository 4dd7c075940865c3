//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route guarding and input validation are kept out of pages so they can be
//! tested without a browser.

pub mod guard;
pub mod validate;
