//! Client-side application state.
//!
//! DESIGN
//! ======
//! Plain structs with pure transitions; pages wrap them in `RwSignal`s and
//! provide shared ones through context. Keeping them free of reactive types
//! lets the transitions be tested natively.

pub mod login;
pub mod notices;
pub mod product_form;
pub mod products;
pub mod session;
