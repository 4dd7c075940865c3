//! Networking against the catalog backend.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` is the HTTP transport and its traits, `types` the wire schema,
//! `auth` the login/signup gateway, and `catalog` the product list
//! controller built on top of them.

pub mod api;
pub mod auth;
pub mod catalog;
pub mod types;
