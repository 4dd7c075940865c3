//! Role-based route guard.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route renders through `Guarded`, which re-evaluates
//! `evaluate` on each render against the reactive session. The decision is
//! never cached. The guard is a UX gate only; the backend still authorizes
//! every request.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::net::types::Role;
use crate::state::session::{Session, SessionContext};

pub const LOGIN_PATH: &str = "/login";
pub const UNAUTHORIZED_PATH: &str = "/unauthorized";
pub const DASHBOARD_PATH: &str = "/dashboard";

/// Routes known to the app router.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AppRoute {
    Login,
    Dashboard,
    Admin,
    User,
    Unauthorized,
}

impl AppRoute {
    pub const ALL: [Self; 5] = [Self::Login, Self::Dashboard, Self::Admin, Self::User, Self::Unauthorized];

    pub fn path(self) -> &'static str {
        match self {
            Self::Login => LOGIN_PATH,
            Self::Dashboard => DASHBOARD_PATH,
            Self::Admin => "/admin",
            Self::User => "/user",
            Self::Unauthorized => UNAUTHORIZED_PATH,
        }
    }

    /// Roles allowed through; `None` marks a public route.
    pub fn allowed_roles(self) -> Option<&'static [Role]> {
        match self {
            Self::Login | Self::Unauthorized => None,
            Self::Dashboard => Some(&[Role::Admin, Role::User]),
            Self::Admin => Some(&[Role::Admin]),
            Self::User => Some(&[Role::User]),
        }
    }
}

/// Outcome of a guard check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    RedirectLogin,
    RedirectUnauthorized,
}

impl Access {
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectLogin => Some(LOGIN_PATH),
            Self::RedirectUnauthorized => Some(UNAUTHORIZED_PATH),
        }
    }
}

/// No session beats everything; then the role must be in `allowed`.
pub fn evaluate(session: Option<&Session>, allowed: &[Role]) -> Access {
    match session {
        None => Access::RedirectLogin,
        Some(s) if allowed.contains(&s.role()) => Access::Allow,
        Some(_) => Access::RedirectUnauthorized,
    }
}

/// Evaluate a route; public routes always allow.
pub fn evaluate_route(session: Option<&Session>, route: AppRoute) -> Access {
    match route.allowed_roles() {
        None => Access::Allow,
        Some(allowed) => evaluate(session, allowed),
    }
}

/// Render `children` only when the session passes `route`'s role check.
#[component]
pub fn Guarded(route: AppRoute, children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<SessionContext>();
    move || {
        if !session.is_ready() {
            return view! { <p class="guard__pending">"Loading..."</p> }.into_any();
        }
        match evaluate_route(session.current().as_ref(), route).redirect_path() {
            None => children().into_any(),
            Some(path) => view! { <Redirect path=path/> }.into_any(),
        }
    }
}
