//! Landing page for signed-in users who lack the role a route requires.

use leptos::prelude::*;

use crate::state::session::SessionContext;
use crate::util::guard::DASHBOARD_PATH;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let role = {
        let session = session.clone();
        move || session.current().map(|s| s.role().label())
    };
    let on_logout = move |_| session.clear();

    view! {
        <div class="unauthorized-page">
            <h2>"Unauthorized"</h2>
            <p>
                "You do not have access to this page"
                {move || role().map(|r| format!(" as {r}")).unwrap_or_default()}
                "."
            </p>
            <a href=DASHBOARD_PATH class="btn btn--primary">
                "Back to dashboard"
            </a>
            <button class="btn btn--secondary" on:click=on_logout>
                "Log out"
            </button>
        </div>
    }
}
