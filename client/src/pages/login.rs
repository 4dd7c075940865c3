//! Login / signup page.
//!
//! SYSTEM CONTEXT
//! ==============
//! On mount, a stored token is checked with the backend and a still-valid
//! session skips straight to the dashboard. Otherwise the form drives the
//! auth gateway; local validation failures never reach the network.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::api::HttpApi;
use crate::state::login::LoginForm;
use crate::state::session::SessionContext;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<SessionContext>();
    let api = expect_context::<HttpApi>();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());

    #[cfg(feature = "hydrate")]
    {
        let session = session.clone();
        let api = api.clone();
        let navigate = navigate.clone();
        Effect::new(move || {
            let session = session.clone();
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let gateway = crate::net::auth::AuthGateway::new(&api, session.store());
                let valid = gateway.validate_existing_token().await;
                session.sync();
                if valid {
                    navigate(crate::util::guard::DASHBOARD_PATH, leptos_router::NavigateOptions::default());
                }
            });
        });
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let current = form.get_untracked();
        if current.busy {
            return;
        }
        form.update(|f| {
            f.busy = true;
            f.message = None;
        });

        #[cfg(feature = "hydrate")]
        {
            use crate::state::login::{LOGIN_SUCCESS, LoginMode};

            let session = session.clone();
            let api = api.clone();
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                let gateway = crate::net::auth::AuthGateway::new(&api, session.store());
                match current.mode {
                    LoginMode::Login => match gateway.login(&current.login_request()).await {
                        Ok(_) => {
                            session.sync();
                            form.update(|f| {
                                f.busy = false;
                                f.message = Some(LOGIN_SUCCESS.to_owned());
                            });
                            navigate(crate::util::guard::DASHBOARD_PATH, leptos_router::NavigateOptions::default());
                        }
                        Err(message) => form.update(|f| {
                            f.busy = false;
                            f.message = Some(message);
                        }),
                    },
                    LoginMode::Signup => match gateway.signup(&current.signup_request()).await {
                        Ok(()) => form.update(LoginForm::signup_succeeded),
                        Err(message) => form.update(|f| {
                            f.busy = false;
                            f.message = Some(message);
                        }),
                    },
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = (&session, &api, &navigate, current);
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h4 class="login-card__title">{move || form.get().heading()}</h4>
                <Show when=move || form.get().message.is_some()>
                    <div class="login-message">{move || form.get().message.unwrap_or_default()}</div>
                </Show>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || form.get().is_signup()>
                        <label class="login-label" for="name">"Name"</label>
                        <input
                            id="name"
                            class="login-input"
                            type="text"
                            prop:value=move || form.get().name
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </Show>
                    <label class="login-label" for="email">"Email"</label>
                    <input
                        id="email"
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || form.get().email
                        on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                    />
                    <label class="login-label" for="password">"Password"</label>
                    <input
                        id="password"
                        class="login-input"
                        type="password"
                        prop:value=move || form.get().password
                        on:input=move |ev| form.update(|f| f.password = event_target_value(&ev))
                    />
                    <Show when=move || form.get().is_signup()>
                        <label class="login-label" for="contactNumber">"Contact Number"</label>
                        <input
                            id="contactNumber"
                            class="login-input"
                            type="text"
                            inputmode="numeric"
                            prop:value=move || form.get().contact_number
                            on:input=move |ev| form.update(|f| f.contact_number = event_target_value(&ev))
                        />
                    </Show>
                    <button class="login-button" type="submit" disabled=move || form.get().busy>
                        {move || form.get().submit_label()}
                    </button>
                </form>
                <Show when=move || form.get().busy>
                    <div class="spinner" role="status">
                        <span class="visually-hidden">"Loading..."</span>
                    </div>
                </Show>
                <p class="login-card__switch">
                    {move || form.get().switch_prompt()}
                    <button class="btn btn--link" type="button" on:click=move |_| form.update(LoginForm::toggle_mode)>
                        {move || form.get().switch_label()}
                    </button>
                </p>
            </div>
        </div>
    }
}
