//! Toast stack for transient success/error notices.

use leptos::prelude::*;

use crate::state::notices::{NoticeKind, Notices};

/// Queue a notice and, in the browser, schedule its dismissal.
pub fn notify(notices: RwSignal<Notices>, kind: NoticeKind, text: impl Into<String>) {
    let text = text.into();
    let mut id = 0;
    notices.update(|n| id = n.push(kind, text));

    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::notices::NOTICE_TTL_MS)).await;
        notices.update(|n| n.dismiss(id));
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = id;
}

fn toast_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "toast toast--success",
        NoticeKind::Error => "toast toast--error",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let notices = expect_context::<RwSignal<Notices>>();

    view! {
        <div class="toasts" aria-live="polite">
            {move || {
                notices
                    .get()
                    .items
                    .into_iter()
                    .map(|notice| {
                        let id = notice.id;
                        view! {
                            <div
                                class=toast_class(notice.kind)
                                role="status"
                                on:click=move |_| notices.update(|n| n.dismiss(id))
                            >
                                {notice.text}
                            </div>
                        }
                    })
                    .collect::<Vec<_>>()
            }}
        </div>
    }
}
