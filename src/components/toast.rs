//! Transient notifications.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_icons::Icon;
use wasm_bindgen_futures::spawn_local;

use crate::components::icons as ic;
use crate::config::TOAST_DURATION_MS;
use crate::models::{ToastKind, ToastQueue};

stylance::import_crate_style!(css, "src/components/toast.module.css");

/// Show a toast and schedule its dismissal.
pub fn notify(toasts: RwSignal<ToastQueue>, kind: ToastKind, message: impl Into<String>) {
    let message = message.into();
    let Some(id) = toasts.try_update(|q| q.push(kind, message)) else {
        return;
    };
    spawn_local(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        toasts.try_update(|q| q.dismiss(id));
    });
}

/// Stack of visible toasts, bottom-right.
#[component]
pub fn Toaster(toasts: RwSignal<ToastQueue>) -> impl IntoView {
    view! {
        <div class=css::stack aria-live="polite">
            <Show when=move || !toasts.with(ToastQueue::is_empty)>
                <For
                    each=move || toasts.with(|q| q.items().to_vec())
                    key=|toast| toast.id
                    children=move |toast| {
                        let (class, icon) = match toast.kind {
                            ToastKind::Success => (format!("{} {}", css::toast, css::success), ic::SUCCESS),
                            ToastKind::Error => (format!("{} {}", css::toast, css::error), ic::ERROR),
                        };
                        let id = toast.id;
                        view! {
                            <div
                                class=class
                                role="status"
                                on:click=move |_| {
                                    toasts.try_update(|q| q.dismiss(id));
                                }
                            >
                                <span class=css::icon><Icon icon=icon /></span>
                                <span>{toast.message}</span>
                            </div>
                        }
                    }
                />
            </Show>
        </div>
    }
}
