use gloo_timers::future::TimeoutFuture;
use leptos::{component, spawn_local, view, IntoView, ReadSignal, SignalGet, SignalUpdate, WriteSignal};

const TOAST_DURATION_MS: u32 = 2500;

#[derive(Clone, Debug, PartialEq, Default)]
pub struct Toast {
    pub message: String,
    pub visible: bool,
    /// Bumped on every new message so a stale timer does not hide a newer toast
    pub generation: u32,
}

impl Toast {
    #[must_use]
    pub fn new(message: String) -> Self {
        Self {
            message,
            visible: true,
            generation: 0,
        }
    }
}

/// Show `message` and hide it again after a short delay
pub fn show_toast(set_toast: WriteSignal<Toast>, message: impl Into<String>) {
    let mut generation = 0;
    set_toast.update(|toast| {
        generation = toast.generation.wrapping_add(1);
        *toast = Toast { generation, ..Toast::new(message.into()) };
    });

    spawn_local(async move {
        TimeoutFuture::new(TOAST_DURATION_MS).await;
        set_toast.update(|toast| {
            if toast.generation == generation {
                toast.visible = false;
            }
        });
    });
}

#[component]
#[must_use]
pub fn ToastNotification(toast: ReadSignal<Toast>) -> impl IntoView {
    view! {
        {move || {
            let t = toast.get();
            if t.visible {
                view! {
                    <div class="toast toast-visible">
                        {t.message}
                    </div>
                }.into_view()
            } else {
                view! { <div class="toast"></div> }.into_view()
            }
        }}
    }
}
