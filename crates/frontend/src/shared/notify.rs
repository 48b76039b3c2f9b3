use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

const TOAST_MILLIS: u32 = 3000;

/// Transient toast notifications, provided once via context.
#[derive(Clone, Copy)]
pub struct NotifyService {
    message: RwSignal<Option<String>>,
}

impl NotifyService {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }

    /// Show a message for a few seconds.
    pub fn show(&self, text: impl Into<String>) {
        let text = text.into();
        let message = self.message;
        message.set(Some(text.clone()));
        spawn_local(async move {
            TimeoutFuture::new(TOAST_MILLIS).await;
            // Only clear if a newer toast hasn't replaced this one
            message.update(|current| {
                if current.as_deref() == Some(text.as_str()) {
                    *current = None;
                }
            });
        });
    }
}

impl Default for NotifyService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notify() -> NotifyService {
    use_context::<NotifyService>().expect("NotifyService not found in context")
}

/// Toast container rendered once at the app root.
#[component]
pub fn Toast() -> impl IntoView {
    let notify = use_notify();
    let message = notify.message;

    view! {
        {move || message.get().map(|text| view! {
            <div class="toast">{text}</div>
        })}
    }
}
