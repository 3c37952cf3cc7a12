//! Informational toast notifications.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen_futures::spawn_local;

use crate::state::TOAST_DURATION_MS;

/// One visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    id: u64,
    message: String,
}

/// Handle to the toast stack, shared through the reactive context.
#[derive(Clone, Copy)]
pub struct Toasts {
    items: RwSignal<Vec<Toast>>,
    next_id: StoredValue<u64>,
}

impl Toasts {
    /// Install the toast stack into the reactive context.
    pub fn provide() {
        provide_context(Self {
            items: create_rw_signal(Vec::new()),
            next_id: store_value(0),
        });
    }

    /// Show an informational toast, auto-dismissed after a fixed duration.
    pub fn info(&self, message: impl Into<String>) {
        let id = self.next_id.get_value();
        self.next_id.set_value(id + 1);

        self.items.update(|items| {
            items.push(Toast {
                id,
                message: message.into(),
            })
        });

        let items = self.items;
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            items.update(|items| items.retain(|t| t.id != id));
        });
    }
}

/// Fixed-position renderer for the toast stack.
#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = expect_context::<Toasts>();

    view! {
        <div class="fixed top-4 right-4 z-50 space-y-2">
            {move || {
                toasts
                    .items
                    .get()
                    .iter()
                    .map(|toast| {
                        view! {
                            <div class="bg-gray-900 text-white text-sm px-4 py-3 rounded shadow-lg">
                                {toast.message.clone()}
                            </div>
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
