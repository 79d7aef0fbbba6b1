//! Toast notifications.
//!
//! Every failure in this layer degrades to a visible message; this module is
//! where those messages land. Toasts auto-dismiss and cap out at a small
//! fixed number.

use std::collections::VecDeque;

use leptos::prelude::*;

/// Maximum number of toasts to show at once
const MAX_TOASTS: usize = 5;

/// Default lifetime before a toast dismisses itself
#[cfg(not(feature = "ssr"))]
const AUTO_DISMISS_MS: u32 = 4_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
}

/// Toast with a unique ID for tracking
#[derive(Debug, Clone)]
pub struct ToastItem {
    pub id: u64,
    pub toast: Toast,
}

/// Handle for pushing toasts from anywhere in the tree
#[derive(Clone, Copy)]
pub struct Toaster {
    toasts: RwSignal<VecDeque<ToastItem>>,
    next_id: RwSignal<u64>,
}

impl Toaster {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(VecDeque::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Get the toasts signal for the container
    pub fn toasts(&self) -> RwSignal<VecDeque<ToastItem>> {
        self.toasts
    }

    pub fn push(&self, kind: ToastKind, message: impl Into<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);

        self.toasts.update(|items| {
            items.push_back(ToastItem {
                id,
                toast: Toast {
                    kind,
                    message: message.into(),
                },
            });
            while items.len() > MAX_TOASTS {
                items.pop_front();
            }
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.push(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.push(ToastKind::Error, message);
    }

    pub fn info(&self, message: impl Into<String>) {
        self.push(ToastKind::Info, message);
    }
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new()
    }
}

/// Provide the toaster to the component tree
pub fn provide_toaster() -> Toaster {
    let toaster = Toaster::new();
    provide_context(toaster);
    toaster
}

/// Get the toaster from the component tree
pub fn use_toaster() -> Toaster {
    expect_context::<Toaster>()
}

/// Toast container component, placed once near the root of the app
#[component]
pub fn ToasterContainer(toasts: RwSignal<VecDeque<ToastItem>>) -> impl IntoView {
    view! {
        <div class="fixed top-4 right-4 z-50 flex flex-col gap-2 max-w-sm">
            {move || {
                toasts.get().into_iter().map(|item| {
                    let id = item.id;
                    view! {
                        <ToastView toast=item.toast id=id toasts=toasts/>
                    }
                }).collect_view()
            }}
        </div>
    }
}

/// Single toast component
#[component]
fn ToastView(toast: Toast, id: u64, toasts: RwSignal<VecDeque<ToastItem>>) -> impl IntoView {
    #[cfg(not(feature = "ssr"))]
    {
        use gloo_timers::future::TimeoutFuture;
        use leptos::task::spawn_local;

        spawn_local(async move {
            TimeoutFuture::new(AUTO_DISMISS_MS).await;
            toasts.update(|items| {
                items.retain(|i| i.id != id);
            });
        });
    }

    let (bg_class, text_class) = match toast.kind {
        ToastKind::Success => ("bg-green-50 border-green-300", "text-green-800"),
        ToastKind::Error => ("bg-red-50 border-red-300", "text-red-800"),
        ToastKind::Info => ("bg-blue-50 border-blue-300", "text-blue-800"),
    };

    let container_class = format!(
        "flex items-start gap-3 p-4 rounded-lg border shadow-lg {}",
        bg_class
    );

    view! {
        <div class=container_class>
            <p class=format!("flex-1 text-sm {}", text_class)>{toast.message.clone()}</p>
            <button
                class="text-gray-400 hover:text-gray-600"
                on:click=move |_| {
                    toasts.update(|items| {
                        items.retain(|i| i.id != id);
                    });
                }
            >
                "×"
            </button>
        </div>
    }
}
