//! Toast notification system

use leptos::prelude::*;
use std::time::Duration;

/// Toast notification type (determines styling)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastType {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastType {
    fn icon(&self) -> &'static str {
        match self {
            ToastType::Info => "fa-solid fa-circle-info",
            ToastType::Success => "fa-solid fa-circle-check",
            ToastType::Warning => "fa-solid fa-triangle-exclamation",
            ToastType::Error => "fa-solid fa-circle-xmark",
        }
    }

    fn class(&self) -> &'static str {
        match self {
            ToastType::Info => "toast-info",
            ToastType::Success => "toast-success",
            ToastType::Warning => "toast-warning",
            ToastType::Error => "toast-error",
        }
    }
}

impl ToastType {
    fn default_title(&self) -> &'static str {
        match self {
            ToastType::Info => "Información",
            ToastType::Success => "Éxito",
            ToastType::Warning => "Atención",
            ToastType::Error => "Error",
        }
    }
}

/// Single toast notification
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: usize,
    pub title: String,
    pub message: String,
    pub toast_type: ToastType,
    pub auto_dismiss_ms: Option<u64>,
}

impl Toast {
    pub fn new(id: usize, title: String, message: String, toast_type: ToastType) -> Self {
        let auto_dismiss_ms = match toast_type {
            // Errors stay longer
            ToastType::Error => Some(5000),
            _ => Some(3000),
        };
        Self {
            id,
            title,
            message,
            toast_type,
            auto_dismiss_ms,
        }
    }
}

/// Toast context for managing global toast state
#[derive(Clone, Copy)]
pub struct ToastContext {
    toasts: RwSignal<Vec<Toast>>,
    next_id: RwSignal<usize>,
}

impl ToastContext {
    pub fn new() -> Self {
        Self {
            toasts: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(0),
        }
    }

    /// Add a toast notification with an explicit title
    pub fn show_titled(&self, title: String, message: String, toast_type: ToastType) {
        let id = self.next_id.get();
        self.next_id.update(|n| *n += 1);

        let toast = Toast::new(id, title, message, toast_type);
        let auto_dismiss_ms = toast.auto_dismiss_ms;

        self.toasts.update(|toasts| {
            toasts.push(toast);
        });

        // Auto-dismiss after timeout
        if let Some(ms) = auto_dismiss_ms {
            let toasts = self.toasts;
            set_timeout(
                move || {
                    toasts.update(|toasts| {
                        toasts.retain(|t| t.id != id);
                    });
                },
                Duration::from_millis(ms),
            );
        }
    }

    /// Add a toast with the default title for its kind
    pub fn show(&self, message: String, toast_type: ToastType) {
        self.show_titled(toast_type.default_title().to_string(), message, toast_type);
    }

    /// Show info toast
    pub fn info(&self, message: String) {
        self.show(message, ToastType::Info);
    }

    /// Show success toast
    pub fn success(&self, message: String) {
        self.show(message, ToastType::Success);
    }

    /// Show warning toast
    pub fn warning(&self, message: String) {
        self.show(message, ToastType::Warning);
    }

    /// Show error toast
    pub fn error(&self, message: String) {
        self.show(message, ToastType::Error);
    }

    /// Manually dismiss a toast
    pub fn dismiss(&self, id: usize) {
        self.toasts.update(|toasts| {
            toasts.retain(|t| t.id != id);
        });
    }

    /// Get current toasts
    pub fn toasts(&self) -> Vec<Toast> {
        self.toasts.get()
    }
}

impl Default for ToastContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Toast provider component (wraps app root)
#[component]
pub fn ToastProvider(children: Children) -> impl IntoView {
    let toast_context = ToastContext::new();

    provide_context(toast_context);

    view! {
        {children()}
        <ToastContainer />
    }
}

/// Toast container component (renders all active toasts)
#[component]
pub fn ToastContainer() -> impl IntoView {
    let toast_context = expect_context::<ToastContext>();

    view! {
        <div class="toast-container">
            <For
                each=move || toast_context.toasts()
                key=|toast| toast.id
                children=move |toast| {
                    view! { <ToastItem toast=toast /> }
                }
            />
        </div>
    }
}

/// Individual toast item component
#[component]
fn ToastItem(toast: Toast) -> impl IntoView {
    let toast_context = expect_context::<ToastContext>();
    let id = toast.id;
    let title = toast.title.clone();
    let message = toast.message.clone();
    let icon = toast.toast_type.icon();
    let class = toast.toast_type.class();

    view! {
        <div class=format!("toast {}", class)>
            <div class="toast-content">
                <i class=format!("toast-icon {}", icon)></i>
                <div class="toast-text">
                    <span class="toast-title">{title}</span>
                    <span class="toast-message">{message}</span>
                </div>
            </div>
            <button
                class="toast-close"
                on:click=move |_| toast_context.dismiss(id)
                aria-label="Cerrar"
            >
                "×"
            </button>
        </div>
    }
}

/// Hook to access toast context
pub fn use_toast() -> ToastContext {
    expect_context::<ToastContext>()
}
