//! Full-page loading overlay shown while the route computation runs.

use leptos::prelude::*;

/// Context controlling the global loading overlay.
#[derive(Clone, Copy)]
pub struct LoadingContext {
    message: RwSignal<Option<String>>,
}

impl LoadingContext {
    pub fn new() -> Self {
        Self {
            message: RwSignal::new(None),
        }
    }

    pub fn begin(&self, message: &str) {
        self.message.set(Some(message.to_string()));
    }

    pub fn finish(&self) {
        self.message.set(None);
    }

    /// True while the overlay is up; buttons that start work disable on it.
    pub fn is_busy(&self) -> bool {
        self.message.get().is_some()
    }
}

impl Default for LoadingContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Provider wrapping the app root; also renders the overlay itself.
#[component]
pub fn LoadingProvider(children: Children) -> impl IntoView {
    let loading = LoadingContext::new();
    provide_context(loading);

    view! {
        {children()}
        <Show when=move || loading.message.get().is_some()>
            <div class="loading-overlay">
                <div class="spinner"></div>
                <p>{move || loading.message.get().unwrap_or_default()}</p>
            </div>
        </Show>
    }
}

pub fn use_loading() -> LoadingContext {
    expect_context::<LoadingContext>()
}
