//! Dashboard stat cards with animated counters.

use std::time::Duration;

use leptos::leptos_dom::helpers::{set_interval_with_handle, IntervalHandle};
use leptos::prelude::*;
use rutaboard_core::{format, stats};

const COUNTER_MS: f64 = 1000.0;
const COUNTER_TICK_MS: u64 = 30;

/// Card color variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardColor {
    Default,
    Green,
    Yellow,
    Blue,
}

impl CardColor {
    fn to_class(&self) -> &'static str {
        match self {
            CardColor::Default => "",
            CardColor::Green => "card-green",
            CardColor::Yellow => "card-yellow",
            CardColor::Blue => "card-blue",
        }
    }
}

/// A single metric card with a Font Awesome icon and a counter that eases
/// toward the latest value.
#[component]
pub fn StatsCard(
    /// Card label (e.g., "Clientes")
    label: String,
    /// Live metric value
    #[prop(into)]
    value: Signal<f64>,
    /// Font Awesome icon class (e.g., "fa-solid fa-users")
    icon: &'static str,
    /// Renders the interpolated value, defaults to grouped-number display
    #[prop(default = format::number)]
    render: fn(f64) -> String,
    /// Color variant for status indication
    #[prop(default = CardColor::Default)]
    color: CardColor,
) -> impl IntoView {
    view! {
        <div class=format!("card stats-card {}", color.to_class())>
            <i class=format!("stats-card-icon {}", icon)></i>
            <div class="stats-card-body">
                <div class="stats-card-value">
                    <AnimatedCounter value render />
                </div>
                <div class="stats-card-label">{label}</div>
            </div>
        </div>
    }
}

/// Counter text that interpolates from its previous value to the new one
/// over one second. A value change mid-animation cancels the running timer
/// and eases from wherever the display currently is.
#[component]
pub fn AnimatedCounter(
    #[prop(into)] value: Signal<f64>,
    #[prop(default = format::number)] render: fn(f64) -> String,
) -> impl IntoView {
    let (shown, set_shown) = signal(0.0f64);
    let running = StoredValue::new_local(None::<IntervalHandle>);

    Effect::new(move |_| {
        let target = value.get();
        let start = shown.get_untracked();

        if let Some(handle) = running.get_value() {
            handle.clear();
        }
        if (target - start).abs() < f64::EPSILON {
            return;
        }

        let Some(performance) = window().performance() else {
            set_shown.set(target);
            return;
        };

        let started_at = performance.now();
        let result = set_interval_with_handle(
            move || {
                let progress = stats::progress(performance.now() - started_at, COUNTER_MS);
                set_shown.try_set(stats::interpolate(start, target, progress));
                if progress >= 1.0 {
                    if let Some(Some(handle)) = running.try_update_value(|slot| slot.take()) {
                        handle.clear();
                    }
                }
            },
            Duration::from_millis(COUNTER_TICK_MS),
        );

        match result {
            Ok(handle) => running.set_value(Some(handle)),
            Err(_) => set_shown.set(target),
        }
    });

    // The interval survives the owner otherwise; a tick after unmount would
    // touch disposed state.
    on_cleanup(move || {
        if let Some(Some(handle)) = running.try_update_value(|slot| slot.take()) {
            handle.clear();
        }
    });

    view! { <span class="counter">{move || render(shown.get())}</span> }
}
