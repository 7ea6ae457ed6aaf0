//! SVG charts for the dashboard: priority doughnut and route-metrics bars.

use leptos::prelude::*;
use rutaboard_core::{format, palette, stats::RouteMetrics};

const DOUGHNUT_SIZE: f64 = 220.0;
const DOUGHNUT_RADIUS: f64 = 80.0;
const DOUGHNUT_HOLE: f64 = 48.0;

const BAR_CHART_WIDTH: f64 = 520.0;
const BAR_CHART_HEIGHT: f64 = 220.0;
const BAR_MARGIN_BOTTOM: f64 = 40.0;
const BAR_MARGIN_TOP: f64 = 20.0;

/// Colors for the route-metrics bars, one per metric.
const METRIC_COLORS: [&str; 4] = [
    "rgba(255, 99, 132, 0.8)",
    "rgba(54, 162, 235, 0.8)",
    "rgba(255, 205, 86, 0.8)",
    "rgba(75, 192, 192, 0.8)",
];

fn polar(cx: f64, cy: f64, radius: f64, angle_deg: f64) -> (f64, f64) {
    let rad = (angle_deg - 90.0).to_radians();
    (cx + radius * rad.cos(), cy + radius * rad.sin())
}

/// One doughnut slice as an SVG path (outer arc, inner arc back).
fn arc_path(cx: f64, cy: f64, start_deg: f64, end_deg: f64) -> String {
    let large = if end_deg - start_deg > 180.0 { 1 } else { 0 };
    let (x0, y0) = polar(cx, cy, DOUGHNUT_RADIUS, start_deg);
    let (x1, y1) = polar(cx, cy, DOUGHNUT_RADIUS, end_deg);
    let (x2, y2) = polar(cx, cy, DOUGHNUT_HOLE, end_deg);
    let (x3, y3) = polar(cx, cy, DOUGHNUT_HOLE, start_deg);
    format!(
        "M {x0:.2} {y0:.2} A {r} {r} 0 {large} 1 {x1:.2} {y1:.2} \
         L {x2:.2} {y2:.2} A {h} {h} 0 {large} 0 {x3:.2} {y3:.2} Z",
        r = DOUGHNUT_RADIUS,
        h = DOUGHNUT_HOLE,
    )
}

/// Doughnut of clients per priority. Priorities with zero clients are
/// omitted from both the ring and the legend.
#[component]
pub fn PriorityChart(#[prop(into)] histogram: Signal<[usize; 5]>) -> impl IntoView {
    let slices = Memo::new(move |_| {
        let buckets = histogram.get();
        let total: usize = buckets.iter().sum();
        if total == 0 {
            return Vec::new();
        }

        let cx = DOUGHNUT_SIZE / 2.0;
        let cy = DOUGHNUT_SIZE / 2.0;
        let mut angle = 0.0;
        let mut slices = Vec::new();
        for (i, &count) in buckets.iter().enumerate() {
            if count == 0 {
                continue;
            }
            let sweep = 360.0 * count as f64 / total as f64;
            // A full-circle arc collapses to nothing in SVG; stay short of it.
            let end = (angle + sweep).min(angle + 359.99);
            slices.push((
                arc_path(cx, cy, angle, end),
                palette::priority_color((i + 1) as u8),
                format!("Prioridad {}: {}", i + 1, count),
            ));
            angle += sweep;
        }
        slices
    });

    view! {
        <div class="chart priority-chart">
            <h3>"Clientes por prioridad"</h3>
            <Show
                when=move || !slices.get().is_empty()
                fallback=|| view! { <p class="chart-empty">"Sin datos de clientes"</p> }
            >
                <svg
                    viewBox=format!("0 0 {DOUGHNUT_SIZE} {DOUGHNUT_SIZE}")
                    class="doughnut"
                >
                    <For
                        each=move || slices.get()
                        key=|(path, _, _)| path.clone()
                        children=|(path, color, title)| {
                            view! {
                                <path d=path fill=color>
                                    <title>{title}</title>
                                </path>
                            }
                        }
                    />
                </svg>
                <ul class="chart-legend">
                    <For
                        each=move || slices.get()
                        key=|(path, _, _)| path.clone()
                        children=|(_, color, title)| {
                            view! {
                                <li>
                                    <span
                                        class="legend-swatch"
                                        style=format!("background: {color}")
                                    ></span>
                                    {title}
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </div>
    }
}

/// Bar chart over the four route-set aggregates shown after an execution.
#[component]
pub fn MetricsChart(#[prop(into)] metrics: Signal<RouteMetrics>) -> impl IntoView {
    let bars = Memo::new(move |_| {
        let m = metrics.get();
        let values = [
            ("Distancia (km)", m.distance_m / 1000.0),
            ("Tiempo (min)", m.time_min as f64),
            ("Clientes", m.clients_served as f64),
            ("Vehículos", m.vehicles_used as f64),
        ];
        let max = values
            .iter()
            .map(|(_, v)| *v)
            .fold(1.0f64, f64::max);

        let inner_height = BAR_CHART_HEIGHT - BAR_MARGIN_TOP - BAR_MARGIN_BOTTOM;
        let slot = BAR_CHART_WIDTH / values.len() as f64;
        let bar_width = slot * 0.6;

        values
            .iter()
            .enumerate()
            .map(|(i, (label, value))| {
                let height = inner_height * value / max;
                let x = slot * i as f64 + (slot - bar_width) / 2.0;
                let y = BAR_MARGIN_TOP + inner_height - height;
                (
                    x,
                    y,
                    bar_width,
                    height,
                    METRIC_COLORS[i],
                    label.to_string(),
                    format::number(*value),
                )
            })
            .collect::<Vec<_>>()
    });

    view! {
        <div class="chart metrics-chart">
            <h3>"Métricas de la ejecución"</h3>
            <svg viewBox=format!("0 0 {BAR_CHART_WIDTH} {BAR_CHART_HEIGHT}") class="bars">
                <For
                    each=move || bars.get()
                    key=|(_, _, _, _, _, label, _)| label.clone()
                    children=|(x, y, w, h, color, label, value)| {
                        view! {
                            <g>
                                <rect x=x y=y width=w height=h fill=color rx="3" />
                                <text
                                    x={x + w / 2.0}
                                    y={y - 6.0}
                                    text-anchor="middle"
                                    class="bar-value"
                                >
                                    {value}
                                </text>
                                <text
                                    x={x + w / 2.0}
                                    y={BAR_CHART_HEIGHT - BAR_MARGIN_BOTTOM + 18.0}
                                    text-anchor="middle"
                                    class="bar-label"
                                >
                                    {label}
                                </text>
                            </g>
                        }
                    }
                />
            </svg>
        </div>
    }
}
