//! Planner page: the Leaflet map, algorithm selection and route execution.

use std::time::Duration;

use chrono::Utc;
use leptos::leptos_dom::helpers::{set_timeout_with_handle, TimeoutHandle};
use leptos::prelude::*;
use rutaboard_core::scenario::{self, algorithm_label, ScenarioOutcome};
use rutaboard_core::stats::RouteMetrics;
use rutaboard_core::{export, format, palette};

use crate::api;
use crate::components::{use_loading, use_toast, MetricsChart};
use crate::map::MapSession;
use crate::utils::{download_csv, download_json, share_text};

const MAP_CONTAINER_ID: &str = "planner-map";
const COMPUTE_DELAY_MS: u64 = 1500;

/// Planner page
#[component]
pub fn Planner() -> impl IntoView {
    // The Leaflet handles are JS objects, so they live outside the reactive
    // graph in thread-local storage owned by this page.
    let session: StoredValue<Option<MapSession>, LocalStorage> = StoredValue::new_local(None);
    // Pending compute delay, so leaving the page cancels it instead of
    // letting the callback fire against disposed state.
    let pending = StoredValue::new_local(None::<TimeoutHandle>);

    let (version, set_version) = signal(0u32);
    let clients = LocalResource::new(move || {
        let _ = version.get();
        async move { api::fetch_clients().await }
    });

    let selected = RwSignal::new("bellman-ford".to_string());
    let (outcome, set_outcome) = signal(None::<ScenarioOutcome>);

    let toast = use_toast();
    let loading = use_loading();

    // The container div exists once effects run, so the map initializes
    // here rather than in the component body. Re-running would leak a
    // second Leaflet instance, so any previous session goes down first.
    Effect::new(move |_| {
        session.update_value(|slot| {
            // Dropping the previous session tears down its map.
            slot.take();
            match MapSession::init(MAP_CONTAINER_ID) {
                Ok(new_session) => *slot = Some(new_session),
                Err(err) => {
                    log::error!("fallo al inicializar el mapa: {:?}", err);
                    toast.error("No se pudo inicializar el mapa".to_string());
                }
            }
        });
    });

    // Redraw client markers whenever a fetch lands.
    Effect::new(move |_| {
        match clients.get().as_ref().map(|r| r.as_ref()) {
            Some(Ok(list)) => session.update_value(|slot| {
                if let Some(session) = slot.as_mut() {
                    session.set_clients(list);
                }
            }),
            Some(Err(err)) => toast.error(err.clone()),
            None => {}
        }
    });

    on_cleanup(move || {
        if let Some(Some(handle)) = pending.try_update_value(|slot| slot.take()) {
            handle.clear();
        }
        session.try_update_value(|slot| {
            slot.take();
        });
    });

    let on_execute = move |_| {
        let algorithm = selected.get();
        loading.begin("Calculando rutas...");
        let fired = set_timeout_with_handle(
            move || {
                pending.try_set_value(None);
                loading.finish();
                match scenario::run(&algorithm) {
                    Ok(result) => {
                        session.try_update_value(|slot| {
                            if let Some(session) = slot.as_mut() {
                                session.set_routes(&result.routes, true);
                            }
                        });
                        let label = algorithm_label(&result.algorithm)
                            .unwrap_or(&result.algorithm)
                            .to_string();
                        toast.success(format!("Rutas calculadas con {label}"));
                        set_outcome.set(Some(result));
                    }
                    Err(err) => toast.error(err.to_string()),
                }
            },
            Duration::from_millis(COMPUTE_DELAY_MS),
        );
        match fired {
            Ok(handle) => pending.set_value(Some(handle)),
            Err(err) => {
                loading.finish();
                log::error!("no se pudo programar el cálculo: {:?}", err);
            }
        }
    };

    let on_clear = move |_| {
        session.update_value(|slot| {
            if let Some(session) = slot.as_mut() {
                session.clear_routes();
            }
        });
        set_outcome.set(None);
    };

    view! {
        <div class="page planner-page">
            <div class="page-header">
                <h2>"Planificador de rutas"</h2>
                <div class="page-actions">
                    <select
                        class="algorithm-select"
                        on:change=move |ev| selected.set(event_target_value(&ev))
                    >
                        <option value="bellman-ford" selected>"Bellman-Ford"</option>
                        <option value="programacion-dinamica">"Programación Dinámica"</option>
                        <option value="backtracking">"Backtracking"</option>
                    </select>
                    <button
                        class="execute-button"
                        disabled=move || loading.is_busy()
                        on:click=on_execute
                    >
                        <i class="fa-solid fa-play"></i>
                        " Ejecutar"
                    </button>
                    <button class="clear-button" on:click=on_clear>
                        <i class="fa-solid fa-broom"></i>
                        " Limpiar"
                    </button>
                    <button
                        class="refresh-button"
                        on:click=move |_| set_version.update(|v| *v += 1)
                    >
                        <i class="fa-solid fa-rotate"></i>
                        " Actualizar"
                    </button>
                </div>
            </div>

            <div class="planner-layout">
                <div id=MAP_CONTAINER_ID class="map-container"></div>
                <Show when=move || outcome.get().is_some()>
                    <ResultsPanel outcome session />
                </Show>
            </div>
        </div>
    }
}

/// Route list, aggregate metrics, exports and share for the last execution.
/// Clicking a route row zooms the map to that route.
#[component]
fn ResultsPanel(
    outcome: ReadSignal<Option<ScenarioOutcome>>,
    session: StoredValue<Option<MapSession>, LocalStorage>,
) -> impl IntoView {
    let toast = use_toast();

    let metrics = Memo::new(move |_| {
        outcome
            .get()
            .map(|o| RouteMetrics::from_routes(&o.routes))
            .unwrap_or_default()
    });

    let routes = move || outcome.get().map(|o| o.routes).unwrap_or_default();

    let on_export_csv = move |_| {
        let Some(result) = outcome.get() else { return };
        match export::route_points_csv(&result.routes) {
            Ok(csv) => download_csv(
                &csv,
                &export::export_filename("rutas", "csv", Utc::now().date_naive()),
            ),
            Err(err) => toast.warning(err.to_string()),
        }
    };

    let on_export_json = move |_| {
        let Some(result) = outcome.get() else { return };
        match export::routes_json(&result.routes, &result.algorithm, Utc::now().date_naive()) {
            Ok(json) => download_json(
                &json,
                &export::export_filename("rutas", "json", Utc::now().date_naive()),
            ),
            Err(err) => toast.warning(err.to_string()),
        }
    };

    let on_share = move |_| {
        let Some(result) = outcome.get() else { return };
        let m = RouteMetrics::from_routes(&result.routes);
        let label = algorithm_label(&result.algorithm).unwrap_or(&result.algorithm);
        let text = format!(
            "Plan de rutas ({label}): {} rutas, {}, {}, costo {}",
            result.routes.len(),
            format::km_from_meters(m.distance_m),
            format::duration_min(m.time_min),
            format::currency(result.cost_pen),
        );
        if !share_text("RutaBoard", &text) {
            // No native share sheet; leave the summary where it can be
            // copied by hand.
            let _ = window().prompt_with_message_and_default("Copia el resumen:", &text);
        }
    };

    view! {
        <aside class="card results-panel">
            <h3>
                {move || {
                    outcome
                        .get()
                        .map(|o| {
                            format!(
                                "Resultado: {}",
                                algorithm_label(&o.algorithm).unwrap_or(&o.algorithm)
                            )
                        })
                        .unwrap_or_default()
                }}
            </h3>

            <ul class="results-summary">
                <li>
                    <strong>"Distancia total: "</strong>
                    {move || format::km_from_meters(metrics.get().distance_m)}
                </li>
                <li>
                    <strong>"Tiempo estimado: "</strong>
                    {move || format::duration_min(metrics.get().time_min)}
                </li>
                <li>
                    <strong>"Clientes atendidos: "</strong>
                    {move || metrics.get().clients_served.to_string()}
                </li>
                <li>
                    <strong>"Costo estimado: "</strong>
                    {move || {
                        outcome
                            .get()
                            .map(|o| format::currency(o.cost_pen))
                            .unwrap_or_default()
                    }}
                </li>
            </ul>

            <table class="data-table routes-table">
                <thead>
                    <tr>
                        <th></th>
                        <th>"Vehículo"</th>
                        <th>"Distancia"</th>
                        <th>"Tiempo"</th>
                        <th>"Carga"</th>
                    </tr>
                </thead>
                <tbody>
                    <For
                        each=routes
                        key=|route| route.id
                        children=move |route| {
                            let index = (route.id as usize).saturating_sub(1);
                            let color = palette::route_color(index);
                            view! {
                                <tr
                                    class="route-row"
                                    on:click=move |_| {
                                        session.try_with_value(|slot| {
                                            if let Some(session) = slot.as_ref() {
                                                session.fit_to_route(index);
                                            }
                                        });
                                    }
                                >
                                    <td>
                                        <span
                                            class="legend-swatch"
                                            style=format!("background: {color}")
                                        ></span>
                                    </td>
                                    <td>{route.plate.clone()}</td>
                                    <td>{format::km_from_meters(route.distance_m)}</td>
                                    <td>{format::duration_min(route.time_min)}</td>
                                    <td>{format!("{} kg", format::number(route.load_kg))}</td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>

            <MetricsChart metrics />

            <div class="results-actions">
                <button class="export-button" on:click=on_export_csv>
                    <i class="fa-solid fa-file-csv"></i>
                    " CSV"
                </button>
                <button class="export-button" on:click=on_export_json>
                    <i class="fa-solid fa-file-code"></i>
                    " JSON"
                </button>
                <button class="share-button" on:click=on_share>
                    <i class="fa-solid fa-share-nodes"></i>
                    " Compartir"
                </button>
            </div>
        </aside>
    }
}
