//! Dashboard page: fleet and client overview.

use leptos::prelude::*;
use rutaboard_core::stats::{fleet_summary, priority_histogram};
use rutaboard_core::{Client, Vehicle};

use crate::api;
use crate::components::{use_toast, CardColor, PriorityChart, StatsCard};

async fn fetch_overview() -> Result<(Vec<Client>, Vec<Vehicle>), String> {
    let clients = api::fetch_clients().await?;
    let vehicles = api::fetch_vehicles().await?;
    Ok((clients, vehicles))
}

/// Dashboard page
#[component]
pub fn Dashboard() -> impl IntoView {
    // Version signal to trigger refetch
    let (version, set_version) = signal(0u32);

    let overview = LocalResource::new(move || {
        let _ = version.get();
        async move { fetch_overview().await }
    });

    let toast = use_toast();

    view! {
        <div class="page dashboard-page">
            <div class="page-header">
                <h2>"Panel general"</h2>
                <div class="page-actions">
                    <button
                        class="refresh-button"
                        on:click=move |_| {
                            set_version.update(|v| *v += 1);
                            toast.info("Actualizando datos...".to_string());
                        }
                    >
                        <i class="fa-solid fa-rotate"></i>
                        " Actualizar"
                    </button>
                </div>
            </div>

            <div class="page-content">
                <Suspense fallback=move || {
                    view! {
                        <div class="loading-state">
                            <div class="spinner"></div>
                            <p>"Cargando datos..."</p>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        match overview.await {
                            Ok((clients, vehicles)) => {
                                let summary = fleet_summary(&clients, &vehicles);
                                let histogram = priority_histogram(&clients);
                                view! {
                                    <div class="stats-grid">
                                        <StatsCard
                                            label="Clientes".to_string()
                                            value=Signal::derive(move || summary.total_clients as f64)
                                            icon="fa-solid fa-users"
                                        />
                                        <StatsCard
                                            label="Vehículos".to_string()
                                            value=Signal::derive(move || summary.total_vehicles as f64)
                                            icon="fa-solid fa-truck"
                                        />
                                        <StatsCard
                                            label="Vehículos disponibles".to_string()
                                            value=Signal::derive(move || summary.available_vehicles as f64)
                                            icon="fa-solid fa-circle-check"
                                            color=CardColor::Green
                                        />
                                        <StatsCard
                                            label="Pedido total (kg)".to_string()
                                            value=Signal::derive(move || summary.total_order_kg)
                                            icon="fa-solid fa-boxes-stacked"
                                            color=CardColor::Yellow
                                        />
                                        <StatsCard
                                            label="Capacidad total (kg)".to_string()
                                            value=Signal::derive(move || summary.total_capacity_kg)
                                            icon="fa-solid fa-weight-hanging"
                                            color=CardColor::Blue
                                        />
                                    </div>
                                    <PriorityChart histogram=Signal::derive(move || histogram) />
                                }
                                .into_any()
                            }
                            Err(err) => {
                                view! {
                                    <div class="error-state">
                                        <p>{format!("No se pudieron cargar los datos: {err}")}</p>
                                        <button on:click=move |_| set_version.update(|v| *v += 1)>
                                            "Reintentar"
                                        </button>
                                    </div>
                                }
                                .into_any()
                            }
                        }
                    })}
                </Suspense>
            </div>
        </div>
    }
}
