//! Fleet page: vehicle table and availability summary.

use chrono::Utc;
use leptos::prelude::*;
use rutaboard_core::export;

use crate::api;
use crate::components::{use_toast, VehiclesTable};
use crate::utils::download_csv;

/// Vehicles page
#[component]
pub fn Vehicles() -> impl IntoView {
    let (version, set_version) = signal(0u32);

    let vehicles = LocalResource::new(move || {
        let _ = version.get();
        async move { api::fetch_vehicles().await }
    });

    let toast = use_toast();

    view! {
        <div class="page vehicles-page">
            <div class="page-header">
                <h2>"Vehículos"</h2>
                <div class="page-actions">
                    <button
                        class="refresh-button"
                        on:click=move |_| set_version.update(|v| *v += 1)
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
                            <p>"Cargando vehículos..."</p>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        match vehicles.await {
                            Ok(vehicles) => {
                                let available =
                                    vehicles.iter().filter(|v| v.available).count();
                                let total = vehicles.len();
                                let export_list = vehicles.clone();
                                view! {
                                    <div class="table-actions">
                                        <p class="fleet-summary">
                                            {format!("{available} de {total} vehículos disponibles")}
                                        </p>
                                        <button
                                            class="export-button"
                                            on:click=move |_| {
                                                match export::vehicles_csv(&export_list) {
                                                    Ok(csv) => download_csv(
                                                        &csv,
                                                        &export::export_filename(
                                                            "vehiculos",
                                                            "csv",
                                                            Utc::now().date_naive(),
                                                        ),
                                                    ),
                                                    Err(err) => toast.warning(err.to_string()),
                                                }
                                            }
                                        >
                                            <i class="fa-solid fa-file-csv"></i>
                                            " Exportar CSV"
                                        </button>
                                    </div>
                                    <VehiclesTable vehicles=Signal::derive(move || vehicles.clone()) />
                                }
                                .into_any()
                            }
                            Err(err) => view! {
                                <div class="error-state">
                                    <p>{format!("No se pudieron cargar los vehículos: {err}")}</p>
                                </div>
                            }
                            .into_any(),
                        }
                    })}
                </Suspense>
            </div>
        </div>
    }
}
