//! Clients page: table, CSV bulk upload and the new-client form.

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rutaboard_core::models::NewClient;
use rutaboard_core::{export, validate};
use wasm_bindgen::JsCast;
use web_sys::HtmlInputElement;

use crate::api;
use crate::components::{use_toast, ClientsTable};
use crate::utils::download_csv;

/// Clients page
#[component]
pub fn Clients() -> impl IntoView {
    let (version, set_version) = signal(0u32);

    let clients = LocalResource::new(move || {
        let _ = version.get();
        async move { api::fetch_clients().await }
    });

    let toast = use_toast();

    let on_upload = move |ev: leptos::ev::Event| {
        let input: HtmlInputElement = match ev.target().and_then(|t| t.dyn_into().ok()) {
            Some(input) => input,
            None => return,
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            return;
        };
        input.set_value("");

        spawn_local(async move {
            match api::upload_csv(&file).await {
                Ok(message) => {
                    toast.success(message);
                    set_version.update(|v| *v += 1);
                }
                Err(err) => toast.error(err),
            }
        });
    };

    view! {
        <div class="page clients-page">
            <div class="page-header">
                <h2>"Clientes"</h2>
                <div class="page-actions">
                    <label class="upload-button">
                        <i class="fa-solid fa-file-arrow-up"></i>
                        " Cargar CSV"
                        <input
                            type="file"
                            accept=".csv"
                            class="file-input"
                            on:change=on_upload
                        />
                    </label>
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
                            <p>"Cargando clientes..."</p>
                        </div>
                    }
                }>
                    {move || Suspend::new(async move {
                        match clients.await {
                            Ok(clients) => {
                                let export_list = clients.clone();
                                view! {
                                    <div class="table-actions">
                                        <button
                                            class="export-button"
                                            on:click=move |_| {
                                                match export::clients_csv(&export_list) {
                                                    Ok(csv) => download_csv(
                                                        &csv,
                                                        &export::export_filename(
                                                            "clientes",
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
                                    <ClientsTable clients=Signal::derive(move || clients.clone()) />
                                }
                                .into_any()
                            }
                            Err(err) => view! {
                                <div class="error-state">
                                    <p>{format!("No se pudieron cargar los clientes: {err}")}</p>
                                </div>
                            }
                            .into_any(),
                        }
                    })}
                </Suspense>

                <NewClientForm on_saved=move || set_version.update(|v| *v += 1) />
            </div>
        </div>
    }
}

/// Registration form for a single client. Validation failures mark the
/// offending inputs and raise a warning toast; the request only goes out
/// once every field passes.
#[component]
fn NewClientForm(on_saved: impl Fn() + Copy + 'static) -> impl IntoView {
    let name = RwSignal::new(String::new());
    let lat = RwSignal::new(String::new());
    let lng = RwSignal::new(String::new());
    let priority = RwSignal::new(String::new());
    let window_start = RwSignal::new(String::new());
    let window_end = RwSignal::new(String::new());
    let order = RwSignal::new(String::new());
    let invalid = RwSignal::new(Vec::<&'static str>::new());

    let toast = use_toast();

    let field_class = move |field: &'static str| {
        if invalid.get().contains(&field) {
            "form-input is-invalid"
        } else {
            "form-input"
        }
    };

    let mark = move |field: &'static str, ok: bool| {
        invalid.update(|list| {
            list.retain(|f| *f != field);
            if !ok {
                list.push(field);
            }
        });
    };

    // Per-field checks on blur; empty fields wait for submit to complain.
    let check_name = move |_| mark("nombre", !name.get().trim().is_empty());
    let check_coords = move |_| {
        let (lat, lng) = (lat.get(), lng.get());
        if lat.trim().is_empty() || lng.trim().is_empty() {
            return;
        }
        let ok = validate::coordinates(&lat, &lng);
        mark("lat", ok);
        mark("lng", ok);
    };
    let check_start = move |_| {
        let value = window_start.get();
        if !value.trim().is_empty() {
            mark("ventana_inicio", validate::time_format(value.trim()));
        }
    };
    let check_end = move |_| {
        let value = window_end.get();
        if !value.trim().is_empty() {
            mark("ventana_fin", validate::time_format(value.trim()));
        }
    };
    let check_priority = move |_| {
        let value = priority.get();
        if !value.trim().is_empty() {
            mark("prioridad", matches!(value.trim().parse::<u8>(), Ok(1..=5)));
        }
    };
    let check_order = move |_| {
        let value = order.get();
        if !value.trim().is_empty() {
            mark(
                "pedido",
                matches!(value.trim().parse::<f64>(), Ok(kg) if kg > 0.0),
            );
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut bad: Vec<&'static str> = Vec::new();

        let required: [(&'static str, String); 7] = [
            ("nombre", name.get()),
            ("lat", lat.get()),
            ("lng", lng.get()),
            ("prioridad", priority.get()),
            ("ventana_inicio", window_start.get()),
            ("ventana_fin", window_end.get()),
            ("pedido", order.get()),
        ];
        let borrowed: Vec<(&'static str, &str)> = required
            .iter()
            .map(|(field, value)| (*field, value.as_str()))
            .collect();
        bad.extend(validate::missing_required(&borrowed));

        // Parse each numeric field once; the typed values feed the payload.
        let mut coords = None;
        let mut parsed_priority = None;
        let mut parsed_order = None;
        if bad.is_empty() {
            match (
                lat.get().trim().parse::<f64>(),
                lng.get().trim().parse::<f64>(),
            ) {
                (Ok(lat), Ok(lng)) if validate::coords_in_bounds(lat, lng) => {
                    coords = Some((lat, lng));
                }
                _ => {
                    bad.push("lat");
                    bad.push("lng");
                }
            }
            if !validate::time_format(window_start.get().trim()) {
                bad.push("ventana_inicio");
            }
            if !validate::time_format(window_end.get().trim()) {
                bad.push("ventana_fin");
            }
            match priority.get().trim().parse::<u8>() {
                Ok(p @ 1..=5) => parsed_priority = Some(p),
                _ => bad.push("prioridad"),
            }
            match order.get().trim().parse::<f64>() {
                Ok(kg) if kg > 0.0 => parsed_order = Some(kg),
                _ => bad.push("pedido"),
            }
        }

        if !bad.is_empty() {
            invalid.set(bad);
            toast.warning("Revisa los campos marcados".to_string());
            return;
        }
        invalid.set(Vec::new());

        let (Some((latitud, longitud)), Some(prioridad), Some(pedido)) =
            (coords, parsed_priority, parsed_order)
        else {
            return;
        };

        let payload = NewClient {
            nombre: name.get().trim().to_string(),
            latitud,
            longitud,
            prioridad,
            ventana_inicio: window_start.get().trim().to_string(),
            ventana_fin: window_end.get().trim().to_string(),
            pedido,
        };

        spawn_local(async move {
            match api::add_client(&payload).await {
                Ok(message) => {
                    toast.success(message);
                    name.set(String::new());
                    lat.set(String::new());
                    lng.set(String::new());
                    priority.set(String::new());
                    window_start.set(String::new());
                    window_end.set(String::new());
                    order.set(String::new());
                    on_saved();
                }
                Err(err) => toast.error(err),
            }
        });
    };

    view! {
        <form class="card new-client-form" on:submit=on_submit>
            <h3>"Agregar cliente"</h3>
            <div class="form-grid">
                <label>
                    "Nombre"
                    <input
                        class=move || field_class("nombre")
                        prop:value=name
                        on:input=move |ev| name.set(event_target_value(&ev))
                        on:blur=check_name
                    />
                </label>
                <label>
                    "Latitud"
                    <input
                        class=move || field_class("lat")
                        placeholder="-12.0464"
                        prop:value=lat
                        on:input=move |ev| lat.set(event_target_value(&ev))
                        on:blur=check_coords
                    />
                </label>
                <label>
                    "Longitud"
                    <input
                        class=move || field_class("lng")
                        placeholder="-77.0428"
                        prop:value=lng
                        on:input=move |ev| lng.set(event_target_value(&ev))
                        on:blur=check_coords
                    />
                </label>
                <label>
                    "Prioridad (1-5)"
                    <input
                        class=move || field_class("prioridad")
                        prop:value=priority
                        on:input=move |ev| priority.set(event_target_value(&ev))
                        on:blur=check_priority
                    />
                </label>
                <label>
                    "Ventana inicio"
                    <input
                        class=move || field_class("ventana_inicio")
                        placeholder="08:00"
                        prop:value=window_start
                        on:input=move |ev| window_start.set(event_target_value(&ev))
                        on:blur=check_start
                    />
                </label>
                <label>
                    "Ventana fin"
                    <input
                        class=move || field_class("ventana_fin")
                        placeholder="10:00"
                        prop:value=window_end
                        on:input=move |ev| window_end.set(event_target_value(&ev))
                        on:blur=check_end
                    />
                </label>
                <label>
                    "Pedido (kg)"
                    <input
                        class=move || field_class("pedido")
                        prop:value=order
                        on:input=move |ev| order.set(event_target_value(&ev))
                        on:blur=check_order
                    />
                </label>
            </div>
            <button type="submit" class="submit-button">
                <i class="fa-solid fa-user-plus"></i>
                " Guardar"
            </button>
        </form>
    }
}
