//! Data tables for the clients and fleet pages.

use leptos::prelude::*;
use rutaboard_core::{format, palette, Client, Vehicle};

fn dash(value: Option<String>) -> String {
    value.unwrap_or_else(|| "-".to_string())
}

/// Client table. Priorities render as tinted badges matching the map
/// markers.
#[component]
pub fn ClientsTable(#[prop(into)] clients: Signal<Vec<Client>>) -> impl IntoView {
    view! {
        <table class="data-table clients-table">
            <thead>
                <tr>
                    <th>"ID"</th>
                    <th>"Nombre"</th>
                    <th>"Distrito"</th>
                    <th>"Prioridad"</th>
                    <th>"Pedido (kg)"</th>
                    <th>"Ventana"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || clients.get()
                    key=|client| client.id
                    children=|client| {
                        let priority_badge = match client.priority {
                            Some(p) => view! {
                                <span
                                    class="badge badge-priority"
                                    style=format!("background: {}", palette::priority_color(p))
                                >
                                    {p.to_string()}
                                </span>
                            }
                            .into_any(),
                            None => view! { <span class="badge badge-muted">"-"</span> }.into_any(),
                        };
                        let window = match (&client.window_start, &client.window_end) {
                            (Some(start), Some(end)) => format!("{start} - {end}"),
                            _ => "-".to_string(),
                        };
                        view! {
                            <tr>
                                <td>{client.id}</td>
                                <td>{client.name.clone()}</td>
                                <td>{dash(client.district.clone())}</td>
                                <td>{priority_badge}</td>
                                <td>{dash(client.order_kg.map(format::number))}</td>
                                <td>{window}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}

/// Fleet table with an availability badge per vehicle.
#[component]
pub fn VehiclesTable(#[prop(into)] vehicles: Signal<Vec<Vehicle>>) -> impl IntoView {
    view! {
        <table class="data-table vehicles-table">
            <thead>
                <tr>
                    <th>"Placa"</th>
                    <th>"Modelo"</th>
                    <th>"Capacidad (kg)"</th>
                    <th>"Estado"</th>
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || vehicles.get()
                    key=|vehicle| vehicle.id
                    children=|vehicle| {
                        let badge = if vehicle.available {
                            view! { <span class="badge badge-available">"Disponible"</span> }
                                .into_any()
                        } else {
                            view! { <span class="badge badge-unavailable">"No disponible"</span> }
                                .into_any()
                        };
                        view! {
                            <tr>
                                <td>{vehicle.plate.clone()}</td>
                                <td>{vehicle.model.clone()}</td>
                                <td>{format::number(vehicle.capacity_kg)}</td>
                                <td>{badge}</td>
                            </tr>
                        }
                    }
                />
            </tbody>
        </table>
    }
}
