//! HTTP client for the route-planning backend.
//!
//! Every function returns a user-presentable Spanish message on failure;
//! pages forward these straight into toasts.

use gloo_net::http::Request;
use rutaboard_core::models::{ApiOutcome, ClientsEnvelope, NewClient, VehiclesEnvelope};
use rutaboard_core::{Client, Vehicle};
use web_sys::{File, FormData};

/// Fetch the client list from `/api/obtener_clientes`.
pub async fn fetch_clients() -> Result<Vec<Client>, String> {
    let response = Request::get("/api/obtener_clientes")
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    let envelope = response
        .json::<ClientsEnvelope>()
        .await
        .map_err(|e| format!("Error al procesar la respuesta: {}", e))?;

    Ok(envelope.clientes)
}

/// Fetch the fleet from `/api/obtener_vehiculos`.
pub async fn fetch_vehicles() -> Result<Vec<Vehicle>, String> {
    let response = Request::get("/api/obtener_vehiculos")
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    let envelope = response
        .json::<VehiclesEnvelope>()
        .await
        .map_err(|e| format!("Error al procesar la respuesta: {}", e))?;

    Ok(envelope.vehiculos)
}

fn outcome_message(outcome: ApiOutcome, fallback: &str) -> Result<String, String> {
    if let Some(error) = outcome.error {
        return Err(error);
    }
    if outcome.success {
        Ok(outcome.message.unwrap_or_else(|| fallback.to_string()))
    } else {
        Err(outcome
            .message
            .unwrap_or_else(|| "Operación rechazada por el servidor".to_string()))
    }
}

/// Upload a client CSV to `/api/cargar_csv` as multipart form data.
/// Returns the server's confirmation message.
pub async fn upload_csv(file: &File) -> Result<String, String> {
    let form = FormData::new().map_err(|_| "No se pudo preparar el archivo".to_string())?;
    form.append_with_blob_and_filename("archivo", file, &file.name())
        .map_err(|_| "No se pudo preparar el archivo".to_string())?;

    let response = Request::post("/api/cargar_csv")
        .body(form)
        .map_err(|e| format!("Error al preparar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    let outcome = response
        .json::<ApiOutcome>()
        .await
        .map_err(|e| format!("Error al procesar la respuesta: {}", e))?;

    outcome_message(outcome, "Datos cargados exitosamente")
}

/// Register a single client via `/api/agregar_cliente`.
pub async fn add_client(client: &NewClient) -> Result<String, String> {
    let response = Request::post("/api/agregar_cliente")
        .json(client)
        .map_err(|e| format!("Error al preparar la solicitud: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    if !response.ok() {
        return Err(format!("Error HTTP: {}", response.status()));
    }

    let outcome = response
        .json::<ApiOutcome>()
        .await
        .map_err(|e| format!("Error al procesar la respuesta: {}", e))?;

    outcome_message(outcome, "Cliente agregado exitosamente")
}
