//! Senate roster, reshaped to the shared politician shape.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::error;

use plenario_core::envelope;

use crate::routes::error_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/senators", get(list_senators))
}

/// GET /api/senators — senators currently in office.
async fn list_senators(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    let senators = match state.senado.list_senators().await {
        Ok(s) => s,
        Err(e) => {
            error!("Error fetching senators: {}", e);
            return error_response(&e, "Erro ao buscar dados dos senadores");
        }
    };

    let data: Vec<Value> = senators
        .iter()
        .map(|senator| {
            json!({
                "id": senator.identificacao.codigo,
                "name": senator.identificacao.nome,
                "party": senator.identificacao.partido,
                "state": senator.identificacao.uf,
                "house": "senador",
                "photo": senator.identificacao.foto,
                "mandate": {
                    "startDate": senator.mandate_start(),
                    "endDate": senator.mandate_end(),
                    "isCurrent": true,
                },
            })
        })
        .collect();

    (StatusCode::OK, Json(envelope::success(json!(data))))
}
