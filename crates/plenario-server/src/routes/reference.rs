//! Reference data (parties, states) and liveness.

use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::error;

use plenario_camara::region_of;
use plenario_core::envelope;

use crate::routes::error_response;
use crate::state::AppState;

/// Every state elects exactly three senators.
const SENATORS_PER_STATE: u32 = 3;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/parties", get(list_parties))
        .route("/states", get(list_states))
        .route("/health", get(health))
}

/// GET /api/parties
async fn list_parties(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    let parties = match state.camara.list_parties().await {
        Ok(p) => p,
        Err(e) => {
            error!("Error fetching parties: {}", e);
            return error_response(&e, "Erro ao buscar dados dos partidos");
        }
    };

    let data: Vec<Value> = parties
        .iter()
        .map(|party| {
            json!({
                "id": party.id.to_string(),
                "name": party.nome,
                "acronym": party.sigla,
                "color": party.cor,
                "membersCount": party.numero_membros,
            })
        })
        .collect();

    (StatusCode::OK, Json(envelope::success(json!(data))))
}

/// GET /api/states
async fn list_states(State(state): State<Arc<AppState>>) -> (StatusCode, Json<Value>) {
    let states = match state.camara.list_states().await {
        Ok(s) => s,
        Err(e) => {
            error!("Error fetching states: {}", e);
            return error_response(&e, "Erro ao buscar dados dos estados");
        }
    };

    let data: Vec<Value> = states
        .iter()
        .map(|uf| {
            let sigla = uf.sigla.clone().unwrap_or_default();
            json!({
                "id": uf.id_string(),
                "name": uf.nome,
                "acronym": sigla,
                "region": region_of(&sigla),
                "population": 0,
                "deputiesCount": 0,
                "senatorsCount": SENATORS_PER_STATE,
            })
        })
        .collect();

    (StatusCode::OK, Json(envelope::success(json!(data))))
}

/// GET /api/health — liveness only, no upstream call.
async fn health(State(state): State<Arc<AppState>>) -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "plenario",
        "upstream": {
            "camara": state.config.camara_base_url,
            "senado": state.config.senado_base_url,
        },
    }))
}
