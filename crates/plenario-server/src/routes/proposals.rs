//! Proposal detail — upstream data plus tramitação status, latest voting
//! result and topic classification.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use tracing::{error, warn};

use plenario_camara::types::RawVotacao;
use plenario_camara::{map_status, VotacoesQuery};
use plenario_core::{envelope, Error};
use plenario_topics::TopicMatch;

use crate::routes::error_response;
use crate::state::AppState;

const UNAVAILABLE: &str = "Informação não disponível";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/proposals/{id}", get(get_proposal))
}

fn proposal_not_found(id: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(envelope::failure(
            "Proposta não encontrada",
            &format!("Proposta com ID {} não foi encontrada", id),
        )),
    )
}

/// GET /api/proposals/{id} — a non-numeric id is treated as a missing
/// proposal.
async fn get_proposal(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
) -> (StatusCode, Json<Value>) {
    let Ok(id) = raw_id.parse::<i64>() else {
        return proposal_not_found(&raw_id);
    };

    let proposal = match state.camara.get_proposicao(id).await {
        Ok(p) => p,
        Err(Error::NotFound(_)) => return proposal_not_found(&raw_id),
        Err(e) => {
            error!("Error fetching proposal {}: {}", id, e);
            return error_response(&e, "Erro ao buscar dados da proposta");
        }
    };

    // Most recent tramitação entry supplies location and last update.
    let mut current_location = UNAVAILABLE.to_string();
    let mut last_update = proposal.data_apresentacao.clone();
    match state.camara.proposicao_tramitacoes(id).await {
        Ok(tramitacoes) => {
            if let Some(latest) = tramitacoes.first() {
                if let Some(desc) = latest.situacao_descricao() {
                    current_location = desc.to_string();
                }
                if let Some(data_hora) = &latest.data_hora {
                    last_update = Some(data_hora.clone());
                }
            }
        }
        Err(e) => warn!("Could not fetch tramitações for proposal {}: {}", id, e),
    }

    // Latest voting result, best-effort: absent rather than failing.
    let voting_results = match state
        .camara
        .list_votacoes(&VotacoesQuery {
            ordem: Some("DESC"),
            ordenar_por: Some("dataHoraRegistro"),
            id_proposicao: Some(id),
            ..Default::default()
        })
        .await
    {
        Ok(sessions) => sessions.first().map(voting_results_of),
        Err(e) => {
            warn!("Could not fetch voting results for proposal {}: {}", id, e);
            None
        }
    };

    let ementa = proposal.ementa.clone().unwrap_or_default();
    let topics = topics_json(&plenario_topics::categorize(&ementa));

    let status = proposal
        .status_proposicao
        .as_ref()
        .and_then(|s| s.pointer("/tramitacao/situacao/descricao"))
        .and_then(|d| d.as_str())
        .unwrap_or("Status não disponível");

    let autor = proposal.autor.clone().unwrap_or(Value::Null);
    let author = if autor.is_null() {
        json!("Autor não disponível")
    } else {
        autor.clone()
    };
    let author_party = autor
        .pointer("/partido/sigla")
        .and_then(|s| s.as_str())
        .unwrap_or("Partido não disponível");
    let author_state = autor
        .get("uf")
        .and_then(|s| s.as_str())
        .unwrap_or("Estado não disponível");

    let data = json!({
        "id": proposal.id.to_string(),
        "number": proposal.numero,
        "year": proposal.ano,
        "title": proposal.ementa.clone().unwrap_or_else(|| "Título não disponível".to_string()),
        "summary": proposal.ementa.clone().unwrap_or_else(|| "Ementa não disponível".to_string()),
        "type": proposal.sigla_tipo.clone().unwrap_or_else(|| "Tipo não disponível".to_string()),
        "status": status,
        "statusCode": map_status(status),
        "author": author,
        "authorParty": author_party,
        "authorState": author_state,
        "introductionDate": proposal.data_apresentacao,
        "lastUpdate": last_update,
        "currentLocation": current_location,
        "votingResults": voting_results,
        "topics": topics,
    });

    (StatusCode::OK, Json(envelope::success(data)))
}

/// Tallies of the latest voting session on the proposal.
fn voting_results_of(session: &RawVotacao) -> Value {
    let yes = session.votos_sim.unwrap_or(0);
    let no = session.votos_nao.unwrap_or(0);
    let abstentions = session.abstencoes.unwrap_or(0);
    let absences = session.ausencias.unwrap_or(0);
    json!({
        "yes": yes,
        "no": no,
        "abstentions": abstentions,
        "absences": absences,
        "total": yes + no + abstentions + absences,
    })
}

/// Reshape classifier matches for the response body.
pub(crate) fn topics_json(matches: &[TopicMatch]) -> Value {
    let topics: Vec<Value> = matches
        .iter()
        .map(|m| {
            json!({
                "id": m.category.id,
                "name": m.category.name,
                "color": m.category.color,
                "score": m.score,
                "matchedKeywords": m.matched_keywords,
            })
        })
        .collect();
    json!(topics)
}
