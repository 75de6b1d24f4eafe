//! Daily voting-activity dashboard.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use chrono::{NaiveDate, Utc};
use futures::future::join_all;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{info, warn};

use plenario_camara::types::{RawProposicao, RawProposicaoRef, RawVotacao};
use plenario_camara::{session_status, CamaraClient, VotacoesQuery};
use plenario_core::envelope;

use crate::routes::error_response;
use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/dashboard/daily", get(get_daily_dashboard))
}

#[derive(Deserialize)]
struct DailyQuery {
    date: Option<String>,
}

/// GET /api/dashboard/daily — the day's voting sessions (enhanced with
/// per-session detail) and freshly presented proposals. Dates are UTC,
/// which is what the upstream API expects.
async fn get_daily_dashboard(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DailyQuery>,
) -> (StatusCode, Json<Value>) {
    let date = match &params.date {
        Some(raw) => match NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            Ok(d) => d,
            Err(_) => {
                return (
                    StatusCode::BAD_REQUEST,
                    Json(envelope::failure(
                        "Data inválida",
                        &format!("Data {:?} não está no formato YYYY-MM-DD", raw),
                    )),
                );
            }
        },
        None => Utc::now().date_naive(),
    };
    let date_str = date.format("%Y-%m-%d").to_string();

    info!("Fetching daily dashboard for date: {} (UTC)", date_str);

    let sessions = match state
        .camara
        .list_votacoes(&VotacoesQuery {
            data_inicio: Some(date_str.clone()),
            data_fim: Some(date_str.clone()),
            ordem: Some("DESC"),
            ordenar_por: Some("dataHoraRegistro"),
            itens: Some(50),
            ..Default::default()
        })
        .await
    {
        Ok(s) => s,
        Err(e) => return error_response(&e, "Erro ao buscar dados do dashboard diário"),
    };

    // Enhance each session with its detail (affected proposals, tallies).
    // Failures keep the un-enhanced session.
    let camara = &state.camara;
    let voting_sessions: Vec<Value> = join_all(
        sessions
            .iter()
            .map(|session| enhance_session(camara, session)),
    )
    .await;

    // Proposals presented on the day; tolerated as empty on failure.
    let proposals: Vec<Value> = match state.camara.list_proposicoes(&date_str, 20).await {
        Ok(list) => list.iter().map(reshape_daily_proposal).collect(),
        Err(e) => {
            warn!("Could not fetch proposals for {}: {}", date_str, e);
            Vec::new()
        }
    };

    let statuses: Vec<&str> = sessions.iter().map(|s| session_status(s.aprovacao)).collect();
    let summary = summarize(&statuses, proposals.len());

    let data = json!({
        "date": date_str,
        "votingSessions": voting_sessions,
        "proposals": proposals,
        "summary": summary,
        "lastUpdated": Utc::now().to_rfc3339(),
    });

    (StatusCode::OK, Json(envelope::success(data)))
}

async fn enhance_session(camara: &CamaraClient, session: &RawVotacao) -> Value {
    let mut value = json!({
        "id": session.id,
        "data": session.data,
        "dataHoraRegistro": session.data_hora_registro,
        "descricao": session.descricao,
        "siglaOrgao": session.sigla_orgao,
        "aprovacao": session.aprovacao,
        "status": session_status(session.aprovacao),
    });

    match camara.votacao_details(&session.id).await {
        Ok(details) => {
            let afetadas: Vec<Value> = details
                .proposicoes_afetadas
                .unwrap_or_default()
                .iter()
                .map(proposicao_ref_json)
                .collect();
            value["proposicoesAfetadas"] = json!(afetadas);
            value["votosSim"] = json!(details.votos_sim);
            value["votosNao"] = json!(details.votos_nao);
            value["abstencoes"] = json!(details.abstencoes);
            value["ausencias"] = json!(details.ausencias);
        }
        Err(e) => {
            warn!("Error fetching details for session {}: {}", session.id, e);
        }
    }

    value
}

fn proposicao_ref_json(proposal: &RawProposicaoRef) -> Value {
    json!({
        "id": proposal.id,
        "numero": proposal.numero,
        "ano": proposal.ano,
        "siglaTipo": proposal.sigla_tipo,
        "ementa": proposal.ementa,
    })
}

fn reshape_daily_proposal(proposal: &RawProposicao) -> Value {
    let ementa = proposal.ementa.clone().unwrap_or_default();
    let topics = super::proposals::topics_json(&plenario_topics::categorize(&ementa));
    json!({
        "id": proposal.id.to_string(),
        "numero": proposal.numero,
        "ano": proposal.ano,
        "siglaTipo": proposal.sigla_tipo,
        "ementa": proposal.ementa,
        "dataApresentacao": proposal.data_apresentacao,
        "statusProposicao": proposal.status_proposicao,
        "autor": proposal.autor,
        "topics": topics,
    })
}

/// Completed votes are the decided sessions; everything still "Em andamento"
/// is pending.
fn summarize(statuses: &[&str], total_proposals: usize) -> Value {
    let completed = statuses
        .iter()
        .filter(|s| **s == "Aprovada" || **s == "Rejeitada")
        .count();
    let pending = statuses.iter().filter(|s| **s == "Em andamento").count();

    json!({
        "totalSessions": statuses.len(),
        "totalProposals": total_proposals,
        "completedVotes": completed,
        "pendingVotes": pending,
    })
}
