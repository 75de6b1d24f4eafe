//! Deputy roster and per-deputy voting history.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use futures::future::join_all;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{error, warn};

use plenario_camara::types::{RawDeputy, RawDeputyVote};
use plenario_camara::{VotacoesQuery, VoteKind};
use plenario_core::{envelope, Error};

use crate::routes::error_response;
use crate::state::AppState;

/// Legislature currently in office; mandates from it count as current.
const CURRENT_LEGISLATURE: i64 = 57;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/deputies", get(list_deputies))
        .route("/deputies/{id}/votes", get(deputy_votes))
}

/// Query parameters arrive as raw strings; unparseable values fall back to
/// the defaults instead of rejecting the request.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct DeputiesQuery {
    state: Option<String>,
    party: Option<String>,
    limit: Option<String>,
    include_votes: Option<String>,
}

impl DeputiesQuery {
    fn limit(&self) -> u32 {
        self.limit
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(100)
    }

    fn include_votes(&self) -> bool {
        self.include_votes
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(false)
    }
}

/// GET /api/deputies — roster, optionally enriched with recent votes.
async fn list_deputies(
    State(state): State<Arc<AppState>>,
    Query(params): Query<DeputiesQuery>,
) -> (StatusCode, Json<Value>) {
    let limit = params.limit();
    let include_votes = params.include_votes();

    let roster = match state
        .camara
        .list_deputies(params.state.as_deref(), params.party.as_deref(), limit)
        .await
    {
        Ok(r) => r,
        Err(e) => {
            error!("Error fetching deputies: {}", e);
            return error_response(&e, "Erro ao buscar dados dos deputados");
        }
    };

    let deputies: Vec<Value> = if include_votes {
        // Fan out over the roster; a failed vote fetch leaves that deputy
        // without votes instead of failing the whole response.
        let camara = &state.camara;
        join_all(roster.iter().map(|dep| async move {
            let votes = match camara.deputy_votes(dep.id, 50).await {
                Ok(v) => v,
                Err(e) => {
                    warn!("Failed to fetch votes for deputy {}: {}", dep.id, e);
                    Vec::new()
                }
            };
            reshape_deputy(dep, &votes)
        }))
        .await
    } else {
        roster.iter().map(|dep| reshape_deputy(dep, &[])).collect()
    };

    let pagination = json!({
        "page": 1,
        "limit": limit,
        "total": deputies.len(),
        "totalPages": 1,
    });
    let mut body = envelope::success_paginated(json!(deputies), pagination);
    body["includeVotes"] = json!(include_votes);
    (StatusCode::OK, Json(body))
}

fn reshape_deputy(dep: &RawDeputy, raw_votes: &[RawDeputyVote]) -> Value {
    let votes: Vec<Value> = raw_votes.iter().map(reshape_vote).collect();
    let kinds: Vec<VoteKind> = raw_votes
        .iter()
        .map(|v| VoteKind::from_upstream(v.voto.as_deref().unwrap_or("")))
        .collect();

    json!({
        "id": dep.id.to_string(),
        "name": dep.nome,
        "party": dep.sigla_partido,
        "state": dep.sigla_uf,
        "house": "deputado",
        "photo": dep.url_foto,
        "email": dep.email,
        "mandate": {
            "legislature": dep.id_legislatura,
            "isCurrent": dep.id_legislatura == Some(CURRENT_LEGISLATURE),
        },
        "votes": votes,
        "votingStats": voting_stats(&kinds),
    })
}

fn reshape_vote(raw: &RawDeputyVote) -> Value {
    let proposal = raw.proposicao.as_ref();
    json!({
        "id": raw.id,
        "proposalId": proposal.and_then(|p| p.id).map(|i| i.to_string()),
        "proposalTitle": proposal
            .and_then(|p| p.ementa.clone())
            .unwrap_or_else(|| "Votação sem título".to_string()),
        "proposalType": proposal
            .and_then(|p| p.sigla_tipo.clone())
            .unwrap_or_else(|| "N/A".to_string()),
        "vote": VoteKind::from_upstream(raw.voto.as_deref().unwrap_or("")),
        "date": raw.data,
        "session": raw.sessao,
        "justification": raw.justificativa,
    })
}

/// Aggregate vote counts. Attendance counts everything but absences.
fn voting_stats(kinds: &[VoteKind]) -> Value {
    let total = kinds.len();
    let yes = kinds.iter().filter(|k| **k == VoteKind::Sim).count();
    let no = kinds.iter().filter(|k| **k == VoteKind::Nao).count();
    let abstentions = kinds.iter().filter(|k| **k == VoteKind::Abstencao).count();
    let absences = kinds.iter().filter(|k| **k == VoteKind::Ausente).count();

    let attendance_rate = if total > 0 {
        (total - absences) as f64 / total as f64 * 100.0
    } else {
        0.0
    };

    json!({
        "totalVotes": total,
        "yesVotes": yes,
        "noVotes": no,
        "abstentions": abstentions,
        "absences": absences,
        "attendanceRate": attendance_rate,
    })
}

/// As `voting_stats`, plus per-kind percentages for the profile page.
fn roll_call_stats(kinds: &[VoteKind]) -> Value {
    let mut stats = voting_stats(kinds);
    let total = kinds.len();
    let pct = |count: usize| {
        if total > 0 {
            count as f64 / total as f64 * 100.0
        } else {
            0.0
        }
    };
    let yes = kinds.iter().filter(|k| **k == VoteKind::Sim).count();
    let no = kinds.iter().filter(|k| **k == VoteKind::Nao).count();
    let abstentions = kinds.iter().filter(|k| **k == VoteKind::Abstencao).count();

    stats["yesPercentage"] = json!(pct(yes));
    stats["noPercentage"] = json!(pct(no));
    stats["abstentionPercentage"] = json!(pct(abstentions));
    stats
}

#[derive(Deserialize)]
struct VotesQuery {
    limit: Option<String>,
    offset: Option<String>,
}

impl VotesQuery {
    fn limit(&self) -> usize {
        self.limit
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(50)
            .max(1)
    }

    fn offset(&self) -> usize {
        self.offset
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    }
}

fn deputy_not_found(id: &str) -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(envelope::failure(
            "Deputado não encontrado",
            &format!("Deputado com ID {} não foi encontrado", id),
        )),
    )
}

/// GET /api/deputies/{id}/votes — the deputy's votes in recent roll-call
/// sessions, with naive slice pagination. A non-numeric id is treated as a
/// missing deputy.
async fn deputy_votes(
    State(state): State<Arc<AppState>>,
    Path(raw_id): Path<String>,
    Query(params): Query<VotesQuery>,
) -> (StatusCode, Json<Value>) {
    let limit = params.limit();
    let offset = params.offset();

    let Ok(id) = raw_id.parse::<i64>() else {
        return deputy_not_found(&raw_id);
    };

    let deputy = match state.camara.get_deputy(id).await {
        Ok(d) => d,
        Err(Error::NotFound(_)) => return deputy_not_found(&raw_id),
        Err(e) => return error_response(&e, "Erro ao buscar deputado"),
    };

    // Recent roll-call sessions; the deputy's vote is extracted per session.
    let sessions = match state
        .camara
        .list_votacoes(&VotacoesQuery {
            itens: Some(100),
            ordem: Some("DESC"),
            ordenar_por: Some("data"),
            ..Default::default()
        })
        .await
    {
        Ok(s) => s,
        Err(e) => return error_response(&e, "Erro ao buscar votações"),
    };

    let mut collected: Vec<Value> = Vec::new();
    let mut kinds: Vec<VoteKind> = Vec::new();

    for session in &sessions {
        if collected.len() >= limit {
            break;
        }

        let (details, votos) = tokio::join!(
            state.camara.votacao_details(&session.id),
            state.camara.votacao_votos(&session.id),
        );

        let votos = match votos {
            Ok(v) => v,
            Err(e) => {
                warn!("Erro ao buscar votos da sessão {}: {}", session.id, e);
                continue;
            }
        };

        let Some(vote) = votos.iter().find(|v| v.deputado.id == id) else {
            continue;
        };

        let proposal = details
            .ok()
            .and_then(|d| d.proposicoes_afetadas)
            .and_then(|p| p.into_iter().next());

        let kind = VoteKind::from_upstream(vote.tipo_voto.as_deref().unwrap_or(""));
        kinds.push(kind);

        collected.push(json!({
            "id": format!("{}-{}", session.id, id),
            "sessionId": session.id,
            "proposalId": proposal.as_ref().and_then(|p| p.id).map(|i| i.to_string()),
            "proposalNumber": proposal.as_ref().and_then(|p| p.numero),
            "proposalYear": proposal.as_ref().and_then(|p| p.ano),
            "proposalTitle": session
                .descricao
                .clone()
                .unwrap_or_else(|| "Votação sem título".to_string()),
            "proposalType": proposal
                .as_ref()
                .and_then(|p| p.sigla_tipo.clone())
                .unwrap_or_else(|| "N/A".to_string()),
            "vote": kind,
            "date": session.data,
            "session": session.sigla_orgao,
            // Roll-call data carries no individual justification.
            "justification": Value::Null,
            "rollCall": true,
            "voteTime": vote.data_registro_voto,
        }));
    }

    let total = collected.len();
    let start = offset.min(total);
    let end = (offset + limit).min(total);
    let paginated = &collected[start..end];

    let deputy_info = json!({
        "id": deputy.id.to_string(),
        "name": deputy.nome,
        "party": deputy.sigla_partido,
        "state": deputy.sigla_uf,
        "house": "deputado",
        "photo": deputy.url_foto,
        "email": deputy.email,
        "mandate": {
            "startDate": deputy.data_inicio,
            "endDate": deputy.data_fim,
            "isCurrent": deputy.data_fim.is_none(),
        },
    });

    let data = json!({
        "deputy": deputy_info,
        "votes": paginated,
        "votingStats": roll_call_stats(&kinds),
    });
    let pagination = json!({
        "page": offset / limit + 1,
        "limit": limit,
        "offset": offset,
        "total": total,
        "hasMore": end < total,
    });

    (
        StatusCode::OK,
        Json(envelope::success_paginated(data, pagination)),
    )
}
