//! Response-shape tests — validates that the JSON envelopes match what the
//! dashboard pages expect.
//!
//! These assert over representative response bodies (no HTTP server needed)
//! to pin field names and types.

/// Success envelope: { success, data, source, timestamp }.
#[test]
fn test_success_envelope_shape() {
    let envelope = plenario_core::envelope::success(serde_json::json!([]));
    assert_eq!(envelope["success"], true);
    assert!(envelope["data"].is_array());
    assert_eq!(envelope["source"], "Câmara dos Deputados API");
    assert!(envelope["timestamp"].is_string());
}

/// Failure envelope: { success, error, message, timestamp }.
#[test]
fn test_failure_envelope_shape() {
    let envelope =
        plenario_core::envelope::failure("Erro ao buscar dados dos deputados", "status 500");
    assert_eq!(envelope["success"], false);
    assert!(envelope["error"].is_string());
    assert!(envelope["message"].is_string());
    assert!(envelope["timestamp"].is_string());
}

/// Deputy roster entry as rendered by the deputies page.
#[test]
fn test_deputy_shape() {
    let deputy = serde_json::json!({
        "id": "204554",
        "name": "Maria Silva",
        "party": "XYZ",
        "state": "SP",
        "house": "deputado",
        "photo": "https://example.org/204554.jpg",
        "email": "dep.maria@camara.leg.br",
        "mandate": { "legislature": 57, "isCurrent": true },
        "votes": [],
        "votingStats": {
            "totalVotes": 0,
            "yesVotes": 0,
            "noVotes": 0,
            "abstentions": 0,
            "absences": 0,
            "attendanceRate": 0.0,
        },
    });

    assert!(deputy["id"].is_string());
    assert_eq!(deputy["house"], "deputado");
    assert!(deputy["mandate"]["isCurrent"].is_boolean());
    assert!(deputy["votes"].is_array());
    assert!(deputy["votingStats"]["attendanceRate"].is_number());
}

/// Roster pagination block: { page, limit, total, totalPages }.
#[test]
fn test_roster_pagination_shape() {
    let envelope = plenario_core::envelope::success_paginated(
        serde_json::json!([]),
        serde_json::json!({ "page": 1, "limit": 100, "total": 0, "totalPages": 1 }),
    );
    assert!(envelope["pagination"]["page"].is_number());
    assert!(envelope["pagination"]["limit"].is_number());
    assert!(envelope["pagination"]["totalPages"].is_number());
}

/// Deputy votes response: { deputy, votes, votingStats } with offset
/// pagination { page, limit, offset, total, hasMore }.
#[test]
fn test_deputy_votes_response_shape() {
    let data = serde_json::json!({
        "deputy": {
            "id": "204554",
            "name": "Maria Silva",
            "mandate": { "startDate": null, "endDate": null, "isCurrent": true },
        },
        "votes": [
            {
                "id": "2265603-43-204554",
                "sessionId": "2265603-43",
                "proposalId": "2265603",
                "proposalNumber": 1234,
                "proposalYear": 2024,
                "proposalTitle": "Votação nominal",
                "proposalType": "PL",
                "vote": "sim",
                "date": "2024-05-08",
                "session": "PLEN",
                "justification": null,
                "rollCall": true,
                "voteTime": "2024-05-08T19:21:00",
            }
        ],
        "votingStats": {
            "totalVotes": 1,
            "yesVotes": 1,
            "noVotes": 0,
            "abstentions": 0,
            "absences": 0,
            "attendanceRate": 100.0,
            "yesPercentage": 100.0,
            "noPercentage": 0.0,
            "abstentionPercentage": 0.0,
        },
    });

    let vote = &data["votes"][0];
    assert!(vote["sessionId"].is_string());
    assert_eq!(vote["rollCall"], true);
    assert!(data["votingStats"]["yesPercentage"].is_number());

    let pagination = serde_json::json!({
        "page": 1, "limit": 50, "offset": 0, "total": 1, "hasMore": false,
    });
    assert!(pagination["offset"].is_number());
    assert!(pagination["hasMore"].is_boolean());
}

/// Proposal detail shape, including the attached topic classification.
#[test]
fn test_proposal_response_shape() {
    let proposal = serde_json::json!({
        "id": "2265603",
        "number": 1234,
        "year": 2024,
        "title": "Dispõe sobre a saúde pública.",
        "summary": "Dispõe sobre a saúde pública.",
        "type": "PL",
        "status": "Pronta para Pauta",
        "statusCode": "em_tramitacao",
        "author": "Deputada Maria Silva",
        "authorParty": "Partido não disponível",
        "authorState": "Estado não disponível",
        "introductionDate": "2024-01-10",
        "lastUpdate": "2024-05-08T10:00",
        "currentLocation": "Plenário",
        "votingResults": {
            "yes": 300, "no": 120, "abstentions": 5, "absences": 88, "total": 513,
        },
        "topics": [
            { "id": "saude", "name": "Saúde", "color": "red", "score": 5.0,
              "matchedKeywords": ["saúde"] }
        ],
    });

    assert!(proposal["id"].is_string());
    assert!(proposal["votingResults"]["total"].is_number());
    assert!(proposal["topics"].is_array());
    let topic = &proposal["topics"][0];
    assert!(topic["id"].is_string());
    assert!(topic["score"].is_number());
    assert!(topic["matchedKeywords"].is_array());
}

/// Daily dashboard data: { date, votingSessions, proposals, summary,
/// lastUpdated }.
#[test]
fn test_daily_dashboard_shape() {
    let data = serde_json::json!({
        "date": "2026-08-20",
        "votingSessions": [
            {
                "id": "2265603-43",
                "data": "2026-08-20",
                "dataHoraRegistro": "2026-08-20T19:21:00",
                "descricao": "Votação nominal",
                "siglaOrgao": "PLEN",
                "aprovacao": 1,
                "status": "Aprovada",
                "proposicoesAfetadas": [
                    { "id": 2265603, "numero": 1234, "ano": 2024, "siglaTipo": "PL",
                      "ementa": "Dispõe sobre..." }
                ],
                "votosSim": 300,
                "votosNao": 120,
                "abstencoes": 5,
                "ausencias": 88,
            }
        ],
        "proposals": [],
        "summary": {
            "totalSessions": 1,
            "totalProposals": 0,
            "completedVotes": 1,
            "pendingVotes": 0,
        },
        "lastUpdated": "2026-08-20T20:00:00+00:00",
    });

    assert!(data["votingSessions"].is_array());
    let session = &data["votingSessions"][0];
    assert!(session["status"].is_string());
    assert!(session["proposicoesAfetadas"].is_array());
    assert!(data["summary"]["completedVotes"].is_number());
    assert!(data["lastUpdated"].is_string());
}

/// Senator entry keeps the shared politician shape.
#[test]
fn test_senator_shape() {
    let senator = serde_json::json!({
        "id": "5000",
        "name": "João Souza",
        "party": "ABC",
        "state": "RS",
        "house": "senador",
        "photo": null,
        "mandate": { "startDate": "2023-02-01", "endDate": "2031-01-31", "isCurrent": true },
    });

    assert_eq!(senator["house"], "senador");
    assert!(senator["mandate"]["isCurrent"].is_boolean());
}

/// Party and state reference shapes.
#[test]
fn test_reference_shapes() {
    let party = serde_json::json!({
        "id": "36844", "name": "Partido Exemplo", "acronym": "PEX",
        "color": null, "membersCount": 12,
    });
    assert!(party["id"].is_string());
    assert!(party["acronym"].is_string());

    let state = serde_json::json!({
        "id": "35", "name": "São Paulo", "acronym": "SP", "region": "sudeste",
        "population": 0, "deputiesCount": 0, "senatorsCount": 3,
    });
    assert_eq!(state["region"], "sudeste");
    assert_eq!(state["senatorsCount"], 3);
}
