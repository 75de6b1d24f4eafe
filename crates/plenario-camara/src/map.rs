//! Mapping tables between upstream vocabulary and the dashboard's.

use serde::Serialize;

/// Normalized roll-call vote. Upstream spells votes half a dozen ways;
/// obstruction and "Artigo 17" count as abstentions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum VoteKind {
    Sim,
    Nao,
    Abstencao,
    Ausente,
}

impl VoteKind {
    pub fn from_upstream(raw: &str) -> Self {
        match raw {
            "Sim" | "sim" => VoteKind::Sim,
            "Não" | "nao" => VoteKind::Nao,
            "Abstenção" | "abstencao" | "Obstrução" | "Artigo 17" => VoteKind::Abstencao,
            _ => VoteKind::Ausente,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VoteKind::Sim => "sim",
            VoteKind::Nao => "nao",
            VoteKind::Abstencao => "abstencao",
            VoteKind::Ausente => "ausente",
        }
    }
}

/// Map an upstream proposal situation to the dashboard status vocabulary.
pub fn map_status(raw: &str) -> &'static str {
    match raw {
        "Em Tramitação" => "em_tramitacao",
        "Aprovada" => "aprovada",
        "Rejeitada" => "rejeitada",
        "Vetada" => "vetada",
        "Arquivada" => "arquivada",
        _ => "em_tramitacao",
    }
}

/// Voting-session status derived from the `aprovacao` flag.
pub fn session_status(aprovacao: Option<i64>) -> &'static str {
    match aprovacao {
        Some(1) => "Aprovada",
        Some(0) => "Rejeitada",
        _ => "Em andamento",
    }
}

/// Geographic region of a federative unit.
pub fn region_of(uf: &str) -> &'static str {
    match uf {
        "AC" | "AP" | "AM" | "PA" | "RO" | "RR" | "TO" => "norte",
        "AL" | "BA" | "CE" | "MA" | "PB" | "PE" | "PI" | "RN" | "SE" => "nordeste",
        "DF" | "GO" | "MT" | "MS" => "centro-oeste",
        "ES" | "MG" | "RJ" | "SP" => "sudeste",
        "PR" | "RS" | "SC" => "sul",
        _ => "sudeste",
    }
}
