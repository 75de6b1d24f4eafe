//! Raw upstream payload shapes.
//!
//! Field names follow the upstream JSON (Portuguese, camelCase). Everything
//! the reshaping code does not strictly need is either omitted or kept as a
//! loose `serde_json::Value` passthrough.

use serde::Deserialize;
use serde_json::Value;

/// Câmara responses wrap their payload in `{ "dados": ... }`.
#[derive(Debug, Deserialize)]
pub struct Dados<T> {
    pub dados: T,
}

/// Roster entry from `/deputados`, also the flat shape of `/deputados/{id}`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDeputy {
    pub id: i64,
    pub nome: String,
    pub sigla_partido: Option<String>,
    pub sigla_uf: Option<String>,
    pub url_foto: Option<String>,
    pub email: Option<String>,
    pub id_legislatura: Option<i64>,
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
}

/// Minimal proposal reference, as embedded in votes and session details.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProposicaoRef {
    pub id: Option<i64>,
    pub numero: Option<i64>,
    pub ano: Option<i64>,
    pub sigla_tipo: Option<String>,
    pub ementa: Option<String>,
}

/// Entry from `/deputados/{id}/votacoes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDeputyVote {
    pub id: String,
    pub voto: Option<String>,
    pub data: Option<String>,
    pub sessao: Option<Value>,
    pub justificativa: Option<String>,
    pub proposicao: Option<RawProposicaoRef>,
}

/// Voting session summary from `/votacoes`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVotacao {
    pub id: String,
    pub data: Option<String>,
    pub data_hora_registro: Option<String>,
    pub descricao: Option<String>,
    pub sigla_orgao: Option<String>,
    pub aprovacao: Option<i64>,
    // Tallies are only present on some listings; detail fetches fill them in.
    pub votos_sim: Option<i64>,
    pub votos_nao: Option<i64>,
    pub abstencoes: Option<i64>,
    pub ausencias: Option<i64>,
}

/// Session detail from `/votacoes/{id}` — affected proposals and tallies.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawVotacaoDetails {
    pub id: String,
    pub proposicoes_afetadas: Option<Vec<RawProposicaoRef>>,
    pub votos_sim: Option<i64>,
    pub votos_nao: Option<i64>,
    pub abstencoes: Option<i64>,
    pub ausencias: Option<i64>,
}

/// Roll-call entry from `/votacoes/{id}/votos`.
#[derive(Debug, Clone, Deserialize)]
pub struct RawVoto {
    #[serde(rename = "tipoVoto")]
    pub tipo_voto: Option<String>,
    #[serde(rename = "dataRegistroVoto")]
    pub data_registro_voto: Option<String>,
    #[serde(rename = "deputado_")]
    pub deputado: RawVotoDeputado,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawVotoDeputado {
    pub id: i64,
}

/// Proposal detail from `/proposicoes/{id}`.
///
/// `status_proposicao` and `autor` vary in shape between endpoints, so they
/// stay as loose values and are navigated with JSON pointers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawProposicao {
    pub id: i64,
    pub numero: Option<i64>,
    pub ano: Option<i64>,
    pub sigla_tipo: Option<String>,
    pub ementa: Option<String>,
    pub data_apresentacao: Option<String>,
    pub status_proposicao: Option<Value>,
    pub autor: Option<Value>,
}

/// Entry from `/proposicoes/{id}/tramitacoes`, most recent first.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTramitacao {
    pub data_hora: Option<String>,
    pub situacao: Option<Value>,
}

impl RawTramitacao {
    /// Description of the current processing status, when present.
    pub fn situacao_descricao(&self) -> Option<&str> {
        self.situacao
            .as_ref()
            .and_then(|s| s.get("descricao"))
            .and_then(|d| d.as_str())
    }
}

/// Party from `/partidos`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParty {
    pub id: i64,
    pub nome: Option<String>,
    pub sigla: Option<String>,
    pub cor: Option<String>,
    pub numero_membros: Option<i64>,
}

/// Federative unit from `/referencias/ufs`. The reference endpoint uses
/// `cod` where the rest of the API uses `id`, and sends it as a string.
#[derive(Debug, Clone, Deserialize)]
pub struct RawUf {
    #[serde(alias = "cod")]
    pub id: Option<Value>,
    pub nome: Option<String>,
    pub sigla: Option<String>,
}

impl RawUf {
    pub fn id_string(&self) -> String {
        match &self.id {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Number(n)) => n.to_string(),
            _ => self.sigla.clone().unwrap_or_default(),
        }
    }
}

// ---------------------------------------------------------------
// Senado shapes — deeply nested legacy envelope
// ---------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct SenadoListResponse {
    #[serde(rename = "ListaParlamentarEmExercicio")]
    pub lista: SenadoLista,
}

#[derive(Debug, Deserialize)]
pub struct SenadoLista {
    #[serde(rename = "Parlamentares")]
    pub parlamentares: SenadoParlamentares,
}

#[derive(Debug, Deserialize)]
pub struct SenadoParlamentares {
    #[serde(rename = "Parlamentar")]
    pub parlamentar: Vec<SenadoParlamentar>,
}

#[derive(Debug, Deserialize)]
pub struct SenadoParlamentar {
    #[serde(rename = "IdentificacaoParlamentar")]
    pub identificacao: SenadoIdentificacao,
    /// Mandate blocks; navigated loosely since the nesting is irregular.
    #[serde(rename = "Mandatos")]
    pub mandatos: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct SenadoIdentificacao {
    #[serde(rename = "CodigoParlamentar")]
    pub codigo: String,
    #[serde(rename = "NomeParlamentar")]
    pub nome: String,
    #[serde(rename = "SiglaPartidoParlamentar")]
    pub partido: Option<String>,
    #[serde(rename = "UfParlamentar")]
    pub uf: Option<String>,
    #[serde(rename = "UrlFotoParlamentar")]
    pub foto: Option<String>,
}

impl SenadoParlamentar {
    /// Start date of the first mandate block, when present.
    pub fn mandate_start(&self) -> Option<&str> {
        self.mandatos
            .as_ref()?
            .pointer("/Mandato/0/PrimeiraLegislaturaDoMandato/DataInicio")?
            .as_str()
    }

    /// End date of the first mandate block, when present.
    pub fn mandate_end(&self) -> Option<&str> {
        self.mandatos
            .as_ref()?
            .pointer("/Mandato/0/SegundaLegislaturaDoMandato/DataFim")?
            .as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserialize_deputy_roster() {
        let body = r#"{
            "dados": [
                {
                    "id": 204554,
                    "nome": "Maria Silva",
                    "siglaPartido": "XYZ",
                    "siglaUf": "SP",
                    "idLegislatura": 57,
                    "urlFoto": "https://example.org/204554.jpg",
                    "email": "dep.maria@camara.leg.br"
                }
            ]
        }"#;
        let parsed: Dados<Vec<RawDeputy>> = serde_json::from_str(body).unwrap();
        let dep = &parsed.dados[0];
        assert_eq!(dep.id, 204554);
        assert_eq!(dep.sigla_partido.as_deref(), Some("XYZ"));
        assert_eq!(dep.id_legislatura, Some(57));
        assert!(dep.data_fim.is_none());
    }

    #[test]
    fn deserialize_votacao_details() {
        let body = r#"{
            "dados": {
                "id": "2265603-43",
                "proposicoesAfetadas": [
                    { "id": 2265603, "numero": 1234, "ano": 2024, "siglaTipo": "PL", "ementa": "Dispõe sobre saúde." }
                ],
                "votosSim": 300,
                "votosNao": 120,
                "abstencoes": 5,
                "ausencias": 88
            }
        }"#;
        let parsed: Dados<RawVotacaoDetails> = serde_json::from_str(body).unwrap();
        let details = parsed.dados;
        assert_eq!(details.id, "2265603-43");
        assert_eq!(details.votos_sim, Some(300));
        let afetadas = details.proposicoes_afetadas.unwrap();
        assert_eq!(afetadas[0].sigla_tipo.as_deref(), Some("PL"));
    }

    #[test]
    fn deserialize_roll_call_vote() {
        let body = r#"{
            "dados": [
                {
                    "tipoVoto": "Sim",
                    "dataRegistroVoto": "2024-05-08T19:21:00",
                    "deputado_": { "id": 204554 }
                }
            ]
        }"#;
        let parsed: Dados<Vec<RawVoto>> = serde_json::from_str(body).unwrap();
        assert_eq!(parsed.dados[0].deputado.id, 204554);
        assert_eq!(parsed.dados[0].tipo_voto.as_deref(), Some("Sim"));
    }

    #[test]
    fn tramitacao_situacao_descricao() {
        let body = r#"{
            "dataHora": "2024-05-08T10:00",
            "situacao": { "descricao": "Pronta para Pauta" }
        }"#;
        let tram: RawTramitacao = serde_json::from_str(body).unwrap();
        assert_eq!(tram.situacao_descricao(), Some("Pronta para Pauta"));
    }

    #[test]
    fn uf_reference_uses_cod_alias() {
        let body = r#"{ "cod": "35", "sigla": "SP", "nome": "São Paulo" }"#;
        let uf: RawUf = serde_json::from_str(body).unwrap();
        assert_eq!(uf.id_string(), "35");

        let no_id = r#"{ "sigla": "RJ", "nome": "Rio de Janeiro" }"#;
        let uf: RawUf = serde_json::from_str(no_id).unwrap();
        assert_eq!(uf.id_string(), "RJ");
    }

    #[test]
    fn deserialize_senado_roster() {
        let body = r#"{
            "ListaParlamentarEmExercicio": {
                "Parlamentares": {
                    "Parlamentar": [
                        {
                            "IdentificacaoParlamentar": {
                                "CodigoParlamentar": "5000",
                                "NomeParlamentar": "João Souza",
                                "SiglaPartidoParlamentar": "ABC",
                                "UfParlamentar": "RS"
                            },
                            "Mandatos": {
                                "Mandato": [
                                    {
                                        "PrimeiraLegislaturaDoMandato": { "DataInicio": "2023-02-01" },
                                        "SegundaLegislaturaDoMandato": { "DataFim": "2031-01-31" }
                                    }
                                ]
                            }
                        }
                    ]
                }
            }
        }"#;
        let parsed: SenadoListResponse = serde_json::from_str(body).unwrap();
        let senator = &parsed.lista.parlamentares.parlamentar[0];
        assert_eq!(senator.identificacao.codigo, "5000");
        assert_eq!(senator.mandate_start(), Some("2023-02-01"));
        assert_eq!(senator.mandate_end(), Some("2031-01-31"));
    }
}
