//! Câmara dos Deputados API client.

use std::time::Duration;

use plenario_core::{Error, Result};
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::types::{
    Dados, RawDeputy, RawDeputyVote, RawParty, RawProposicao, RawTramitacao, RawUf, RawVotacao,
    RawVotacaoDetails, RawVoto,
};

/// Query parameters for `/votacoes`.
#[derive(Debug, Clone, Default)]
pub struct VotacoesQuery {
    pub data_inicio: Option<String>,
    pub data_fim: Option<String>,
    pub ordem: Option<&'static str>,
    pub ordenar_por: Option<&'static str>,
    pub itens: Option<u32>,
    pub id_proposicao: Option<i64>,
}

impl VotacoesQuery {
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(d) = &self.data_inicio {
            params.push(("dataInicio", d.clone()));
        }
        if let Some(d) = &self.data_fim {
            params.push(("dataFim", d.clone()));
        }
        if let Some(o) = self.ordem {
            params.push(("ordem", o.to_string()));
        }
        if let Some(o) = self.ordenar_por {
            params.push(("ordenarPor", o.to_string()));
        }
        if let Some(n) = self.itens {
            params.push(("itens", n.to_string()));
        }
        if let Some(id) = self.id_proposicao {
            params.push(("idProposicao", id.to_string()));
        }
        params
    }
}

/// Thin typed client over the Câmara REST API. Every call hits upstream;
/// nothing is cached.
pub struct CamaraClient {
    http: Client,
    base_url: String,
}

impl CamaraClient {
    pub fn new(base_url: &str, timeout_secs: u64, user_agent: &str) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent(user_agent)
            .build()
            .map_err(|e| Error::Http(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// GET `{base}{path}` and unwrap the `dados` envelope.
    async fn get_dados<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("GET {} {:?}", url, params);

        let response = self
            .http
            .get(&url)
            .query(params)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        match response.status() {
            s if s.is_success() => response
                .json::<Dados<T>>()
                .await
                .map(|d| d.dados)
                .map_err(|e| Error::Decode(e.to_string())),
            StatusCode::NOT_FOUND => Err(Error::NotFound(url)),
            s => Err(Error::Upstream {
                status: s.as_u16(),
                url,
            }),
        }
    }

    /// GET `/deputados` with optional state/party filters.
    pub async fn list_deputies(
        &self,
        state: Option<&str>,
        party: Option<&str>,
        limit: u32,
    ) -> Result<Vec<RawDeputy>> {
        let mut params = Vec::new();
        if let Some(uf) = state {
            params.push(("siglaUf", uf.to_string()));
        }
        if let Some(p) = party {
            params.push(("siglaPartido", p.to_string()));
        }
        params.push(("itens", limit.to_string()));
        self.get_dados("/deputados", &params).await
    }

    /// GET `/deputados/{id}`.
    pub async fn get_deputy(&self, id: i64) -> Result<RawDeputy> {
        self.get_dados(&format!("/deputados/{}", id), &[]).await
    }

    /// GET `/deputados/{id}/votacoes`.
    pub async fn deputy_votes(&self, id: i64, itens: u32) -> Result<Vec<RawDeputyVote>> {
        self.get_dados(
            &format!("/deputados/{}/votacoes", id),
            &[("itens", itens.to_string())],
        )
        .await
    }

    /// GET `/votacoes`.
    pub async fn list_votacoes(&self, query: &VotacoesQuery) -> Result<Vec<RawVotacao>> {
        self.get_dados("/votacoes", &query.to_params()).await
    }

    /// GET `/votacoes/{id}`.
    pub async fn votacao_details(&self, id: &str) -> Result<RawVotacaoDetails> {
        self.get_dados(&format!("/votacoes/{}", id), &[]).await
    }

    /// GET `/votacoes/{id}/votos` — the individual roll-call votes.
    pub async fn votacao_votos(&self, id: &str) -> Result<Vec<RawVoto>> {
        self.get_dados(&format!("/votacoes/{}/votos", id), &[]).await
    }

    /// GET `/proposicoes/{id}`.
    pub async fn get_proposicao(&self, id: i64) -> Result<RawProposicao> {
        self.get_dados(&format!("/proposicoes/{}", id), &[]).await
    }

    /// GET `/proposicoes/{id}/tramitacoes`, most recent first.
    pub async fn proposicao_tramitacoes(&self, id: i64) -> Result<Vec<RawTramitacao>> {
        self.get_dados(&format!("/proposicoes/{}/tramitacoes", id), &[])
            .await
    }

    /// GET `/proposicoes` presented from a given date.
    pub async fn list_proposicoes(&self, data_inicio: &str, itens: u32) -> Result<Vec<RawProposicao>> {
        self.get_dados(
            "/proposicoes",
            &[
                ("dataInicio", data_inicio.to_string()),
                ("ordem", "DESC".to_string()),
                ("ordenarPor", "dataApresentacao".to_string()),
                ("itens", itens.to_string()),
            ],
        )
        .await
    }

    /// GET `/partidos`.
    pub async fn list_parties(&self) -> Result<Vec<RawParty>> {
        self.get_dados("/partidos", &[]).await
    }

    /// GET `/referencias/ufs`.
    pub async fn list_states(&self) -> Result<Vec<RawUf>> {
        self.get_dados("/referencias/ufs", &[]).await
    }
}
