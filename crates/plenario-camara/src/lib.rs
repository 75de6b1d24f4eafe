//! Plenário Câmara — typed clients for the legislative open-data APIs.
//!
//! Every fetch goes straight to the upstream API; there is no cache or
//! persistence in between. Responses are deserialized into thin DTOs that
//! mirror the upstream field names and are reshaped by the route handlers.

pub mod client;
pub mod map;
pub mod senado;
pub mod types;

pub use client::{CamaraClient, VotacoesQuery};
pub use map::{map_status, region_of, session_status, VoteKind};
pub use senado::SenadoClient;
