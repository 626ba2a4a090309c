use contracts::domain::a001_equipe::aggregate::{Equipe, EquipeId, Usuario};
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Equipes visíveis para o usuário, com filtro opcional por nome.
pub async fn get_equipes(filtro: Option<&str>) -> Result<Vec<Equipe>, String> {
    let mut url = String::from("/api/equipes");
    if let Some(filtro) = filtro.filter(|f| !f.trim().is_empty()) {
        url.push_str(&format!("?nome={}", urlencoding::encode(filtro.trim())));
    }

    let response = Request::get(&api_url(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}

/// Membros de uma equipe.
pub async fn get_usuarios(equipe_id: EquipeId) -> Result<Vec<Usuario>, String> {
    let url = format!("/api/equipes/{}/usuarios", equipe_id.as_string());

    let response = Request::get(&api_url(&url))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
