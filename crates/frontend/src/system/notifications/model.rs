use gloo_net::http::Request;
use serde::Deserialize;

use crate::shared::api_utils::api_url;

#[derive(Debug, Deserialize)]
struct ContagemResponse {
    total: u32,
}

/// Total de notificações não lidas do usuário autenticado.
pub async fn get_nao_lidas() -> Result<u32, String> {
    let response = Request::get(&api_url("/api/notificacoes/nao-lidas"))
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    let contagem: ContagemResponse = response
        .json()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))?;
    Ok(contagem.total)
}
