use chrono::NaiveDate;
use contracts::domain::a001_equipe::aggregate::UsuarioId;
use contracts::domain::a003_escala::aggregate::EscalaTrabalho;
use contracts::domain::a003_escala::requests::EscalaReplicacao;
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Lançamentos de escala do usuário no intervalo [inicio, fim].
pub async fn get_escalas(
    usuario_id: UsuarioId,
    inicio: NaiveDate,
    fim: NaiveDate,
) -> Result<Vec<EscalaTrabalho>, String> {
    let url = format!(
        "/api/escalas?usuarioId={}&dataInicio={}&dataFim={}",
        usuario_id.as_string(),
        inicio.format("%Y-%m-%d"),
        fim.format("%Y-%m-%d")
    );

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

/// Upsert de um lançamento por (usuário, data); devolve o registro gravado.
pub async fn salvar_escala(escala: &EscalaTrabalho) -> Result<EscalaTrabalho, String> {
    let response = Request::post(&api_url("/api/escalas"))
        .json(escala)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
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

/// Replicação em lote: o backend expande o comando em um upsert por data.
pub async fn replicar_escala(replicacao: &EscalaReplicacao) -> Result<(), String> {
    let response = Request::post(&api_url("/api/escalas/replicar"))
        .json(replicacao)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}
