use chrono::NaiveDate;
use contracts::domain::a001_equipe::aggregate::{EquipeId, UsuarioId};
use contracts::domain::a002_checklist::aggregate::{Board, Card};
use contracts::domain::a002_checklist::requests::{MoverCardRequest, RegistroChecklistRequest};
use contracts::domain::common::AggregateId;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Estrutura completa de boards/cards/itens da equipe para uma data.
///
/// O backend devolve `marcado` e `status` já calculados para a data
/// consultada; é a fonte de verdade de cada carga da visão.
pub async fn get_checklist_do_dia(
    equipe_id: EquipeId,
    data: NaiveDate,
    usuario_alvo: Option<UsuarioId>,
) -> Result<Vec<Board>, String> {
    let mut url = format!(
        "/api/checklist/dia?equipeId={}&data={}",
        equipe_id.as_string(),
        data.format("%Y-%m-%d")
    );
    if let Some(usuario) = usuario_alvo {
        url.push_str(&format!("&usuarioId={}", usuario.as_string()));
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

/// Grava o log de marcação de um item para a data de referência.
pub async fn registrar_acao(registro: &RegistroChecklistRequest) -> Result<(), String> {
    let response = Request::post(&api_url("/api/checklist/registro"))
        .json(registro)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

/// Persiste os campos estruturais de um card (título, descrição, janela).
pub async fn atualizar_card(card: &Card) -> Result<(), String> {
    let response = Request::put(&api_url("/api/checklist/cards"))
        .json(card)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

/// Persiste a ordem completa dos boards da equipe.
pub async fn reordenar_boards(boards: &[Board]) -> Result<(), String> {
    let response = Request::put(&api_url("/api/checklist/boards/ordem"))
        .json(&boards)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

/// Persiste a ordem dos cards de um board.
pub async fn reordenar_cards(cards: &[Card]) -> Result<(), String> {
    let response = Request::put(&api_url("/api/checklist/cards/ordem"))
        .json(&cards)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}

/// Transfere a propriedade de um card para outro board.
pub async fn mover_card(request: &MoverCardRequest) -> Result<(), String> {
    let response = Request::put(&api_url("/api/checklist/cards/mover"))
        .json(request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }
    Ok(())
}
