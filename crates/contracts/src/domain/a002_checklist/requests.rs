use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::aggregate::{BoardId, CardId, ItemId};

/// Registro de marcação/desmarcação de um item em um dia de referência.
///
/// É a unidade de verdade persistida para conclusão de itens: o mesmo item
/// pode estar marcado em um dia e desmarcado em outro, de forma independente.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistroChecklistRequest {
    pub item_id: ItemId,
    pub data_referencia: NaiveDate,
    pub valor: bool,
}

/// Transferência de propriedade de um card para outro board.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoverCardRequest {
    pub card_id: CardId,
    pub board_destino_id: BoardId,
}
