use serde::{Deserialize, Serialize};

use crate::domain::a001_equipe::aggregate::EquipeId;
use crate::domain::common::uuid_id;
use crate::enums::CardStatus;

uuid_id!(
    /// Identificador único de um board de checklist
    BoardId
);

uuid_id!(
    /// Identificador único de um card de checklist
    CardId
);

uuid_id!(
    /// Identificador único de um item de checklist
    ItemId
);

/// Coluna nomeada de cards de checklist de uma equipe.
///
/// `ordem` é a posição de exibição dentro da equipe; após qualquer
/// reordenação o cliente renumera todos os boards em 0..n-1 antes de
/// persistir.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    pub id: BoardId,
    pub nome: String,
    pub equipe_id: EquipeId,
    pub ordem: i32,
    #[serde(default)]
    pub cards: Vec<Card>,
}

/// Unidade de checklist com janela de horário e lista de itens.
///
/// Pertence a exatamente um board por vez; a transferência troca
/// `board_id` e a posição nos dois arrays na mesma operação local.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub titulo: String,
    pub board_id: BoardId,
    pub ordem: i32,
    /// Horários no formato "HH:mm" ou "HH:mm:ss".
    pub horario_abertura: Option<String>,
    pub horario_fechamento: Option<String>,
    /// Calculado pelo backend a partir do horário e da conclusão dos itens.
    #[serde(default)]
    pub status: CardStatus,
    pub descricao: Option<String>,
    #[serde(default)]
    pub itens: Vec<Item>,
}

/// Tarefa marcável de um card.
///
/// `marcado` é um fato por dia de referência, não uma propriedade
/// permanente: o backend faz o join com o log do dia consultado.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub id: ItemId,
    pub descricao: String,
    pub ordem: i32,
    #[serde(default)]
    pub marcado: bool,
}
