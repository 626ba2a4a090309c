use serde::{Deserialize, Serialize};

use crate::domain::common::uuid_id;

uuid_id!(
    /// Identificador único de uma equipe
    EquipeId
);

uuid_id!(
    /// Identificador único de um usuário (membro de equipe)
    UsuarioId
);

/// Equipe operacional: agrupa usuários, boards de checklist e escalas.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Equipe {
    pub id: EquipeId,
    pub nome: String,
}

/// Membro de equipe, na projeção mínima que o cliente precisa.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Usuario {
    pub id: UsuarioId,
    pub nome: String,
    pub equipe_id: Option<EquipeId>,
}
