use serde::{Deserialize, Serialize};

use crate::domain::a001_equipe::aggregate::UsuarioId;
use crate::domain::common::FlexDate;
use crate::enums::TipoEscala;

/// Lançamento de escala de um usuário para uma data.
///
/// A data é chave única por usuário: `salvarEscala` é um upsert por
/// (usuário, data). A data chega do backend em três formatos diferentes,
/// todos normalizados por [`FlexDate`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalaTrabalho {
    pub usuario_id: UsuarioId,
    pub data: FlexDate,
    pub tipo: TipoEscala,
    /// Horários no formato "HH:mm:ss"; ausentes em dias sem expediente.
    pub hora_inicio: Option<String>,
    pub hora_fim: Option<String>,
    pub observacao: Option<String>,
}

impl EscalaTrabalho {
    /// Validação local antes do envio.
    pub fn validate(&self) -> Result<(), String> {
        if self.tipo.expediente() {
            if self.hora_inicio.is_none() || self.hora_fim.is_none() {
                return Err("Dia de trabalho exige hora de início e fim".into());
            }
        }
        Ok(())
    }
}
