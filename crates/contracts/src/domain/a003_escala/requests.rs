use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::a001_equipe::aggregate::UsuarioId;
use crate::enums::TipoEscala;

/// Comando de replicação de escala: o backend expande para um upsert por
/// data do intervalo cujo dia da semana ISO (1=segunda..7=domingo) esteja em
/// `dias_semana`. Não é uma entidade persistida.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EscalaReplicacao {
    pub usuario_id: UsuarioId,
    pub data_inicio: NaiveDate,
    pub data_fim: NaiveDate,
    /// Dias da semana ISO, 1=segunda .. 7=domingo.
    pub dias_semana: Vec<u32>,
    pub tipo: TipoEscala,
    pub hora_inicio: Option<String>,
    pub hora_fim: Option<String>,
    pub observacao: Option<String>,
}

impl EscalaReplicacao {
    pub fn validate(&self) -> Result<(), String> {
        if self.data_fim < self.data_inicio {
            return Err("Data final anterior à data inicial".into());
        }
        if self.dias_semana.is_empty() {
            return Err("Selecione ao menos um dia da semana".into());
        }
        if self.dias_semana.iter().any(|d| !(1..=7).contains(d)) {
            return Err("Dia da semana fora do intervalo 1..7".into());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn req(dias: Vec<u32>, inicio: (i32, u32, u32), fim: (i32, u32, u32)) -> EscalaReplicacao {
        EscalaReplicacao {
            usuario_id: UsuarioId::new_v4(),
            data_inicio: NaiveDate::from_ymd_opt(inicio.0, inicio.1, inicio.2).unwrap(),
            data_fim: NaiveDate::from_ymd_opt(fim.0, fim.1, fim.2).unwrap(),
            dias_semana: dias,
            tipo: TipoEscala::Trabalho,
            hora_inicio: Some("08:00:00".into()),
            hora_fim: Some("17:00:00".into()),
            observacao: None,
        }
    }

    #[test]
    fn valida_intervalo_e_dias() {
        assert!(req(vec![1, 3], (2024, 6, 1), (2024, 6, 30)).validate().is_ok());
        assert!(req(vec![], (2024, 6, 1), (2024, 6, 30)).validate().is_err());
        assert!(req(vec![0], (2024, 6, 1), (2024, 6, 30)).validate().is_err());
        assert!(req(vec![8], (2024, 6, 1), (2024, 6, 30)).validate().is_err());
        assert!(req(vec![1], (2024, 6, 30), (2024, 6, 1)).validate().is_err());
    }
}
