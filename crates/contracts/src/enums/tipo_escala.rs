use serde::{Deserialize, Serialize};

/// Tipo de lançamento na escala de trabalho de um usuário.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TipoEscala {
    Trabalho,
    Folga,
    Ferias,
    Atestado,
}

impl TipoEscala {
    pub fn code(&self) -> &'static str {
        match self {
            TipoEscala::Trabalho => "TRABALHO",
            TipoEscala::Folga => "FOLGA",
            TipoEscala::Ferias => "FERIAS",
            TipoEscala::Atestado => "ATESTADO",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TipoEscala::Trabalho => "Trabalho",
            TipoEscala::Folga => "Folga",
            TipoEscala::Ferias => "Férias",
            TipoEscala::Atestado => "Atestado",
        }
    }

    /// Dias deste tipo contam como expediente? O checklist do dia só é
    /// carregado para dias de expediente.
    pub fn expediente(&self) -> bool {
        matches!(self, TipoEscala::Trabalho)
    }

    pub fn all() -> Vec<TipoEscala> {
        vec![
            TipoEscala::Trabalho,
            TipoEscala::Folga,
            TipoEscala::Ferias,
            TipoEscala::Atestado,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "TRABALHO" => Some(TipoEscala::Trabalho),
            "FOLGA" => Some(TipoEscala::Folga),
            "FERIAS" => Some(TipoEscala::Ferias),
            "ATESTADO" => Some(TipoEscala::Atestado),
            _ => None,
        }
    }
}

impl Default for TipoEscala {
    fn default() -> Self {
        TipoEscala::Trabalho
    }
}
