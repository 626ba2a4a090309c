use serde::{Deserialize, Serialize};

/// Estado de um card de checklist, calculado pelo backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    Pendente,
    Aberto,
    Fechado,
}

impl CardStatus {
    pub fn code(&self) -> &'static str {
        match self {
            CardStatus::Pendente => "PENDENTE",
            CardStatus::Aberto => "ABERTO",
            CardStatus::Fechado => "FECHADO",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CardStatus::Pendente => "Pendente",
            CardStatus::Aberto => "Aberto",
            CardStatus::Fechado => "Fechado",
        }
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "PENDENTE" => Some(CardStatus::Pendente),
            "ABERTO" => Some(CardStatus::Aberto),
            "FECHADO" => Some(CardStatus::Fechado),
            _ => None,
        }
    }
}

impl Default for CardStatus {
    fn default() -> Self {
        CardStatus::Pendente
    }
}
