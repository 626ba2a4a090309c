//! Estado efetivo de um card: fechamento por horário, progresso e regras de
//! edição.
//!
//! O status que vem do backend não basta: passado o horário de fechamento o
//! card fica travado para edição no cliente mesmo que o backend ainda o
//! reporte aberto. O estado efetivo é o OR dos dois. Todas as funções
//! recebem `agora` como argumento para serem testáveis fora do browser.

use chrono::NaiveTime;
use contracts::domain::a002_checklist::aggregate::Card;
use contracts::enums::CardStatus;

/// Parse de horário "HH:mm" ou "HH:mm:ss".
pub fn parse_horario(texto: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(texto, "%H:%M:%S")
        .or_else(|_| NaiveTime::parse_from_str(texto, "%H:%M"))
        .ok()
}

/// Card fechado para edição: backend diz fechado OU o horário de
/// fechamento já passou. Sem horário de fechamento, só o backend decide.
pub fn esta_fechado(card: &Card, agora: NaiveTime) -> bool {
    if card.status == CardStatus::Fechado {
        return true;
    }
    card.horario_fechamento
        .as_deref()
        .and_then(parse_horario)
        .map_or(false, |fechamento| agora >= fechamento)
}

/// Percentual de itens marcados, 0..=100. Card sem itens conta como 100.
pub fn progresso(card: &Card) -> u32 {
    let total = card.itens.len();
    if total == 0 {
        return 100;
    }
    let marcados = card.itens.iter().filter(|i| i.marcado).count();
    (marcados * 100 / total) as u32
}

/// Card fechado com progresso abaixo de 100%.
///
/// Flag puramente informativa para o aviso visual; nunca bloqueia
/// interação.
pub fn is_incompleto(card: &Card, agora: NaiveTime) -> bool {
    esta_fechado(card, agora) && progresso(card) < 100
}

/// Capacidades do usuário sobre a visão atual do checklist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Permissoes {
    /// Pode editar estrutura (título, descrição, lista de itens).
    pub admin: bool,
    /// Visão somente leitura imposta pelo chamador (ex.: data passada).
    pub somente_leitura: bool,
}

/// Itens marcáveis: card não fechado e visão não somente leitura.
pub fn pode_marcar_itens(card: &Card, agora: NaiveTime, permissoes: Permissoes) -> bool {
    !esta_fechado(card, agora) && !permissoes.somente_leitura
}

/// Edição estrutural: além de marcável, exige capacidade de admin.
///
/// A checagem vale em todo ponto de entrada de mutação, não só na UI.
pub fn pode_editar_estrutura(card: &Card, agora: NaiveTime, permissoes: Permissoes) -> bool {
    pode_marcar_itens(card, agora, permissoes) && permissoes.admin
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_checklist::aggregate::{BoardId, CardId, Item, ItemId};

    fn hora(texto: &str) -> NaiveTime {
        parse_horario(texto).unwrap()
    }

    fn card(status: CardStatus, fechamento: Option<&str>, marcados: &[bool]) -> Card {
        Card {
            id: CardId::new_v4(),
            titulo: "abertura da loja".into(),
            board_id: BoardId::new_v4(),
            ordem: 0,
            horario_abertura: Some("08:00".into()),
            horario_fechamento: fechamento.map(|s| s.to_string()),
            status,
            descricao: None,
            itens: marcados
                .iter()
                .enumerate()
                .map(|(i, &marcado)| Item {
                    id: ItemId::new_v4(),
                    descricao: format!("item {}", i),
                    ordem: i as i32,
                    marcado,
                })
                .collect(),
        }
    }

    #[test]
    fn parse_aceita_com_e_sem_segundos() {
        assert_eq!(parse_horario("08:00"), parse_horario("08:00:00"));
        assert!(parse_horario("25:00").is_none());
        assert!(parse_horario("").is_none());
    }

    #[test]
    fn fechado_pelo_backend() {
        let c = card(CardStatus::Fechado, Some("22:00"), &[]);
        assert!(esta_fechado(&c, hora("08:00")));
    }

    #[test]
    fn fechado_pelo_horario_mesmo_com_backend_aberto() {
        let c = card(CardStatus::Aberto, Some("12:00"), &[]);
        assert!(!esta_fechado(&c, hora("11:59:59")));
        assert!(esta_fechado(&c, hora("12:00")));
        assert!(esta_fechado(&c, hora("18:30")));
    }

    #[test]
    fn sem_horario_de_fechamento_so_backend_decide() {
        let c = card(CardStatus::Aberto, None, &[]);
        assert!(!esta_fechado(&c, hora("23:59")));
    }

    #[test]
    fn progresso_conta_marcados() {
        assert_eq!(progresso(&card(CardStatus::Aberto, None, &[true, false])), 50);
        assert_eq!(progresso(&card(CardStatus::Aberto, None, &[true, true])), 100);
        assert_eq!(progresso(&card(CardStatus::Aberto, None, &[])), 100);
    }

    #[test]
    fn incompleto_exige_fechado_e_progresso_parcial() {
        let parcial = card(CardStatus::Aberto, Some("12:00"), &[true, false]);
        assert!(!is_incompleto(&parcial, hora("11:00")));
        assert!(is_incompleto(&parcial, hora("12:00")));

        // todos marcados: nunca incompleto, mesmo fechado
        let completo = card(CardStatus::Fechado, Some("12:00"), &[true, true]);
        assert!(!is_incompleto(&completo, hora("13:00")));
    }

    #[test]
    fn marcar_itens_respeita_fechamento_e_somente_leitura() {
        let c = card(CardStatus::Aberto, Some("12:00"), &[false]);
        let livre = Permissoes::default();
        assert!(pode_marcar_itens(&c, hora("10:00"), livre));
        assert!(!pode_marcar_itens(&c, hora("13:00"), livre));

        let leitura = Permissoes {
            somente_leitura: true,
            ..Default::default()
        };
        assert!(!pode_marcar_itens(&c, hora("10:00"), leitura));
    }

    #[test]
    fn estrutura_exige_admin() {
        let c = card(CardStatus::Aberto, Some("12:00"), &[false]);
        let comum = Permissoes::default();
        let admin = Permissoes {
            admin: true,
            ..Default::default()
        };
        assert!(!pode_editar_estrutura(&c, hora("10:00"), comum));
        assert!(pode_editar_estrutura(&c, hora("10:00"), admin));
        // admin não passa por cima do fechamento
        assert!(!pode_editar_estrutura(&c, hora("13:00"), admin));
    }
}
