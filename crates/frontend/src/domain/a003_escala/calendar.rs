//! Grade mensal do calendário de escalas.
//!
//! Cálculo puro, refeito a cada mudança de mês: dias do mês anterior
//! suficientes para alinhar o dia 1 na sua coluna (colunas começam na
//! segunda-feira, consistente com a numeração ISO usada na replicação),
//! seguidos de todos os dias do mês.

use chrono::{Datelike, NaiveDate};
use contracts::domain::a003_escala::aggregate::EscalaTrabalho;

/// Célula da grade mensal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiaCalendario {
    pub data: NaiveDate,
    /// Dia do mês anterior, exibido esmaecido.
    pub outro_mes: bool,
    /// Dia atual, exibido em destaque.
    pub hoje: bool,
}

/// Gera as células do mês: prefixo do mês anterior + todos os dias do mês.
pub fn grade_do_mes(ano: i32, mes: u32, hoje: NaiveDate) -> Vec<DiaCalendario> {
    let primeiro = match NaiveDate::from_ymd_opt(ano, mes, 1) {
        Some(d) => d,
        None => return Vec::new(),
    };

    // coluna ISO do dia 1: segunda=1 não precisa de prefixo
    let prefixo = (primeiro.weekday().number_from_monday() - 1) as i64;
    let mut celulas = Vec::new();

    for desloc in (1..=prefixo).rev() {
        if let Some(data) = primeiro.checked_sub_days(chrono::Days::new(desloc as u64)) {
            celulas.push(DiaCalendario {
                data,
                outro_mes: true,
                hoje: data == hoje,
            });
        }
    }

    let mut data = primeiro;
    while data.month() == mes {
        celulas.push(DiaCalendario {
            data,
            outro_mes: false,
            hoje: data == hoje,
        });
        data = match data.succ_opt() {
            Some(proxima) => proxima,
            None => break,
        };
    }

    celulas
}

/// Associa uma célula a no máximo um lançamento, por igualdade de data de
/// calendário. O lançamento pode ter chegado como string ISO, array
/// [ano, mes, dia] ou datetime — `FlexDate` já normalizou as três formas.
pub fn associar_escala(dia: NaiveDate, escalas: &[EscalaTrabalho]) -> Option<&EscalaTrabalho> {
    escalas.iter().find(|e| e.data == dia)
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a001_equipe::aggregate::UsuarioId;
    use contracts::enums::TipoEscala;

    fn dia(ano: i32, mes: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, d).unwrap()
    }

    #[test]
    fn junho_2024_comeca_no_sabado() {
        // 2024-06-01 é sábado: cinco dias de maio na frente
        let grade = grade_do_mes(2024, 6, dia(2024, 6, 15));
        assert_eq!(grade.len(), 5 + 30);
        assert_eq!(grade[0].data, dia(2024, 5, 27));
        assert!(grade[0].outro_mes);
        assert_eq!(grade[5].data, dia(2024, 6, 1));
        assert!(!grade[5].outro_mes);
        assert_eq!(grade.last().unwrap().data, dia(2024, 6, 30));
    }

    #[test]
    fn mes_que_comeca_na_segunda_nao_tem_prefixo() {
        // 2024-07-01 é segunda-feira
        let grade = grade_do_mes(2024, 7, dia(2024, 7, 1));
        assert_eq!(grade.len(), 31);
        assert_eq!(grade[0].data, dia(2024, 7, 1));
        assert!(grade[0].hoje);
        assert!(!grade[1].hoje);
    }

    #[test]
    fn hoje_fora_do_mes_nao_marca_nada() {
        let grade = grade_do_mes(2024, 6, dia(2024, 7, 10));
        assert!(grade.iter().all(|c| !c.hoje));
    }

    #[test]
    fn associa_pelos_tres_formatos_de_data() {
        let usuario = UsuarioId::new_v4();
        let escalas: Vec<EscalaTrabalho> = [
            "{\"usuarioId\":\"ID\",\"data\":\"2024-06-03\",\"tipo\":\"TRABALHO\",\"horaInicio\":null,\"horaFim\":null,\"observacao\":null}",
            "{\"usuarioId\":\"ID\",\"data\":[2024,6,4],\"tipo\":\"FOLGA\",\"horaInicio\":null,\"horaFim\":null,\"observacao\":null}",
            "{\"usuarioId\":\"ID\",\"data\":\"2024-06-05T00:00:00Z\",\"tipo\":\"FERIAS\",\"horaInicio\":null,\"horaFim\":null,\"observacao\":null}",
        ]
        .iter()
        .map(|json| {
            let json = json.replace("ID", &usuario.value().to_string());
            serde_json::from_str(&json).unwrap()
        })
        .collect();

        let dia3 = associar_escala(dia(2024, 6, 3), &escalas).unwrap();
        assert_eq!(dia3.tipo, TipoEscala::Trabalho);
        let dia4 = associar_escala(dia(2024, 6, 4), &escalas).unwrap();
        assert_eq!(dia4.tipo, TipoEscala::Folga);
        let dia5 = associar_escala(dia(2024, 6, 5), &escalas).unwrap();
        assert_eq!(dia5.tipo, TipoEscala::Ferias);
        assert!(associar_escala(dia(2024, 6, 6), &escalas).is_none());
    }
}
