/// Utilitários de data e hora usados pelo checklist e pela escala.
use chrono::{Local, NaiveDate};

/// Normaliza "HH:mm" para "HH:mm:ss" acrescentando ":00".
///
/// O backend só aceita horários com segundos; os inputs de formulário
/// produzem "HH:mm". Qualquer outro comprimento passa inalterado.
pub fn normalizar_hora(hora: &str) -> String {
    if hora.len() == 5 {
        format!("{}:00", hora)
    } else {
        hora.to_string()
    }
}

/// Data de hoje no fuso local.
pub fn hoje() -> NaiveDate {
    Local::now().date_naive()
}

/// Parse tolerante de "YYYY-MM-DD" (aceita sufixo de hora).
///
/// Entrada não interpretável cai para `padrao` em vez de falhar a operação;
/// o fallback é registrado no log porque produz uma data "válida" que o
/// usuário não digitou.
pub fn parse_data_tolerante(texto: &str, padrao: NaiveDate) -> NaiveDate {
    let parte_data = texto.split('T').next().unwrap_or(texto).trim();
    match NaiveDate::parse_from_str(parte_data, "%Y-%m-%d") {
        Ok(data) => data,
        Err(_) => {
            log::warn!(
                "data inválida '{}', usando {} no lugar",
                texto,
                padrao.format("%Y-%m-%d")
            );
            padrao
        }
    }
}

/// Formata uma data para exibição no padrão brasileiro DD/MM/YYYY.
pub fn formatar_data(data: NaiveDate) -> String {
    data.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dia(ano: i32, mes: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, d).unwrap()
    }

    #[test]
    fn normaliza_hora_curta() {
        assert_eq!(normalizar_hora("08:00"), "08:00:00");
    }

    #[test]
    fn mantem_hora_completa() {
        assert_eq!(normalizar_hora("08:00:00"), "08:00:00");
        assert_eq!(normalizar_hora("23:59:59"), "23:59:59");
    }

    #[test]
    fn parse_tolerante_aceita_iso() {
        let padrao = dia(2024, 1, 1);
        assert_eq!(parse_data_tolerante("2024-06-03", padrao), dia(2024, 6, 3));
        assert_eq!(
            parse_data_tolerante("2024-06-03T10:00:00", padrao),
            dia(2024, 6, 3)
        );
    }

    #[test]
    fn parse_tolerante_cai_para_padrao() {
        let padrao = dia(2024, 1, 1);
        assert_eq!(parse_data_tolerante("03/06/2024", padrao), padrao);
        assert_eq!(parse_data_tolerante("", padrao), padrao);
    }

    #[test]
    fn formata_padrao_brasileiro() {
        assert_eq!(formatar_data(dia(2024, 6, 3)), "03/06/2024");
    }
}
