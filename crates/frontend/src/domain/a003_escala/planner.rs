//! Planejador de escala: transforma a edição de um único dia em um upsert
//! simples ou em um comando de replicação por intervalo + dias da semana.
//!
//! Tudo aqui é cálculo puro sobre os valores do formulário; a submissão e a
//! recarga ficam no view model.

use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use contracts::domain::a001_equipe::aggregate::UsuarioId;
use contracts::domain::a003_escala::aggregate::EscalaTrabalho;
use contracts::domain::a003_escala::requests::EscalaReplicacao;
use contracts::enums::TipoEscala;

use crate::shared::date_utils::normalizar_hora;

/// Valores do formulário de edição de um dia.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EscalaForm {
    pub tipo: TipoEscala,
    /// "HH:mm" vindo do input, ou vazio.
    pub hora_inicio: String,
    pub hora_fim: String,
    pub observacao: String,
}

fn hora_opcional(tipo: TipoEscala, hora: &str) -> Option<String> {
    if !tipo.expediente() || hora.trim().is_empty() {
        None
    } else {
        Some(normalizar_hora(hora.trim()))
    }
}

fn observacao_opcional(observacao: &str) -> Option<String> {
    let limpa = observacao.trim();
    if limpa.is_empty() {
        None
    } else {
        Some(limpa.to_string())
    }
}

/// Monta o upsert de um único dia a partir do formulário.
pub fn construir_escala(
    usuario_id: UsuarioId,
    data: NaiveDate,
    form: &EscalaForm,
) -> EscalaTrabalho {
    EscalaTrabalho {
        usuario_id,
        data: data.into(),
        tipo: form.tipo,
        hora_inicio: hora_opcional(form.tipo, &form.hora_inicio),
        hora_fim: hora_opcional(form.tipo, &form.hora_fim),
        observacao: observacao_opcional(&form.observacao),
    }
}

/// Dias da semana pré-selecionados para replicação: o dia da semana ISO da
/// data editada ("mesmo dia da semana, daqui pra frente").
pub fn dias_semana_padrao(data: NaiveDate) -> BTreeSet<u32> {
    BTreeSet::from([data.weekday().number_from_monday()])
}

/// Último dia do calendário do mês da data — fim padrão da replicação.
pub fn ultimo_dia_do_mes(data: NaiveDate) -> NaiveDate {
    let (ano, mes) = if data.month() == 12 {
        (data.year() + 1, 1)
    } else {
        (data.year(), data.month() + 1)
    };
    NaiveDate::from_ymd_opt(ano, mes, 1)
        .and_then(|primeiro| primeiro.pred_opt())
        .unwrap_or(data)
}

/// Monta o comando de replicação para o intervalo e os dias selecionados.
pub fn construir_replicacao(
    usuario_id: UsuarioId,
    data_inicio: NaiveDate,
    data_fim: NaiveDate,
    dias_semana: &BTreeSet<u32>,
    form: &EscalaForm,
) -> EscalaReplicacao {
    EscalaReplicacao {
        usuario_id,
        data_inicio,
        data_fim,
        dias_semana: dias_semana.iter().copied().collect(),
        tipo: form.tipo,
        hora_inicio: hora_opcional(form.tipo, &form.hora_inicio),
        hora_fim: hora_opcional(form.tipo, &form.hora_fim),
        observacao: observacao_opcional(&form.observacao),
    }
}

/// Datas do intervalo [inicio, fim] cujo dia da semana ISO está em `dias`.
///
/// É a expansão que o backend fará; o cliente usa para a pré-visualização
/// de quantos dias serão gravados.
pub fn datas_replicadas(
    inicio: NaiveDate,
    fim: NaiveDate,
    dias: &BTreeSet<u32>,
) -> Vec<NaiveDate> {
    inicio
        .iter_days()
        .take_while(|d| *d <= fim)
        .filter(|d| dias.contains(&d.weekday().number_from_monday()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dia(ano: i32, mes: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(ano, mes, d).unwrap()
    }

    fn form_trabalho() -> EscalaForm {
        EscalaForm {
            tipo: TipoEscala::Trabalho,
            hora_inicio: "08:00".into(),
            hora_fim: "17:30".into(),
            observacao: "  abertura  ".into(),
        }
    }

    #[test]
    fn escala_normaliza_horas_e_observacao() {
        let escala = construir_escala(UsuarioId::new_v4(), dia(2024, 6, 3), &form_trabalho());
        assert_eq!(escala.hora_inicio.as_deref(), Some("08:00:00"));
        assert_eq!(escala.hora_fim.as_deref(), Some("17:30:00"));
        assert_eq!(escala.observacao.as_deref(), Some("abertura"));
        assert_eq!(escala.data, dia(2024, 6, 3));
    }

    #[test]
    fn dia_sem_expediente_descarta_horas() {
        let form = EscalaForm {
            tipo: TipoEscala::Folga,
            ..form_trabalho()
        };
        let escala = construir_escala(UsuarioId::new_v4(), dia(2024, 6, 3), &form);
        assert_eq!(escala.hora_inicio, None);
        assert_eq!(escala.hora_fim, None);
    }

    #[test]
    fn semente_e_o_dia_da_semana_da_data_editada() {
        // 2024-06-03 é segunda-feira
        assert_eq!(dias_semana_padrao(dia(2024, 6, 3)), BTreeSet::from([1]));
        // 2024-06-09 é domingo
        assert_eq!(dias_semana_padrao(dia(2024, 6, 9)), BTreeSet::from([7]));
    }

    #[test]
    fn ultimo_dia_do_mes_cobre_viradas() {
        assert_eq!(ultimo_dia_do_mes(dia(2024, 6, 3)), dia(2024, 6, 30));
        assert_eq!(ultimo_dia_do_mes(dia(2024, 12, 15)), dia(2024, 12, 31));
        // fevereiro bissexto
        assert_eq!(ultimo_dia_do_mes(dia(2024, 2, 1)), dia(2024, 2, 29));
    }

    #[test]
    fn replica_segundas_e_quartas_de_junho() {
        let dias = BTreeSet::from([1, 3]);
        let datas = datas_replicadas(dia(2024, 6, 1), dia(2024, 6, 30), &dias);
        let esperadas: Vec<NaiveDate> = [3, 5, 10, 12, 17, 19, 24, 26]
            .iter()
            .map(|&d| dia(2024, 6, d))
            .collect();
        assert_eq!(datas, esperadas);
    }

    #[test]
    fn intervalo_vazio_nao_replica_nada() {
        let dias = BTreeSet::from([1]);
        assert!(datas_replicadas(dia(2024, 6, 30), dia(2024, 6, 1), &dias).is_empty());
    }

    #[test]
    fn replicacao_carrega_dias_ordenados() {
        let dias = BTreeSet::from([3, 1]);
        let req = construir_replicacao(
            UsuarioId::new_v4(),
            dia(2024, 6, 1),
            dia(2024, 6, 30),
            &dias,
            &form_trabalho(),
        );
        assert_eq!(req.dias_semana, vec![1, 3]);
        assert!(req.validate().is_ok());
    }
}
