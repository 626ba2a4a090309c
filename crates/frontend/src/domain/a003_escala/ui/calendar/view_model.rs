use std::collections::BTreeSet;

use chrono::{Datelike, NaiveDate};
use contracts::domain::a001_equipe::aggregate::UsuarioId;
use contracts::domain::a003_escala::aggregate::EscalaTrabalho;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::domain::a003_escala::planner::{self, EscalaForm};
use crate::shared::date_utils;

/// Edição em andamento de um dia da escala.
#[derive(Debug, Clone, PartialEq)]
pub struct EdicaoEscala {
    pub data: NaiveDate,
    pub form: EscalaForm,
    /// Replicar a edição pelo intervalo em vez de gravar só o dia.
    pub replicar: bool,
    /// Fim do intervalo como digitado; parse tolerante na submissão.
    pub data_fim_texto: String,
    /// Dias da semana ISO selecionados, semeados com o dia da data editada.
    pub dias_semana: BTreeSet<u32>,
}

/// ViewModel do calendário de escalas.
///
/// Ao contrário do checklist, escala não tem mutação otimista: toda
/// gravação confirmada dispara recarga do intervalo visível, e falha deixa
/// o calendário como estava, com o erro exibido.
#[derive(Clone, Copy)]
pub struct EscalaCalendarioViewModel {
    pub usuario: RwSignal<Option<UsuarioId>>,
    /// Mês exibido (ano, mês 1..12).
    pub mes: RwSignal<(i32, u32)>,
    pub escalas: RwSignal<Vec<EscalaTrabalho>>,
    pub carregando: RwSignal<bool>,
    pub erro: RwSignal<Option<String>>,
    pub edicao: RwSignal<Option<EdicaoEscala>>,
}

impl EscalaCalendarioViewModel {
    pub fn new() -> Self {
        let hoje = date_utils::hoje();
        Self {
            usuario: RwSignal::new(None),
            mes: RwSignal::new((hoje.year(), hoje.month())),
            escalas: RwSignal::new(Vec::new()),
            carregando: RwSignal::new(false),
            erro: RwSignal::new(None),
            edicao: RwSignal::new(None),
        }
    }

    pub fn mes_anterior(&self) {
        self.mes.update(|(ano, mes)| {
            if *mes == 1 {
                *ano -= 1;
                *mes = 12;
            } else {
                *mes -= 1;
            }
        });
        self.load();
    }

    pub fn mes_seguinte(&self) {
        self.mes.update(|(ano, mes)| {
            if *mes == 12 {
                *ano += 1;
                *mes = 1;
            } else {
                *mes += 1;
            }
        });
        self.load();
    }

    /// Intervalo coberto pela grade do mês exibido (inclui o prefixo do mês
    /// anterior).
    fn intervalo_visivel(&self) -> Option<(NaiveDate, NaiveDate)> {
        let (ano, mes) = self.mes.get_untracked();
        let primeiro = NaiveDate::from_ymd_opt(ano, mes, 1)?;
        let inicio = primeiro.checked_sub_days(chrono::Days::new(6))?;
        let fim = planner::ultimo_dia_do_mes(primeiro);
        Some((inicio, fim))
    }

    /// Recarrega os lançamentos do intervalo visível.
    pub fn load(&self) {
        let usuario = match self.usuario.get_untracked() {
            Some(u) => u,
            // pré-condição local: sem usuário não há o que buscar
            None => return,
        };
        let (inicio, fim) = match self.intervalo_visivel() {
            Some(intervalo) => intervalo,
            None => return,
        };

        let escalas = self.escalas;
        let carregando = self.carregando;
        let erro = self.erro;
        spawn_local(async move {
            carregando.set(true);
            match model::get_escalas(usuario, inicio, fim).await {
                Ok(lista) => {
                    escalas.set(lista);
                    erro.set(None);
                }
                Err(e) => erro.set(Some(format!("Falha ao carregar a escala: {}", e))),
            }
            carregando.set(false);
        });
    }

    /// Abre a edição de um dia, semeando o formulário com o lançamento
    /// existente e a replicação com os padrões (mesmo dia da semana, até o
    /// fim do mês da data editada).
    pub fn abrir_edicao(&self, data: NaiveDate) {
        let form = self
            .escalas
            .with_untracked(|lista| {
                lista.iter().find(|e| e.data == data).map(|e| EscalaForm {
                    tipo: e.tipo,
                    hora_inicio: e.hora_inicio.clone().unwrap_or_default(),
                    hora_fim: e.hora_fim.clone().unwrap_or_default(),
                    observacao: e.observacao.clone().unwrap_or_default(),
                })
            })
            .unwrap_or_default();

        self.edicao.set(Some(EdicaoEscala {
            data,
            form,
            replicar: false,
            data_fim_texto: planner::ultimo_dia_do_mes(data)
                .format("%Y-%m-%d")
                .to_string(),
            dias_semana: planner::dias_semana_padrao(data),
        }));
    }

    pub fn fechar_edicao(&self) {
        self.edicao.set(None);
    }

    pub fn alternar_dia_semana(&self, dia: u32) {
        self.edicao.update(|edicao| {
            if let Some(edicao) = edicao {
                if !edicao.dias_semana.remove(&dia) {
                    edicao.dias_semana.insert(dia);
                }
            }
        });
    }

    /// Quantos dias a replicação atual gravaria (pré-visualização).
    pub fn previa_replicacao(&self) -> usize {
        match self.edicao.get() {
            Some(edicao) if edicao.replicar => {
                let fim =
                    date_utils::parse_data_tolerante(&edicao.data_fim_texto, date_utils::hoje());
                planner::datas_replicadas(edicao.data, fim, &edicao.dias_semana).len()
            }
            _ => 0,
        }
    }

    /// Submete a edição: upsert único ou replicação, conforme o flag.
    ///
    /// Sucesso fecha a edição e recarrega do backend; falha mantém o
    /// calendário intacto e exibe o erro.
    pub fn salvar(&self) {
        let usuario = match self.usuario.get_untracked() {
            Some(u) => u,
            None => {
                self.erro.set(Some("Selecione um usuário.".into()));
                return;
            }
        };
        let edicao = match self.edicao.get_untracked() {
            Some(e) => e,
            None => return,
        };

        let vm = *self;
        let erro = self.erro;
        spawn_local(async move {
            let resultado = if edicao.replicar {
                let fim =
                    date_utils::parse_data_tolerante(&edicao.data_fim_texto, date_utils::hoje());
                let replicacao = planner::construir_replicacao(
                    usuario,
                    edicao.data,
                    fim,
                    &edicao.dias_semana,
                    &edicao.form,
                );
                match replicacao.validate() {
                    Ok(()) => model::replicar_escala(&replicacao).await,
                    Err(e) => Err(e),
                }
            } else {
                let escala = planner::construir_escala(usuario, edicao.data, &edicao.form);
                match escala.validate() {
                    Ok(()) => model::salvar_escala(&escala).await.map(|_| ()),
                    Err(e) => Err(e),
                }
            };

            match resultado {
                Ok(()) => {
                    vm.fechar_edicao();
                    vm.load();
                }
                Err(e) => erro.set(Some(format!("Falha ao gravar a escala: {}", e))),
            }
        });
    }
}

impl Default for EscalaCalendarioViewModel {
    fn default() -> Self {
        Self::new()
    }
}
