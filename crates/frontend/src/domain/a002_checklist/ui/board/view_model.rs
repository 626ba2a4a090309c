use chrono::{Local, NaiveDate, NaiveTime};
use contracts::domain::a001_equipe::aggregate::{EquipeId, UsuarioId};
use contracts::domain::a002_checklist::aggregate::{Board, CardId, ItemId};
use contracts::domain::a002_checklist::requests::{MoverCardRequest, RegistroChecklistRequest};
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::model;
use crate::domain::a002_checklist::{ordering, status};
use crate::domain::a003_escala::ui::calendar::model as escala_model;
use crate::shared::date_utils;

/// ViewModel do quadro de checklist do dia.
///
/// Dono da árvore Board→Card→Item da equipe ativa para a data consultada.
/// Política de mutação, assimétrica de propósito:
/// - reordenação e transferência mutam o estado local primeiro e **não**
///   revertem em falha de persistência — a ordem otimista fica à frente do
///   servidor até a próxima recarga, e o erro é exibido;
/// - marcação de item reverte em falha, porque o checkbox é barato de
///   recompor e a correção visível importa mais ali.
#[derive(Clone, Copy)]
pub struct ChecklistBoardViewModel {
    pub boards: RwSignal<Vec<Board>>,
    pub carregando: RwSignal<bool>,
    pub erro: RwSignal<Option<String>>,
    /// A escala do dia indicou folga/férias/atestado; o quadro não é buscado.
    pub dia_sem_expediente: RwSignal<bool>,
    pub data_referencia: RwSignal<NaiveDate>,
    pub permissoes: RwSignal<status::Permissoes>,
    pub usuario_alvo: RwSignal<Option<UsuarioId>>,
    /// Card com o título em edição estrutural, se houver.
    pub editando_card: RwSignal<Option<CardId>>,
}

fn agora() -> NaiveTime {
    Local::now().time()
}

impl ChecklistBoardViewModel {
    pub fn new() -> Self {
        Self {
            boards: RwSignal::new(Vec::new()),
            carregando: RwSignal::new(false),
            erro: RwSignal::new(None),
            dia_sem_expediente: RwSignal::new(false),
            data_referencia: RwSignal::new(date_utils::hoje()),
            permissoes: RwSignal::new(status::Permissoes::default()),
            usuario_alvo: RwSignal::new(None),
            editando_card: RwSignal::new(None),
        }
    }

    /// Carrega a estrutura do dia para a equipe.
    ///
    /// A consulta de escala é um portão prévio: num dia sem expediente do
    /// usuário alvo o quadro nem é buscado. Falha de transporte degrada
    /// para lista vazia com log — um dia quebrado é preferível a uma visão
    /// que não abre.
    pub fn load(&self, equipe_id: EquipeId, data: NaiveDate) {
        let boards = self.boards;
        let carregando = self.carregando;
        let erro = self.erro;
        let dia_sem_expediente = self.dia_sem_expediente;
        let usuario_alvo = self.usuario_alvo.get_untracked();
        self.data_referencia.set(data);
        // data passada trava a visão para leitura
        self.permissoes.update(|p| {
            p.somente_leitura = data < date_utils::hoje();
        });

        spawn_local(async move {
            carregando.set(true);
            erro.set(None);
            dia_sem_expediente.set(false);

            if let Some(usuario) = usuario_alvo {
                match escala_model::get_escalas(usuario, data, data).await {
                    Ok(escalas) => {
                        let sem_expediente = escalas
                            .iter()
                            .any(|e| e.data == data && !e.tipo.expediente());
                        if sem_expediente {
                            dia_sem_expediente.set(true);
                            boards.set(Vec::new());
                            carregando.set(false);
                            return;
                        }
                    }
                    // portão inconclusivo: segue para a busca do quadro
                    Err(e) => log::warn!("falha ao consultar a escala do dia: {}", e),
                }
            }

            match model::get_checklist_do_dia(equipe_id, data, usuario_alvo).await {
                Ok(lista) => boards.set(lista),
                Err(e) => {
                    log::error!("falha ao carregar o checklist do dia: {}", e);
                    boards.set(Vec::new());
                }
            }
            carregando.set(false);
        });
    }

    /// Reordena um board por arraste. Muta local, renumera 0..n-1 e envia a
    /// lista completa; sem rollback em falha.
    pub fn reorder_board(&self, de: usize, para: usize) {
        let mut lista = self.boards.get_untracked();
        if !ordering::mover_e_renumerar(&mut lista, de, para) {
            return;
        }
        self.boards.set(lista.clone());

        let erro = self.erro;
        spawn_local(async move {
            if let Err(e) = model::reordenar_boards(&lista).await {
                erro.set(Some(format!(
                    "Falha ao salvar a ordem dos boards (a ordem exibida pode divergir do servidor): {}",
                    e
                )));
            }
        });
    }

    /// Reordena um card dentro de um board; mesma política do board.
    pub fn reorder_card(&self, indice_board: usize, de: usize, para: usize) {
        let mut lista = self.boards.get_untracked();
        let cards = match lista.get_mut(indice_board) {
            Some(board) => &mut board.cards,
            None => return,
        };
        if !ordering::mover_e_renumerar(cards, de, para) {
            return;
        }
        let persistir = cards.clone();
        self.boards.set(lista);

        let erro = self.erro;
        spawn_local(async move {
            if let Err(e) = model::reordenar_cards(&persistir).await {
                erro.set(Some(format!(
                    "Falha ao salvar a ordem dos cards (a ordem exibida pode divergir do servidor): {}",
                    e
                )));
            }
        });
    }

    /// Transfere um card entre boards.
    ///
    /// Mutação local atômica (sai da origem e entra no destino na mesma
    /// operação), depois três chamadas com visibilidade de erro assimétrica:
    /// a troca de dono é a única cuja falha o usuário precisa ver; ordem
    /// defasada é de baixo impacto e só vai para o log.
    pub fn transfer_card(
        &self,
        card_id: CardId,
        indice_origem: usize,
        indice_destino: usize,
        posicao_destino: usize,
    ) {
        if indice_origem == indice_destino {
            return;
        }
        let mut lista = self.boards.get_untracked();
        if !ordering::transferir_card(
            &mut lista,
            card_id,
            indice_origem,
            indice_destino,
            posicao_destino,
        ) {
            return;
        }
        let board_destino_id = lista[indice_destino].id;
        let cards_destino = lista[indice_destino].cards.clone();
        let cards_origem = lista[indice_origem].cards.clone();
        self.boards.set(lista);

        let erro = self.erro;
        spawn_local(async move {
            let requisicao = MoverCardRequest {
                card_id,
                board_destino_id,
            };
            if let Err(e) = model::mover_card(&requisicao).await {
                erro.set(Some(format!("Falha ao mover o card: {}", e)));
                return;
            }
            if let Err(e) = model::reordenar_cards(&cards_destino).await {
                log::warn!("falha ao reordenar o board de destino: {}", e);
            }
            if !cards_origem.is_empty() {
                if let Err(e) = model::reordenar_cards(&cards_origem).await {
                    log::warn!("falha ao reordenar o board de origem: {}", e);
                }
            }
        });
    }

    /// Marca/desmarca um item para a data de referência.
    ///
    /// Única operação com rollback: o flag volta ao valor anterior se o
    /// registro falhar. Pré-condição (card travado ou visão somente
    /// leitura) é no-op antes de qualquer chamada de rede.
    pub fn toggle_item(&self, card_id: CardId, item_id: ItemId) {
        let data_referencia = self.data_referencia.get_untracked();
        let permissoes = self.permissoes.get_untracked();
        let lista = self.boards.get_untracked();

        let card = lista
            .iter()
            .flat_map(|b| b.cards.iter())
            .find(|c| c.id == card_id);
        let card = match card {
            Some(c) => c,
            None => return,
        };
        if !status::pode_marcar_itens(card, agora(), permissoes) {
            log::debug!("marcação ignorada: card travado ou visão somente leitura");
            return;
        }
        let valor_anterior = match card.itens.iter().find(|i| i.id == item_id) {
            Some(item) => item.marcado,
            None => return,
        };
        let valor_novo = !valor_anterior;

        let boards = self.boards;
        let aplicar = move |valor: bool| {
            boards.update(|lista| {
                ordering::aplicar_marcacao(lista, card_id, item_id, valor);
            });
        };
        aplicar(valor_novo);

        let erro = self.erro;
        spawn_local(async move {
            let registro = RegistroChecklistRequest {
                item_id,
                data_referencia,
                valor: valor_novo,
            };
            if let Err(e) = model::registrar_acao(&registro).await {
                // rollback do flag otimista
                aplicar(valor_anterior);
                erro.set(Some(format!("Falha ao registrar a marcação: {}", e)));
            }
        });
    }

    /// Renomeia um card (edição estrutural).
    ///
    /// A capacidade de admin é exigida aqui, na entrada da mutação, e não
    /// só escondida na view. Mesma política de rollback da marcação: o
    /// título volta ao anterior se a persistência falhar.
    pub fn rename_card(&self, card_id: CardId, titulo: String) {
        let permissoes = self.permissoes.get_untracked();
        let lista = self.boards.get_untracked();

        let card = lista
            .iter()
            .flat_map(|b| b.cards.iter())
            .find(|c| c.id == card_id);
        let card = match card {
            Some(c) => c,
            None => return,
        };
        if !status::pode_editar_estrutura(card, agora(), permissoes) {
            log::debug!("renomeação ignorada: sem capacidade de edição estrutural");
            return;
        }
        let titulo = titulo.trim().to_string();
        if titulo.is_empty() || titulo == card.titulo {
            return;
        }
        let anterior = card.titulo.clone();
        let mut atualizado = card.clone();
        atualizado.titulo = titulo.clone();

        let boards = self.boards;
        let aplicar = move |valor: String| {
            boards.update(|lista| {
                ordering::aplicar_titulo(lista, card_id, &valor);
            });
        };
        aplicar(titulo);

        let erro = self.erro;
        spawn_local(async move {
            if let Err(e) = model::atualizar_card(&atualizado).await {
                aplicar(anterior);
                erro.set(Some(format!("Falha ao renomear o card: {}", e)));
            }
        });
    }
}

impl Default for ChecklistBoardViewModel {
    fn default() -> Self {
        Self::new()
    }
}
