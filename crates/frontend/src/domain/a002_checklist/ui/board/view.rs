use chrono::Local;
use contracts::domain::a001_equipe::aggregate::{Usuario, UsuarioId};
use contracts::domain::a002_checklist::aggregate::CardId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::view_model::ChecklistBoardViewModel;
use crate::domain::a001_equipe::ui::model as equipe_model;
use crate::domain::a002_checklist::status;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils;
use crate::shared::dragdrop::DndState;
use crate::shared::icons::icon;

/// O que está sendo arrastado no quadro.
#[derive(Clone, Copy, PartialEq, Debug)]
enum Arrastado {
    Board {
        indice: usize,
    },
    Card {
        card_id: CardId,
        board_indice: usize,
        card_indice: usize,
    },
}

/// Alvo sob o cursor.
#[derive(Clone, Copy, PartialEq, Debug)]
enum Alvo {
    Board { indice: usize },
    /// Posição de inserção na lista de cards de um board.
    Slot { board_indice: usize, posicao: usize },
}

/// Despacha o par (arrastado, alvo) para a operação do view model.
fn despachar(vm: ChecklistBoardViewModel, arrastado: Arrastado, alvo: Alvo) {
    match (arrastado, alvo) {
        (Arrastado::Board { indice: de }, Alvo::Board { indice: para }) => {
            vm.reorder_board(de, para);
        }
        (Arrastado::Board { .. }, Alvo::Slot { .. }) => {}
        (
            Arrastado::Card {
                card_id,
                board_indice,
                card_indice,
            },
            Alvo::Slot {
                board_indice: destino,
                posicao,
            },
        ) => {
            if board_indice == destino {
                // remoção antes da inserção desloca as posições à direita
                let para = if posicao > card_indice {
                    posicao - 1
                } else {
                    posicao
                };
                vm.reorder_card(board_indice, card_indice, para);
            } else {
                vm.transfer_card(card_id, board_indice, destino, posicao);
            }
        }
        (
            Arrastado::Card {
                card_id,
                board_indice,
                card_indice,
            },
            Alvo::Board { indice: destino },
        ) => {
            // drop no corpo do board anexa ao fim
            let tamanho = vm
                .boards
                .with_untracked(|lista| lista.get(destino).map(|b| b.cards.len()).unwrap_or(0));
            if board_indice == destino {
                vm.reorder_card(board_indice, card_indice, tamanho.saturating_sub(1));
            } else {
                vm.transfer_card(card_id, board_indice, destino, tamanho);
            }
        }
    }
}

/// Quadro de checklist do dia da equipe ativa.
#[component]
#[allow(non_snake_case)]
pub fn ChecklistBoardView() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = ChecklistBoardViewModel::new();
    let dnd: DndState<Arrastado, Alvo> = DndState::new();

    let (data, set_data) = signal(date_utils::hoje());
    let (usuarios, set_usuarios) = signal::<Vec<Usuario>>(Vec::new());

    // membros da equipe ativa alimentam o filtro por usuário; trocar de
    // equipe volta o filtro para a equipe inteira
    Effect::new(move |_| {
        let equipe = ctx.equipe_ativa.get();
        vm.usuario_alvo.set(None);
        if let Some(equipe) = equipe {
            spawn_local(async move {
                match equipe_model::get_usuarios(equipe).await {
                    Ok(lista) => set_usuarios.set(lista),
                    Err(e) => log::warn!("falha ao carregar os membros da equipe: {}", e),
                }
            });
        } else {
            set_usuarios.set(Vec::new());
        }
    });

    let selecionar_usuario = move |valor: String| {
        vm.usuario_alvo.set(UsuarioId::from_string(&valor).ok());
        if let Some(equipe) = ctx.equipe_ativa.get_untracked() {
            vm.load(equipe, data.get_untracked());
        }
    };

    vm.permissoes
        .update(|p| p.admin = ctx.perfil_admin.get_untracked());

    // recarrega quando a equipe ativa ou a data mudam; a assinatura morre
    // junto com a visão
    Effect::new(move |_| {
        let equipe = ctx.equipe_ativa.get();
        let dia = data.get();
        if let Some(equipe) = equipe {
            vm.load(equipe, dia);
        }
    });

    let ao_soltar = move || {
        if let Some((arrastado, alvo)) = dnd.soltar() {
            despachar(vm, arrastado, alvo);
        }
    };

    view! {
        <div class="page checklist-page" class:checklist-page--arrastando=move || dnd.em_andamento()>
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Checklist do dia"</h1>
                </div>
                <div class="header__actions">
                    <select
                        class="input"
                        on:change=move |ev| selecionar_usuario(event_target_value(&ev))
                    >
                        <option value="">"Toda a equipe"</option>
                        {move || usuarios.get().into_iter().map(|u| {
                            view! { <option value=u.id.as_string()>{u.nome}</option> }
                        }).collect_view()}
                    </select>
                    <input
                        type="date"
                        class="input"
                        prop:value=move || data.get().format("%Y-%m-%d").to_string()
                        on:change=move |ev| {
                            let texto = event_target_value(&ev);
                            set_data.set(date_utils::parse_data_tolerante(&texto, date_utils::hoje()));
                        }
                    />
                    <button
                        class="button button--secondary"
                        on:click=move |_| {
                            if let Some(equipe) = ctx.equipe_ativa.get_untracked() {
                                vm.load(equipe, data.get_untracked());
                            }
                        }
                    >
                        {icon("refresh")}
                        {"Atualizar"}
                    </button>
                </div>
            </div>

            {move || vm.erro.get().map(|e| view! {
                <div class="warning-box warning-box--erro">
                    <span class="warning-box__icon">{icon("warning")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <Show when=move || ctx.equipe_ativa.get().is_none()>
                <p class="empty-state">"Selecione uma equipe para ver o checklist."</p>
            </Show>

            <Show when=move || vm.dia_sem_expediente.get()>
                <p class="empty-state">
                    {move || format!(
                        "Sem expediente em {}.",
                        date_utils::formatar_data(vm.data_referencia.get())
                    )}
                </p>
            </Show>

            <div class="boards-row">
                {move || {
                    let agora = Local::now().time();
                    let permissoes = vm.permissoes.get();
                    vm.boards.get().into_iter().enumerate().map(|(board_indice, board)| {
                        let total_cards = board.cards.len();
                        view! {
                            <div
                                class="board"
                                class:board--alvo=move || dnd.alvo.get() == Some(Alvo::Board { indice: board_indice })
                                draggable="true"
                                on:dragstart=move |_| dnd.iniciar(Arrastado::Board { indice: board_indice })
                                on:dragover=move |ev| {
                                    ev.prevent_default();
                                    dnd.marcar_alvo(Alvo::Board { indice: board_indice });
                                }
                                on:dragleave=move |_| dnd.limpar_alvo()
                                on:drop=move |ev| { ev.prevent_default(); ao_soltar(); }
                                on:dragend=move |_| dnd.cancelar()
                            >
                                <div class="board__header">
                                    <span class="board__nome">{board.nome.clone()}</span>
                                    <span class="board__contagem">{total_cards}</span>
                                </div>
                                <div class="board__cards">
                                    {board.cards.iter().enumerate().map(|(card_indice, card)| {
                                        let card_id = card.id;
                                        let fechado = status::esta_fechado(card, agora);
                                        let incompleto = status::is_incompleto(card, agora);
                                        let marcavel = status::pode_marcar_itens(card, agora, permissoes);
                                        let pode_estrutura = status::pode_editar_estrutura(card, agora, permissoes);
                                        let titulo_atual = card.titulo.clone();
                                        let progresso = status::progresso(card);
                                        let janela = match (&card.horario_abertura, &card.horario_fechamento) {
                                            (Some(a), Some(f)) => format!("{} – {}", a, f),
                                            (Some(a), None) => format!("a partir de {}", a),
                                            (None, Some(f)) => format!("até {}", f),
                                            (None, None) => String::new(),
                                        };
                                        view! {
                                            <div
                                                class="card"
                                                class:card--fechado=fechado
                                                class:card--alvo=move || dnd.alvo.get() == Some(Alvo::Slot { board_indice, posicao: card_indice })
                                                draggable="true"
                                                on:dragstart=move |ev| {
                                                    ev.stop_propagation();
                                                    dnd.iniciar(Arrastado::Card { card_id, board_indice, card_indice });
                                                }
                                                on:dragover=move |ev| {
                                                    ev.prevent_default();
                                                    ev.stop_propagation();
                                                    dnd.marcar_alvo(Alvo::Slot { board_indice, posicao: card_indice });
                                                }
                                                on:drop=move |ev| {
                                                    ev.prevent_default();
                                                    ev.stop_propagation();
                                                    ao_soltar();
                                                }
                                                on:dragend=move |_| dnd.cancelar()
                                            >
                                                <div class="card__header">
                                                    {move || {
                                                        if vm.editando_card.get() == Some(card_id) {
                                                            view! {
                                                                <input
                                                                    class="input card__titulo-input"
                                                                    prop:value=titulo_atual.clone()
                                                                    on:change=move |ev| {
                                                                        vm.rename_card(card_id, event_target_value(&ev));
                                                                        vm.editando_card.set(None);
                                                                    }
                                                                />
                                                            }.into_any()
                                                        } else {
                                                            view! {
                                                                <span
                                                                    class="card__titulo"
                                                                    title=if pode_estrutura { "Duplo clique para renomear" } else { "" }
                                                                    on:dblclick=move |_| {
                                                                        if pode_estrutura {
                                                                            vm.editando_card.set(Some(card_id));
                                                                        }
                                                                    }
                                                                >
                                                                    {titulo_atual.clone()}
                                                                </span>
                                                            }.into_any()
                                                        }
                                                    }}
                                                    <span class="card__status">{card.status.display_name()}</span>
                                                </div>
                                                <Show when=move || incompleto>
                                                    <div class="card__aviso" title="Card fechado com itens pendentes">
                                                        {icon("warning")}
                                                        {"Incompleto"}
                                                    </div>
                                                </Show>
                                                <div class="card__janela">{janela.clone()}</div>
                                                <div class="card__progresso">{format!("{}%", progresso)}</div>
                                                <ul class="card__itens">
                                                    {card.itens.iter().map(|item| {
                                                        let item_id = item.id;
                                                        view! {
                                                            <li class="card__item">
                                                                <label>
                                                                    <input
                                                                        type="checkbox"
                                                                        prop:checked=item.marcado
                                                                        disabled=!marcavel
                                                                        on:change=move |_| vm.toggle_item(card_id, item_id)
                                                                    />
                                                                    <span>{item.descricao.clone()}</span>
                                                                </label>
                                                            </li>
                                                        }
                                                    }).collect_view()}
                                                </ul>
                                            </div>
                                        }
                                    }).collect_view()}

                                    // zona de inserção no fim da lista
                                    <div
                                        class="board__slot-final"
                                        class:board__slot-final--alvo=move || dnd.alvo.get() == Some(Alvo::Slot { board_indice, posicao: total_cards })
                                        on:dragover=move |ev| {
                                            ev.prevent_default();
                                            ev.stop_propagation();
                                            dnd.marcar_alvo(Alvo::Slot { board_indice, posicao: total_cards });
                                        }
                                        on:dragleave=move |_| dnd.limpar_alvo()
                                        on:drop=move |ev| {
                                            ev.prevent_default();
                                            ev.stop_propagation();
                                            ao_soltar();
                                        }
                                    ></div>
                                </div>
                            </div>
                        }
                    }).collect_view()
                }}
            </div>
        </div>
    }
}
