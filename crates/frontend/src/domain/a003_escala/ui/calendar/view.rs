use contracts::domain::a001_equipe::aggregate::Usuario;
use contracts::domain::common::AggregateId;
use contracts::enums::TipoEscala;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::view_model::EscalaCalendarioViewModel;
use crate::domain::a001_equipe::ui::model as equipe_model;
use crate::domain::a003_escala::calendar;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::date_utils;
use crate::shared::icons::icon;

const DIAS_SEMANA: [(u32, &str); 7] = [
    (1, "Seg"),
    (2, "Ter"),
    (3, "Qua"),
    (4, "Qui"),
    (5, "Sex"),
    (6, "Sáb"),
    (7, "Dom"),
];

fn nome_mes(mes: u32) -> &'static str {
    match mes {
        1 => "Janeiro",
        2 => "Fevereiro",
        3 => "Março",
        4 => "Abril",
        5 => "Maio",
        6 => "Junho",
        7 => "Julho",
        8 => "Agosto",
        9 => "Setembro",
        10 => "Outubro",
        11 => "Novembro",
        _ => "Dezembro",
    }
}

/// Calendário mensal de escalas com edição e replicação por dia.
#[component]
#[allow(non_snake_case)]
pub fn EscalaCalendarioView() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let vm = EscalaCalendarioViewModel::new();
    let (usuarios, set_usuarios) = signal::<Vec<Usuario>>(Vec::new());

    // membros da equipe ativa alimentam o seletor de usuário
    Effect::new(move |_| {
        let equipe = ctx.equipe_ativa.get();
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
        use contracts::domain::a001_equipe::aggregate::UsuarioId;
        match UsuarioId::from_string(&valor) {
            Ok(id) => {
                vm.usuario.set(Some(id));
                vm.load();
            }
            Err(_) => vm.usuario.set(None),
        }
    };

    view! {
        <div class="page escala-page">
            <div class="header">
                <div class="header__content">
                    <h1 class="header__title">"Escala de trabalho"</h1>
                </div>
                <div class="header__actions">
                    <select
                        class="input"
                        on:change=move |ev| selecionar_usuario(event_target_value(&ev))
                    >
                        <option value="">"Selecione um usuário"</option>
                        {move || usuarios.get().into_iter().map(|u| {
                            view! { <option value=u.id.as_string()>{u.nome}</option> }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            {move || vm.erro.get().map(|e| view! {
                <div class="warning-box warning-box--erro">
                    <span class="warning-box__icon">{icon("warning")}</span>
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <div class="calendario">
                <div class="calendario__nav">
                    <button class="button button--secondary" on:click=move |_| vm.mes_anterior()>
                        {icon("chevron-left")}
                    </button>
                    <span class="calendario__mes">
                        {move || {
                            let (ano, mes) = vm.mes.get();
                            format!("{} {}", nome_mes(mes), ano)
                        }}
                    </span>
                    <button class="button button--secondary" on:click=move |_| vm.mes_seguinte()>
                        {icon("chevron-right")}
                    </button>
                </div>

                <div class="calendario__cabecalho">
                    {DIAS_SEMANA.iter().map(|(_, rotulo)| view! {
                        <span class="calendario__dia-semana">{*rotulo}</span>
                    }).collect_view()}
                </div>

                <div class="calendario__grade">
                    {move || {
                        let (ano, mes) = vm.mes.get();
                        let hoje = date_utils::hoje();
                        let escalas = vm.escalas.get();
                        calendar::grade_do_mes(ano, mes, hoje).into_iter().map(|celula| {
                            let escala = calendar::associar_escala(celula.data, &escalas).cloned();
                            let rotulo = escala.as_ref().map(|e| e.tipo.display_name());
                            let data = celula.data;
                            view! {
                                <div
                                    class="calendario__celula"
                                    class:calendario__celula--outro-mes=celula.outro_mes
                                    class:calendario__celula--hoje=celula.hoje
                                    on:click=move |_| {
                                        if vm.usuario.get_untracked().is_some() {
                                            vm.abrir_edicao(data);
                                        }
                                    }
                                >
                                    <span class="calendario__numero">
                                        {format!("{}", data.format("%d"))}
                                    </span>
                                    {rotulo.map(|r| view! {
                                        <span class="calendario__tipo">{r}</span>
                                    })}
                                </div>
                            }
                        }).collect_view()
                    }}
                </div>
            </div>

            {move || vm.edicao.get().map(|edicao| {
                let data = edicao.data;
                view! {
                    <div class="painel-edicao">
                        <div class="painel-edicao__titulo">
                            {format!("Escala de {}", date_utils::formatar_data(data))}
                        </div>

                        <label class="campo">
                            <span>"Tipo"</span>
                            <select
                                class="input"
                                on:change=move |ev| {
                                    let codigo = event_target_value(&ev);
                                    vm.edicao.update(|e| {
                                        if let (Some(e), Some(tipo)) = (e.as_mut(), TipoEscala::from_code(&codigo)) {
                                            e.form.tipo = tipo;
                                        }
                                    });
                                }
                            >
                                {TipoEscala::all().into_iter().map(|tipo| view! {
                                    <option value=tipo.code() selected=edicao.form.tipo == tipo>
                                        {tipo.display_name()}
                                    </option>
                                }).collect_view()}
                            </select>
                        </label>

                        <Show when=move || vm.edicao.get().map(|e| e.form.tipo.expediente()).unwrap_or(false)>
                            <label class="campo">
                                <span>"Início"</span>
                                <input
                                    type="time"
                                    class="input"
                                    prop:value=move || vm.edicao.get().map(|e| e.form.hora_inicio).unwrap_or_default()
                                    on:change=move |ev| {
                                        let valor = event_target_value(&ev);
                                        vm.edicao.update(|e| if let Some(e) = e.as_mut() { e.form.hora_inicio = valor; });
                                    }
                                />
                            </label>
                            <label class="campo">
                                <span>"Fim"</span>
                                <input
                                    type="time"
                                    class="input"
                                    prop:value=move || vm.edicao.get().map(|e| e.form.hora_fim).unwrap_or_default()
                                    on:change=move |ev| {
                                        let valor = event_target_value(&ev);
                                        vm.edicao.update(|e| if let Some(e) = e.as_mut() { e.form.hora_fim = valor; });
                                    }
                                />
                            </label>
                        </Show>

                        <label class="campo">
                            <span>"Observação"</span>
                            <input
                                type="text"
                                class="input"
                                prop:value=move || vm.edicao.get().map(|e| e.form.observacao).unwrap_or_default()
                                on:change=move |ev| {
                                    let valor = event_target_value(&ev);
                                    vm.edicao.update(|e| if let Some(e) = e.as_mut() { e.form.observacao = valor; });
                                }
                            />
                        </label>

                        <label class="campo campo--linha">
                            <input
                                type="checkbox"
                                prop:checked=move || vm.edicao.get().map(|e| e.replicar).unwrap_or(false)
                                on:change=move |_| {
                                    vm.edicao.update(|e| if let Some(e) = e.as_mut() { e.replicar = !e.replicar; });
                                }
                            />
                            <span>"Replicar para outros dias"</span>
                        </label>

                        <Show when=move || vm.edicao.get().map(|e| e.replicar).unwrap_or(false)>
                            <div class="replicacao">
                                <label class="campo">
                                    <span>"Até"</span>
                                    <input
                                        type="date"
                                        class="input"
                                        prop:value=move || vm.edicao.get().map(|e| e.data_fim_texto).unwrap_or_default()
                                        on:change=move |ev| {
                                            let valor = event_target_value(&ev);
                                            vm.edicao.update(|e| if let Some(e) = e.as_mut() { e.data_fim_texto = valor; });
                                        }
                                    />
                                </label>
                                <div class="replicacao__dias">
                                    {DIAS_SEMANA.iter().map(|&(dia, rotulo)| {
                                        view! {
                                            <button
                                                class="button button--dia"
                                                class:button--dia-ativo=move || {
                                                    vm.edicao.get()
                                                        .map(|e| e.dias_semana.contains(&dia))
                                                        .unwrap_or(false)
                                                }
                                                on:click=move |_| vm.alternar_dia_semana(dia)
                                            >
                                                {rotulo}
                                            </button>
                                        }
                                    }).collect_view()}
                                </div>
                                <p class="replicacao__previa">
                                    {move || format!("{} dia(s) serão gravados", vm.previa_replicacao())}
                                </p>
                            </div>
                        </Show>

                        <div class="painel-edicao__acoes">
                            <button class="button button--primary" on:click=move |_| vm.salvar()>
                                "Salvar"
                            </button>
                            <button class="button button--secondary" on:click=move |_| vm.fechar_edicao()>
                                "Cancelar"
                            </button>
                        </div>
                    </div>
                }
            })}
        </div>
    }
}
