use contracts::domain::a001_equipe::aggregate::{Equipe, EquipeId};
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::domain::a001_equipe::ui::model;
use crate::layout::global_context::AppGlobalContext;

/// Seletor de equipe ativa na barra superior.
///
/// Único escritor de `equipe_ativa`; as visões apenas observam.
#[component]
#[allow(non_snake_case)]
pub fn EquipePicker() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let (equipes, set_equipes) = signal::<Vec<Equipe>>(Vec::new());

    spawn_local(async move {
        match model::get_equipes(None).await {
            Ok(lista) => set_equipes.set(lista),
            Err(e) => log::warn!("falha ao carregar as equipes: {}", e),
        }
    });

    let selecionar = move |valor: String| {
        match EquipeId::from_string(&valor) {
            Ok(id) => ctx.set_equipe_ativa(Some(id)),
            Err(_) => ctx.set_equipe_ativa(None),
        }
    };

    view! {
        <select
            class="input top-header__equipe"
            on:change=move |ev| selecionar(event_target_value(&ev))
        >
            <option value="">"Sem equipe"</option>
            {move || {
                let ativa = ctx.equipe_ativa.get();
                equipes.get().into_iter().map(|equipe| {
                    let selecionada = ativa == Some(equipe.id);
                    view! {
                        <option value=equipe.id.as_string() selected=selecionada>
                            {equipe.nome}
                        </option>
                    }
                }).collect_view()
            }}
        </select>
    }
}
