//! Barra superior da aplicação.
//!
//! Marca, troca de visão, seletor de equipe, sino de notificações e tema.

use leptos::prelude::*;

use crate::domain::a001_equipe::ui::picker::EquipePicker;
use crate::layout::global_context::{AppGlobalContext, Visao};
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use crate::system::notifications::NotificationBadge;

#[component]
#[allow(non_snake_case)]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <span class="top-header__title">"Encomendas — Operação"</span>
            </div>

            <nav class="top-header__nav">
                {Visao::all().into_iter().map(|visao| {
                    let ativa = move || ctx.visao_ativa.get() == visao;
                    let icone = match visao {
                        Visao::Checklist => "checklist",
                        Visao::Escala => "calendar",
                    };
                    view! {
                        <button
                            class="top-header__nav-btn"
                            class:top-header__nav-btn--ativa=ativa
                            on:click=move |_| ctx.ativar_visao(visao)
                        >
                            {icon(icone)}
                            {visao.display_name()}
                        </button>
                    }
                }).collect_view()}
            </nav>

            <div class="top-header__actions">
                <EquipePicker />
                <NotificationBadge />
                <ThemeToggle />
            </div>
        </div>
    }
}
