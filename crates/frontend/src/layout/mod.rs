pub mod global_context;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

use global_context::{AppGlobalContext, Visao};

use crate::domain::a002_checklist::ui::board::ChecklistBoardView;
use crate::domain::a003_escala::ui::calendar::EscalaCalendarioView;

/// Casca da aplicação: barra superior + visão ativa.
///
/// A troca de visão passa pelo contexto global (e pela query string), não
/// por um roteador; cada visão é montada do zero ao ser ativada e descarta
/// seu estado ao sair.
#[component]
#[allow(non_snake_case)]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // integração com a URL, uma vez na criação da casca
    ctx.init_router_integration();

    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <div class="app-main">
                    {move || match ctx.visao_ativa.get() {
                        Visao::Checklist => view! { <ChecklistBoardView /> }.into_any(),
                        Visao::Escala => view! { <EscalaCalendarioView /> }.into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
