//! Sino de notificações não lidas.
//!
//! Única atividade periódica da aplicação: a contagem é atualizada a cada
//! 60 segundos, independente da visibilidade da página. O laço começa na
//! montagem e para via flag no teardown do componente; uma resposta em voo
//! depois do teardown só atualiza um sinal morto.

mod model;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::shared::icons::icon;

const INTERVALO_MS: u32 = 60_000;

#[component]
#[allow(non_snake_case)]
pub fn NotificationBadge() -> impl IntoView {
    let (contagem, set_contagem) = signal(0u32);

    let ativo = Arc::new(AtomicBool::new(true));
    {
        let ativo = Arc::clone(&ativo);
        spawn_local(async move {
            loop {
                if !ativo.load(Ordering::Relaxed) {
                    break;
                }
                match model::get_nao_lidas().await {
                    Ok(total) => set_contagem.set(total),
                    // falha de polling nunca vira aviso na tela
                    Err(e) => log::warn!("falha ao atualizar notificações: {}", e),
                }
                TimeoutFuture::new(INTERVALO_MS).await;
            }
        });
    }
    on_cleanup(move || ativo.store(false, Ordering::Relaxed));

    view! {
        <div class="top-header__sino" title="Notificações não lidas">
            {icon("bell")}
            <Show when=move || { contagem.get() > 0 }>
                <span class="top-header__sino-contagem">{move || contagem.get()}</span>
            </Show>
        </div>
    }
}
