//! Estado compartilhado entre visões.
//!
//! Equipe ativa e perfil são os únicos pedaços de estado que sobrevivem à
//! navegação; todo o resto (boards, formulários) pertence à visão que
//! carregou e morre com ela. Um escritor, muitos leitores; a equipe ativa
//! persiste em localStorage para sobreviver a recargas.

use contracts::domain::a001_equipe::aggregate::EquipeId;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use serde::Deserialize;
use web_sys::window;

/// Visões principais da aplicação.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Visao {
    #[default]
    Checklist,
    Escala,
}

impl Visao {
    pub fn as_str(&self) -> &'static str {
        match self {
            Visao::Checklist => "checklist",
            Visao::Escala => "escala",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Visao::Checklist => "Checklist",
            Visao::Escala => "Escala",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "escala" => Visao::Escala,
            _ => Visao::Checklist,
        }
    }

    pub fn all() -> [Visao; 2] {
        [Visao::Checklist, Visao::Escala]
    }
}

const EQUIPE_STORAGE_KEY: &str = "equipe-ativa";
const PERFIL_STORAGE_KEY: &str = "perfil-admin";

fn storage() -> Option<web_sys::Storage> {
    window().and_then(|w| w.local_storage().ok().flatten())
}

fn load_equipe_from_storage() -> Option<EquipeId> {
    storage()
        .and_then(|s| s.get_item(EQUIPE_STORAGE_KEY).ok().flatten())
        .and_then(|texto| EquipeId::from_string(&texto).ok())
}

/// Capacidade de admin, semeada pela camada de autenticação (colaborador
/// externo) no storage da sessão.
fn load_perfil_from_storage() -> bool {
    storage()
        .and_then(|s| s.get_item(PERFIL_STORAGE_KEY).ok().flatten())
        .map(|texto| texto == "true")
        .unwrap_or(false)
}

/// Parâmetros reconhecidos na query string.
#[derive(Debug, Default, Deserialize)]
struct QueryParams {
    view: Option<String>,
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub equipe_ativa: RwSignal<Option<EquipeId>>,
    pub visao_ativa: RwSignal<Visao>,
    pub perfil_admin: RwSignal<bool>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            equipe_ativa: RwSignal::new(load_equipe_from_storage()),
            visao_ativa: RwSignal::new(Visao::default()),
            perfil_admin: RwSignal::new(load_perfil_from_storage()),
        }
    }

    /// Troca a equipe ativa e persiste a escolha.
    pub fn set_equipe_ativa(&self, equipe: Option<EquipeId>) {
        self.equipe_ativa.set(equipe);
        if let Some(s) = storage() {
            match equipe {
                Some(id) => {
                    let _ = s.set_item(EQUIPE_STORAGE_KEY, &id.as_string());
                }
                None => {
                    let _ = s.remove_item(EQUIPE_STORAGE_KEY);
                }
            }
        }
    }

    pub fn ativar_visao(&self, visao: Visao) {
        self.visao_ativa.set(visao);
    }

    /// Sincroniza a visão ativa com a query string (`?view=`), nos dois
    /// sentidos: lê a URL na inicialização e a reescreve quando a visão
    /// muda, sem recarregar a página.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: QueryParams =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(view) = params.view {
            self.visao_ativa.set(Visao::from_str(&view));
        }

        let this = *self;
        Effect::new(move |_| {
            let nova_url = format!("?view={}", this.visao_ativa.get().as_str());

            let atual = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();
            if atual == nova_url {
                return;
            }
            if let Some(w) = window() {
                if let Ok(history) = w.history() {
                    let _ = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&nova_url),
                    );
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}
