//! Tema visual da aplicação.
//!
//! Contexto de tema com persistência em localStorage; o tema é um dos dois
//! pedaços de estado compartilhado entre visões (o outro é a equipe ativa).
//! Um escritor (o seletor no topo), muitos leitores.

use leptos::prelude::*;
use web_sys::window;

/// Temas disponíveis.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Claro,
    Escuro,
}

impl Theme {
    /// Nome usado como classe CSS e chave no localStorage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Claro => "claro",
            Theme::Escuro => "escuro",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Claro => "Claro",
            Theme::Escuro => "Escuro",
        }
    }

    pub fn from_str(s: &str) -> Self {
        match s {
            "escuro" => Theme::Escuro,
            _ => Theme::Claro,
        }
    }
}

const THEME_STORAGE_KEY: &str = "app-tema";

fn load_theme_from_storage() -> Theme {
    window()
        .and_then(|w| w.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(THEME_STORAGE_KEY).ok().flatten())
        .map(|s| Theme::from_str(&s))
        .unwrap_or_default()
}

fn save_theme_to_storage(theme: Theme) {
    if let Some(storage) = window().and_then(|w| w.local_storage().ok().flatten()) {
        let _ = storage.set_item(THEME_STORAGE_KEY, theme.as_str());
    }
}

/// Aplica o tema via atributo `data-theme` no body; o CSS resolve o resto.
fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

/// Contexto de tema.
#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
}

impl ThemeContext {
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        save_theme_to_storage(theme);
        apply_theme(theme);
    }

    /// Alterna entre claro e escuro.
    pub fn alternar(&self) {
        let proximo = match self.theme.get_untracked() {
            Theme::Claro => Theme::Escuro,
            Theme::Escuro => Theme::Claro,
        };
        self.set_theme(proximo);
    }
}

/// Fornece o contexto de tema para os filhos, inicializando do storage.
#[component]
pub fn ThemeProvider(children: Children) -> impl IntoView {
    let inicial = load_theme_from_storage();
    let theme = RwSignal::new(inicial);
    apply_theme(inicial);

    provide_context(ThemeContext { theme });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Botão de alternância de tema para a barra superior.
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header__icon-btn"
            on:click=move |_| ctx.alternar()
            title=move || format!("Tema: {}", ctx.theme.get().display_name())
        >
            {crate::shared::icons::icon("palette")}
        </button>
    }
}
