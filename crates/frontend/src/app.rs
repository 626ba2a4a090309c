use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::theme::ThemeProvider;

#[component]
#[allow(non_snake_case)]
pub fn App() -> impl IntoView {
    // estado compartilhado entre visões: equipe ativa, visão, perfil
    provide_context(AppGlobalContext::new());

    view! {
        <ThemeProvider>
            <Shell />
        </ThemeProvider>
    }
}
