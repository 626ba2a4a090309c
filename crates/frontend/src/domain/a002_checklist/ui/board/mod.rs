//! Quadro de checklist do dia.
//!
//! MVVM no padrão da aplicação:
//! - model.rs: funções de API (carregar, registrar, reordenar, mover)
//! - view_model.rs: estado local + política otimista de mutação
//! - view.rs: componente Leptos (UI pura, drag-and-drop)

mod model;
mod view;
mod view_model;

pub use view::ChecklistBoardView;
pub use view_model::ChecklistBoardViewModel;
