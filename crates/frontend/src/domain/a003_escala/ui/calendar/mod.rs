//! Calendário administrativo de escalas.
//!
//! MVVM no padrão da aplicação; a API de escalas (`model`) é visível para o
//! crate porque o checklist usa a consulta de escala como portão de carga.

pub(crate) mod model;
mod view;
mod view_model;

pub use view::EscalaCalendarioView;
pub use view_model::EscalaCalendarioViewModel;
