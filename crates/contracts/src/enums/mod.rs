mod card_status;
mod tipo_escala;

pub use card_status::CardStatus;
pub use tipo_escala::TipoEscala;
