pub mod common;

pub mod a001_equipe;
pub mod a002_checklist;
pub mod a003_escala;
