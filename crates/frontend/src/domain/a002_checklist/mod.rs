pub mod ordering;
pub mod status;
pub mod ui;
