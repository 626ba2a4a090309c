pub mod api_utils;
pub mod date_utils;
pub mod dragdrop;
pub mod icons;
pub mod theme;
