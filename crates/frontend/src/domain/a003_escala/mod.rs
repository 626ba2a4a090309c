pub mod calendar;
pub mod planner;
pub mod ui;
