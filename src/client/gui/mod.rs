pub mod app;
pub mod style;
pub mod views;
pub mod widgets;
