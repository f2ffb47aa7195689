pub mod app;
pub mod catalog;
pub mod effects;
pub mod logging;
pub mod ui;
