pub mod api;
pub mod app;
pub mod config;
pub mod errors;
pub mod form;
pub mod gate;
pub mod model;
pub mod session;
pub mod ui;
