//! GUI panels and application state.

pub mod chart;
pub mod classifier_panel;
pub mod components;
pub mod dashboard;
pub mod main_app;
pub mod map_view;

pub use main_app::MainApp;
