pub mod admin;
pub mod api;
pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod model;
pub mod player;
pub mod ui;
pub mod view_models;
pub mod viewer;
#[cfg(target_arch = "wasm32")]
mod web;

pub use app::PortalApp;
