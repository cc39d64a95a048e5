//! Finboard frontend library: models, API client, pagination, UI.

pub mod api;
pub mod app;
pub mod config;
pub mod models;
pub mod pagination;
pub mod screens;
pub mod theme;
pub mod widgets;
