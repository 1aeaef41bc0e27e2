//! UI layer for the desktop dashboard.

pub mod app;

pub use app::{DashboardApp, StartupConfig, APP_TITLE};
