//! Backend bridge: commands from the UI and the worker that runs them against the user store.

pub mod commands;
pub mod runtime;
