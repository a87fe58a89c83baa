// Public API exports (shared between WASM and native builds)
pub mod config;
pub mod routing;
pub mod shared;

// Dioxus application: route enum, shell and views
pub mod app;
