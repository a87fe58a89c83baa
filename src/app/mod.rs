pub mod components;
pub mod layouts;
pub mod navigation;
pub mod pages;
pub mod routes;

pub use routes::{App, Route, app_routes};
