use std::fmt;
use std::sync::Arc;

use dioxus::prelude::*;

/// A view the router can mount for a resolved route.
pub trait Renderable: Send + Sync {
    /// Stable identifier, used in logs and tests.
    fn name(&self) -> &'static str;

    fn render(&self) -> Element;
}

pub type ViewRef = Arc<dyn Renderable>;

impl fmt::Debug for dyn Renderable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Renderable").field(&self.name()).finish()
    }
}
