pub mod button;
pub mod card;
pub mod common;
pub mod route_link;

pub use button::{Button, ButtonVariant};
pub use card::Card;
pub use common::{EmptyView, ErrorMessage};
pub use route_link::RouteLink;
