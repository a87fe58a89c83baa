pub mod history;
pub mod pattern;
pub mod table;
pub mod view;

pub use history::WebHistory;
pub use pattern::{PathPattern, RouteParams, Segment};
pub use table::{
    FALLBACK_ROUTE_NAME, RouteDescriptor, RouteRecord, RouteSummary, RouteTable,
    RouteTableBuilder, Resolution,
};
pub use view::{Renderable, ViewRef};
