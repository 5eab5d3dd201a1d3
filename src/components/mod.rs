pub use sidebar::{NavItem, active_href, header, navigation_items};
pub use status::{HasClusterStatus, HasInstanceState, StatusIndicator};

pub mod sidebar;
pub mod status;
