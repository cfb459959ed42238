mod assistant;
mod glyph;
mod role_tabs;
mod site_footer;
mod site_nav;
mod stat_grid;

pub use assistant::Assistant;
pub use glyph::GlyphIcon;
pub use role_tabs::RoleTabs;
pub use site_footer::SiteFooter;
pub use site_nav::SiteNav;
pub use stat_grid::{MetricList, StatGrid};
