// Standalone components
pub mod badge;
pub mod button;
pub mod card;
pub mod form_select;
pub mod input;
pub mod page_header;
pub mod textarea;

// Primitive wrappers
pub mod separator;
pub mod tabs;
pub mod toast;

pub use badge::*;
pub use button::*;
pub use card::*;
pub use form_select::*;
pub use input::*;
pub use page_header::*;
pub use separator::*;
pub use tabs::*;
pub use textarea::*;
pub use toast::*;
