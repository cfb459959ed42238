pub mod error;
pub mod feature_flags;

// GroupDeliver domain
pub mod announcement;
pub mod assistant;
pub mod catalog;
pub mod contact;
pub mod display;
pub mod marketing;
pub mod money;
pub mod navigation;
pub mod order;
pub mod role;
pub mod route;
pub mod session;
pub mod signup;

pub use error::*;
pub use feature_flags::*;

// catalog, marketing and assistant are used through their module paths.
pub use announcement::*;
pub use contact::*;
pub use display::*;
pub use money::*;
pub use navigation::*;
pub use order::*;
pub use role::*;
pub use route::*;
pub use session::*;
pub use signup::*;
