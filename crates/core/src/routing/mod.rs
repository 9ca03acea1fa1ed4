//! Client-side routes, the guard in front of them, and the navigation menu

pub mod guard;
pub mod menu;
pub mod route;

pub use guard::{guard, Navigation, Router};
pub use menu::{greeting, menu, MenuItem};
pub use route::{Access, Route};
