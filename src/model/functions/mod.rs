mod api;
pub use api::*;

mod browser;
pub use browser::*;

pub mod controller;
pub use controller::*;

mod endpoints;
pub use endpoints::*;

mod initials;
pub use initials::*;
