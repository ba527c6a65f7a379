pub mod activity;
pub mod banner;
pub mod error;
pub mod row;
pub mod toggle;

#[cfg(feature = "ssr")]
pub mod app_state;

pub use activity::*;
pub use banner::*;
pub use error::*;
pub use row::*;
pub use toggle::*;

#[cfg(feature = "ssr")]
pub use app_state::*;
