pub mod types;
pub use types::*;

pub mod functions;
pub use functions::*;
