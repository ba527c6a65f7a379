pub mod banner;

#[allow(unused_imports)]
pub use banner::*;
