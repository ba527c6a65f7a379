pub mod activity;
pub mod general;

#[allow(unused_imports)]
pub use activity::*;
#[allow(unused_imports)]
pub use general::*;
