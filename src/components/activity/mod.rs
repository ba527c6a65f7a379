pub mod card;
pub mod list;
pub mod participants;
pub mod signup_form;

#[allow(unused_imports)]
pub use card::*;
#[allow(unused_imports)]
pub use list::*;
#[allow(unused_imports)]
pub use participants::*;
#[allow(unused_imports)]
pub use signup_form::*;
