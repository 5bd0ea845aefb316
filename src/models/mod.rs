#[macro_use]
mod macros;

mod event;
mod health;

pub use event::*;
pub use health::*;
