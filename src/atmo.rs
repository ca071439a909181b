mod action;
mod adapter;
mod convert;
mod driver;
mod error;
mod quantity;
mod report;
mod state;
#[cfg(test)]
mod testing;
mod trigger;

pub use action::*;
pub use adapter::*;
pub use convert::*;
pub use driver::*;
pub use error::*;
pub use quantity::*;
pub use state::*;
pub use trigger::*;
