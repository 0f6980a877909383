//! API request handlers

mod assess;
mod catalog;
mod health;

pub use assess::*;
pub use catalog::*;
pub use health::*;
