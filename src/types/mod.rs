//! Type definitions for actrollup

mod error;
mod event;

pub use error::*;
pub use event::*;
