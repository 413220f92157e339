#![no_std]

extern crate alloc;

pub use board::*;
pub use clue::*;
pub use error::*;
pub use loader::*;
pub use session::*;
pub use shuffle::*;
pub use surface::*;
pub use types::*;

mod board;
mod clue;
mod error;
mod loader;
mod session;
mod shuffle;
mod surface;
mod types;
