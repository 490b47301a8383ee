// src/engine/mod.rs
pub mod assemble;
pub mod extract;
pub mod resolve;
pub mod types;

pub use assemble::{assemble, assemble_group};
pub use extract::{extract, Entries};
pub use resolve::resolve;
pub use types::*;
