// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod progress;
pub mod runner;
pub mod serialize;
pub mod specs;

pub use engine::{Catalog, Entry, Group};
pub use error::{Result, ScrapeError};
