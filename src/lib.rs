// src/lib.rs
#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod csv;
pub mod engine;
pub mod error;
pub mod gui;
pub mod report;
pub mod store;

pub use error::{Error, MalformedRecord, Result};
