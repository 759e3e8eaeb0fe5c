// src/lib.rs

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

pub mod cli;
pub mod clock;
pub mod config;
pub mod core;
pub mod document;
pub mod entry;
pub mod error;
pub mod parse;
pub mod runner;
pub mod synth;

pub use error::{AppendError, AppendResult};
pub use runner::{Appended, Appender};
