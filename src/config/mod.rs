// src/config/mod.rs

pub mod consts;
pub mod options;
pub mod pools;

pub use options::{AppendOptions, DateTagFormat};
pub use pools::WordPools;
