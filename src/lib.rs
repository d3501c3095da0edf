#![forbid(unsafe_code)]

pub mod config;
pub mod constants;
pub mod error;
pub mod materialize;
pub mod observability;
pub mod runtime;
