//! # calc
//!
//! Library side of the calc binary: CLI definitions, configuration,
//! and the interactive console. `main.rs` wires these to the process.

pub mod cli;
pub mod config;
pub mod console;
pub mod error;

pub use config::Config;
pub use console::Console;
pub use error::AppError;
