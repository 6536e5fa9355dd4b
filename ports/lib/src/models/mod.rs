mod cli_launcher;
mod client_config;
mod log_format;

pub use cli_launcher::*;
pub use client_config::*;
pub use log_format::*;
