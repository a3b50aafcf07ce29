//! Configuration module
//!
//! Settings live in a TOML file under the user config directory; every
//! section falls back to defaults when the file or a key is missing.

pub mod config;

pub use config::Config;
