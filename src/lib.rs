pub mod command_utils;
pub mod config;
pub mod error;
pub mod sync;
pub mod system_config;
