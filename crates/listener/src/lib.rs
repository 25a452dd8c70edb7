pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod webhook;
