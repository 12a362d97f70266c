pub mod app;
pub mod cli;
pub mod cmd;
pub mod constants;
pub mod convert;
pub mod error;
pub mod fs_utils;
pub mod hub;
pub mod logger;
pub mod quant;
pub mod setup;

pub use error::{Result, ToolError};
