pub mod args;
pub mod commands;
mod config;
mod error;
mod fs;
pub mod model;
pub mod query;
pub mod report;
pub mod storage;
pub mod store;
mod utils;


pub use config::Config;
pub use error::{Error, Result};
pub use store::Store;
