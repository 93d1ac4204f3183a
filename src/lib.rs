pub mod cli;
pub mod error;
pub mod loaders;
pub mod models;
pub mod payloads;
pub mod readers;
pub mod settings;
pub mod utils;

pub use error::{DashboardError, Result};
