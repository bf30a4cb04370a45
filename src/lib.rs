pub mod config;
pub mod error;
pub mod image;
pub mod models;
pub mod nodes;
pub mod ollama;

pub use error::{Error, Result};
