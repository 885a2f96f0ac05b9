pub mod application;
pub mod banner;
pub mod cli;
pub mod commands;
pub mod config;
pub mod containers;
pub mod error;
pub mod geo;
pub mod logging;

pub use error::BioteaError;
