mod config;

pub use config::{Config, load_config};
