/// Layered settings (defaults, TOML file, environment).
pub mod config;
