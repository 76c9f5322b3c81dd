//! Configuration loaded from `.pwcrypt.toml`.

pub mod settings;

pub use settings::Settings;
