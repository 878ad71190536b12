//! Configuration repository implementations.

mod file_config;

pub use file_config::FileConfigRepository;
