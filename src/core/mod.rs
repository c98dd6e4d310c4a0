pub mod alphabet;
pub mod config;
pub mod text_encoding;
