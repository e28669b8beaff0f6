pub mod config;
pub mod diagram;
pub mod discover;
pub mod document;
pub mod error;
pub mod registry;
pub mod report;
pub mod validate;
pub mod wasm;
