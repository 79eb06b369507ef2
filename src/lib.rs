pub mod cli;
pub mod config;
pub mod engine;
pub mod extractors;
pub mod parser;
pub mod types;
